use clap::Parser;
use datetime_ws::{app::App, clock::Clock, init::settings::Settings};

/// Datetime webserver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(short, long)]
    address: Option<String>,
    /// Server port
    #[arg(short, long)]
    port: Option<u16>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let settings = match Settings::new(args.config_file, args.address, args.port) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    };
    settings.print();

    let app = App::new(Clock::System);

    if let Err(e) = app.serve(&settings.socket_addr()).await {
        eprintln!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}
