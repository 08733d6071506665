use crate::err::Error;
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port: u16,
}

impl Settings {
    /// Resolve settings from defaults, an optional config file and CLI overrides.
    ///
    /// An explicitly given config file must exist; the default `config` file
    /// next to the process is optional.
    pub fn new(
        config_file: Option<String>,
        address: Option<String>,
        port: Option<u16>,
    ) -> Result<Self, Error> {
        let explicit = config_file.is_some();
        let config_name = config_file.unwrap_or_else(|| String::from("config"));

        let builder = Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", 8000)?
            .add_source(File::with_name(&config_name).required(explicit))
            .set_override_option("address", address)?
            .set_override_option("port", port)?;

        let config = builder.build()?;

        Ok(Settings {
            address: config.get("address")?,
            port: config.get("port")?,
        })
    }

    pub fn print(&self) {
        println!("Address: {}", self.address);
        println!("Port: {}", self.port);
    }

    /// Socket address string for the listener, e.g. `0.0.0.0:8000`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new(None, None, None).unwrap();
        assert_eq!(settings.address, "0.0.0.0");
        assert_eq!(settings.port, 8000);
    }

    #[test]
    fn test_overrides() {
        let settings =
            Settings::new(None, Some(String::from("127.0.0.1")), Some(9000)).unwrap();
        assert_eq!(settings.address, "127.0.0.1");
        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn test_socket_addr() {
        let settings = Settings::new(None, None, None).unwrap();
        assert_eq!(settings.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let result = Settings::new(Some(String::from("no_such_config")), None, None);
        assert!(result.is_err());
    }
}
