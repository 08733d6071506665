use crate::{api, clock::Clock, err::Error, SharedState};
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::TcpListener;

/// The main application object
pub struct App {
    shared_state: SharedState,
}

impl App {
    /// Create a new application object
    ///
    /// # Arguments
    /// * `clock` - The time source used by the datetime endpoint
    pub fn new(clock: Clock) -> Self {
        Self {
            shared_state: SharedState { clock },
        }
    }

    /// Build the router serving the API
    pub fn router(&self) -> Router {
        Router::new()
            .route("/datetime", get(api::datetime::current_datetime))
            .with_state(self.shared_state.clone())
            .fallback(unknown_route)
    }

    /// Start a server and serve the API
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if the listener could not be bound or the server failed
    pub async fn serve(self, address: &str) -> Result<(), Error> {
        let listener = TcpListener::bind(address)?;

        println!("Listening on: http://{}", address);

        axum_server::from_tcp(listener)
            .serve(self.router().into_make_service())
            .await?;

        Ok(())
    }
}

async fn unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found\n")
}
