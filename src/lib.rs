pub mod api;
pub mod app;
pub mod clock;
pub mod err;
pub mod init;

use clock::Clock;

#[derive(Clone)]
pub struct SharedState {
    pub clock: Clock,
}
