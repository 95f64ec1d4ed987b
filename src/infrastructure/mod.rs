// Infrastructure: configuration, logging and server lifecycle

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Args, ServerConfig};
pub use logging::setup_logger;
pub use server::start_server;
