pub mod config;
pub mod error;
pub mod utils;
pub mod web;

pub use config::Config;
pub use error::CallbackError;
pub use web::{start_server, BoundServer, CallbackServer};
