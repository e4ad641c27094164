use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 5050;
const PORT_ENV: &str = "CALLBACK_PORT";

/// Listener configuration. The port is the only recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Reads `CALLBACK_PORT` from the process environment, falling back to `.env`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let raw = match env::var(PORT_ENV) {
            Ok(value) => Some(value),
            Err(_) => dotenv::var(PORT_ENV).ok(),
        };
        Self::from_port_value(raw.as_deref())
    }

    fn from_port_value(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => {
                let port = value
                    .parse::<u16>()
                    .with_context(|| format!("invalid {}: {:?}", PORT_ENV, value))?;
                Ok(Self { port })
            }
        }
    }
}
