use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON slot files.
    pub data_dir: PathBuf,
    /// Fixed artificial delay applied to simulated write operations.
    pub simulated_latency: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_dir = match std::env::var("HACKFOLIO_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .context("Cannot determine a data directory; set HACKFOLIO_DATA_DIR")?
                .join("hackfolio"),
        };

        let latency_ms = match std::env::var("HACKFOLIO_LATENCY_MS") {
            Ok(raw) => raw
                .parse()
                .context("HACKFOLIO_LATENCY_MS must be a number")?,
            Err(_) => 1000,
        };

        Ok(Self {
            data_dir,
            simulated_latency: Duration::from_millis(latency_ms),
        })
    }
}
