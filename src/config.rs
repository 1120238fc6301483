use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Word pools (embedded content is used when unset)
    pub word_pools_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
                Err(_) => 8080,
            },

            word_pools_dir: std::env::var("WORD_POOLS_DIR")
                .ok()
                .map(|dir| dir.trim().to_string())
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Socket address string for the listener (e.g., "0.0.0.0:8080")
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
