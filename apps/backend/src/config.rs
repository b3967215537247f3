//! Server configuration read from the environment.

use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration.
///
/// Env vars (a `.env` file is loaded first if present):
/// - HOST: bind address, default `0.0.0.0`
/// - PORT: listen port, default `3000`
/// - FLASHLEARN_DATA: path of the sets JSON file, default
///   `<data dir>/flashlearn/sets.json`
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got {value:?}"))?,
            Err(_) => 3000,
        };

        let data_path = std::env::var_os("FLASHLEARN_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        Ok(Self {
            host,
            port,
            data_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_data_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("flashlearn").join("sets.json"),
        None => PathBuf::from("sets.json"),
    }
}
