use std::{env, path::PathBuf};
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUOTES_PATH: &str = "data/quotes.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub quotes_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            quotes_path: resolve_quotes_path(env::var("QUOTES_PATH").ok()),
        }
    }
}

pub fn parse_port(value: Option<&str>) -> u16 {
    let Some(value) = value else {
        info!("PORT not set, using default: {DEFAULT_PORT}");
        return DEFAULT_PORT;
    };

    value.trim().parse::<u16>().unwrap_or_else(|err| {
        warn!("invalid PORT value {value:?}: {err}, using default: {DEFAULT_PORT}");
        DEFAULT_PORT
    })
}

pub fn resolve_quotes_path(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_QUOTES_PATH),
    }
}
