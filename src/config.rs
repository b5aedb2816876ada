use crate::schedule::parse_date;
use chrono::NaiveDate;
use std::{env, path::PathBuf};

const DEFAULT_DATA_PATH: &str = "data/state.json";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    /// Reference date pinned through `APP_TODAY`; the local calendar date otherwise.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_path: resolve_data_path(env::var("APP_DATA_PATH").ok()),
            port: resolve_port(env::var("PORT").ok()),
            today: resolve_today(env::var("APP_TODAY").ok()),
        }
    }
}

pub fn resolve_data_path(value: Option<String>) -> PathBuf {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

pub fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn resolve_today(value: Option<String>) -> Option<NaiveDate> {
    let value = value?;
    let parsed = parse_date(&value);
    if parsed.is_none() {
        tracing::warn!("ignoring APP_TODAY={value:?}, expected YYYY-MM-DD");
    }
    parsed
}
