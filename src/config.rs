use std::env;

use anyhow::Result;
use derive_getters::Getters;
use log::LevelFilter;

pub const DEFAULT_REGISTER_PATH: &str = "assets.csv";
pub const DEFAULT_LOG_FILE: &str = "depreciation-tracker.log";

#[derive(Clone, Debug, Getters)]
pub struct Config {
    register_path: String,
    log_level: LevelFilter,
    log_file: String,
}

impl Config {
    /// Reads `DEPRECIATION_REGISTER`, `DEPRECIATION_LOG_LEVEL` and
    /// `DEPRECIATION_LOG_FILE`. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        let register_path =
            env::var("DEPRECIATION_REGISTER").unwrap_or_else(|_| DEFAULT_REGISTER_PATH.to_string());
        let log_level = env::var("DEPRECIATION_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let log_file =
            env::var("DEPRECIATION_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            register_path: expand_path(&register_path)?,
            log_level: parse_log_level(&log_level),
            log_file: expand_path(&log_file)?,
        })
    }

    pub fn with_register_path(mut self, register_path: Option<&str>) -> Result<Self> {
        if let Some(path) = register_path {
            self.register_path = expand_path(path)?;
        }
        Ok(self)
    }
}

pub fn expand_path(path: &str) -> Result<String> {
    Ok(shellexpand::full(path)?.into_owned())
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
