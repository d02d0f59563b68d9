use serde::Deserialize;
use std::{env, str::FromStr};
use thiserror::Error;

use crate::models::SeatLayout;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("invalid seat layout: {0}")]
    Layout(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub layout: SeatLayout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SeatLayout::default();

        let config = Config {
            app: AppConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", 8000)?,
                rust_log: lookup("RUST_LOG")
                    .unwrap_or_else(|| "train_booking=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                pool_size: parse_or(&lookup, "DB_POOL_SIZE", 10)?,
            },
            layout: SeatLayout {
                row_count: parse_or(&lookup, "TRAIN_ROWS", defaults.row_count)?,
                seats_per_standard_row: parse_or(
                    &lookup,
                    "TRAIN_SEATS_PER_ROW",
                    defaults.seats_per_standard_row,
                )?,
                seats_in_last_row: parse_or(
                    &lookup,
                    "TRAIN_SEATS_LAST_ROW",
                    defaults.seats_in_last_row,
                )?,
            },
        };

        validate_layout(&config.layout)?;
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { name, value }),
        },
    }
}

fn validate_layout(layout: &SeatLayout) -> Result<(), ConfigError> {
    if layout.row_count < 1 || layout.seats_per_standard_row < 1 || layout.seats_in_last_row < 1 {
        return Err(ConfigError::Layout("rows and seats must be at least 1".to_string()));
    }
    // Keeps seat id arithmetic far from i32 overflow
    if layout.row_count > SeatLayout::MAX_ROWS
        || layout.seats_per_standard_row > SeatLayout::MAX_SEATS_PER_ROW
    {
        return Err(ConfigError::Layout(format!(
            "at most {} rows of {} seats are supported",
            SeatLayout::MAX_ROWS,
            SeatLayout::MAX_SEATS_PER_ROW
        )));
    }
    // Seat ids are derived from the standard row width
    if layout.seats_in_last_row > layout.seats_per_standard_row {
        return Err(ConfigError::Layout(
            "last row cannot be wider than a standard row".to_string(),
        ));
    }
    Ok(())
}
