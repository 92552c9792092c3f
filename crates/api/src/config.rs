//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Slotbook API
//! server. It retrieves configuration values from environment variables and
//! provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `SLOTS_START`: Opening time of the bookable window, `HH:MM` (default: "14:00")
//! - `SLOTS_END`: Closing time of the bookable window, `HH:MM` (default: "16:45")
//! - `SLOTS_DURATION`: Slot length in minutes (default: 15)

use eyre::{Result, WrapErr, eyre};
use slotbook_core::schedule::{SlotWindowConfig, TimeOfDay};
use std::env;
use tracing::Level;

/// Configuration for the Slotbook API server
///
/// This struct encapsulates all configuration options for the API server,
/// including networking, database connections, and the slot window every
/// company's timetable is generated from. The window is read from the
/// environment exactly once, here; the generator only ever sees the
/// resulting value.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Bookable window used to generate every new company's slots
    pub slot_window: SlotWindowConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - SLOTS_START or SLOTS_END is not a valid `HH:MM` string
    /// - SLOTS_DURATION is not a positive integer number of minutes
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Slot window settings
        let slot_window = slot_window_from_env()?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            slot_window,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `SLOTS_START`, `SLOTS_END`, and `SLOTS_DURATION` (minutes) into a
/// [`SlotWindowConfig`].
fn slot_window_from_env() -> Result<SlotWindowConfig> {
    let start = env::var("SLOTS_START").unwrap_or_else(|_| "14:00".to_string());
    let end = env::var("SLOTS_END").unwrap_or_else(|_| "16:45".to_string());
    let duration_minutes: u32 = env::var("SLOTS_DURATION")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .wrap_err("Invalid SLOTS_DURATION value")?;

    let start = TimeOfDay::parse(&start).map_err(|e| eyre!("Invalid SLOTS_START: {e}"))?;
    let end = TimeOfDay::parse(&end).map_err(|e| eyre!("Invalid SLOTS_END: {e}"))?;

    SlotWindowConfig::new(start, end, duration_minutes * 60)
        .map_err(|e| eyre!("Invalid slot window: {e}"))
}
