// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use crate::core::rotation::DEFAULT_ROTATION_DAYS;
use crate::models::{DEFAULT_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::tools::breach::DEFAULT_ENDPOINT;

// Nothing shorter is ever accepted, whatever the environment says.
const MIN_LENGTH_FLOOR: usize = 4;

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,

    // Breach Check
    pub breach_endpoint: String,
    pub breach_timeout: Duration,

    // Rotation
    pub rotation_days: u32,

    // Encrypted Save
    pub save_path: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            min_password_length: MIN_PASSWORD_LENGTH,

            // Breach Check
            breach_endpoint: DEFAULT_ENDPOINT.to_string(),
            breach_timeout: Duration::from_secs(10),

            // Rotation
            rotation_days: DEFAULT_ROTATION_DAYS,

            // Encrypted Save
            save_path: PathBuf::from("saved_passwords.enc"),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn parse_var<T: FromStr>(
    vars: &impl Fn(&str) -> Option<String>,
    name: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let val = vars(name)?;
    match val.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", val, name));
            None
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The logger is configured from the result, so problems found while
    /// loading are returned for the caller to log once logging is up.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup, starting from the defaults.
    pub fn from_lookup(vars: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = parse_var(&vars, "PASSENGEN_MIN_LENGTH", &mut warnings) {
            config.min_password_length = usize::max(length, MIN_LENGTH_FLOOR);
        }

        if let Some(length) = parse_var(&vars, "PASSENGEN_DEFAULT_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if config.default_password_length < config.min_password_length {
            warnings.push(format!(
                "Default length {} is below the minimum {}, using the minimum",
                config.default_password_length, config.min_password_length
            ));
            config.default_password_length = config.min_password_length;
        }

        // Breach Check
        if let Some(endpoint) = vars("PASSENGEN_BREACH_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.breach_endpoint = endpoint.trim().to_string();
            }
        }

        let timeout_secs: Option<u64> = parse_var(&vars, "PASSENGEN_BREACH_TIMEOUT_SECS", &mut warnings);
        if let Some(secs) = timeout_secs {
            config.breach_timeout = Duration::from_secs(secs.max(1));
        }

        // Rotation
        if let Some(days) = parse_var(&vars, "PASSENGEN_ROTATION_DAYS", &mut warnings) {
            config.rotation_days = days;
        }

        // Encrypted Save
        if let Some(path) = vars("PASSENGEN_SAVE_PATH") {
            config.save_path = PathBuf::from(path);
        }

        // Logging
        if let Some(level) = vars("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = vars("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, warnings)
    }
}
