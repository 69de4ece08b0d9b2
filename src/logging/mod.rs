// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use passengen::core::Config;

/// Install the global logger. Output goes to stderr unless `LOG_FILE` is set,
/// so it never mixes with generated passwords on stdout.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_env("PASSENGEN_LOG");

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    // A second init (tests, repeated calls) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }

    Ok(())
}
