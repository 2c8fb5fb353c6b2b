//! API key generation command.
//!
//! Writes a random alphanumeric key to the configured key file (or an
//! explicit `--output` path). The server reads this file at startup and on
//! SIGHUP.

use std::path::PathBuf;

use rand::Rng;
use rand::distr::Alphanumeric;

use cafe_api_server::config::ServerConfig;
use tracing::info;

/// Generate a key of `length` characters and write it to disk.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the file cannot be
/// written.
pub fn run(length: usize, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = match output {
        Some(path) => path,
        None => ServerConfig::from_env()?.api_key_file,
    };

    let key = generate_key(length);
    std::fs::write(&path, &key)?;

    info!(path = %path.display(), length, "API key written");
    Ok(())
}

/// Generate a random alphanumeric key.
fn generate_key(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
