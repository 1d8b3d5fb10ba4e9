mod config;

pub use config::Config;

use std::path::PathBuf;

/// Returns `~/.config/restwell[-dev]/` based on RESTWELL_ENV.
///
/// Set RESTWELL_ENV=dev to use a separate development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESTWELL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("restwell-dev")
    } else {
        base_dir.join("restwell")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
