mod config;
pub mod kv;
pub mod persist;

pub use config::{Config, LoggingConfig, StorageConfig, TodoConfig, UiConfig};
pub use kv::{KvStore, MemoryKv, SqliteKv};
pub use persist::{corrupt_key, load, save};

use std::path::PathBuf;

/// Returns the data directory for dailydeck.
///
/// Resolution order:
/// 1. `DAILYDECK_HOME`, used verbatim when set.
/// 2. `~/.config/dailydeck-dev/` when `DAILYDECK_ENV=dev`.
/// 3. `~/.config/dailydeck/`.
///
/// The directory is created if missing.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("DAILYDECK_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("DAILYDECK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("dailydeck-dev")
            } else {
                base_dir.join("dailydeck")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
