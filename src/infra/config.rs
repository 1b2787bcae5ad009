//! On-disk app configuration: where the database file lives.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub database_path: Option<String>,
}

/// Managed state holding the config file location and the path of the
/// database the current session was started against. Persisting a new
/// database path takes effect for future sessions; the open connection
/// keeps using the file it was opened on.
pub struct ConfigStore {
    config_path: PathBuf,
    database_path: Mutex<PathBuf>,
}

impl ConfigStore {
    pub fn new(config_path: PathBuf, database_path: PathBuf) -> Self {
        Self {
            config_path,
            database_path: Mutex::new(database_path),
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_path.lock().expect("config lock").clone()
    }

    /// Write the new database path to the config file, then update the
    /// in-memory path so reads reflect it immediately.
    pub fn persist_database_path(&self, new_path: &Path) -> Result<(), AppError> {
        let config = AppConfig {
            database_path: Some(new_path.display().to_string()),
        };
        let content =
            serde_json::to_string_pretty(&config).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Config(e.to_string()))?;
        }
        std::fs::write(&self.config_path, content).map_err(|e| AppError::Config(e.to_string()))?;
        *self.database_path.lock().expect("config lock") = new_path.to_path_buf();
        Ok(())
    }
}

/// Lenient config read: a missing or unreadable file means defaults.
pub fn load_config(config_path: &Path) -> AppConfig {
    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(config_path) {
            if let Ok(config) = serde_json::from_str(&content) {
                return config;
            }
        }
        log::warn!("Unreadable config at {:?}, using defaults", config_path);
    }
    AppConfig::default()
}

/// A configured custom path wins when it (or its parent directory) exists;
/// anything else falls back to the default location.
pub fn resolve_db_path(config: &AppConfig, default_path: PathBuf) -> PathBuf {
    if let Some(ref custom) = config.database_path {
        let path = PathBuf::from(custom);
        if path.exists() || path.parent().map(|p| p.exists()).unwrap_or(false) {
            return path;
        }
        log::warn!("Configured database path {:?} is unusable, using default", path);
    }
    default_path
}
