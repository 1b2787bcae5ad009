//! Database file location: query, persist, relocate.

use crate::error::AppError;
use crate::infra::config::ConfigStore;
use std::path::Path;

pub fn database_path(store: &ConfigStore) -> String {
    store.database_path().display().to_string()
}

/// Persist a new database location for future sessions and return it.
pub fn save_database_path(store: &ConfigStore, new_path: &str) -> Result<String, AppError> {
    if new_path.trim().is_empty() {
        return Err(AppError::Validation("new_path is required".into()));
    }
    store.persist_database_path(Path::new(new_path))?;
    Ok(new_path.to_string())
}

/// Relocate the database: copy the file to `new_path`, then persist the new
/// location. Not transactional: a copy failure leaves everything untouched,
/// while a config failure after a successful copy leaves the file duplicated
/// with the old path still authoritative. The two failures carry distinct
/// codes so the caller can retry just the save step.
///
/// The open connection keeps using the old file; the new location takes
/// effect at next startup.
pub fn move_database(store: &ConfigStore, new_path: &str) -> Result<String, AppError> {
    if new_path.trim().is_empty() {
        return Err(AppError::Validation("new_path is required".into()));
    }
    let current = store.database_path();
    if current == Path::new(new_path) {
        return Err(AppError::Validation(
            "destination equals the current database path".into(),
        ));
    }

    std::fs::copy(&current, new_path).map_err(|e| {
        AppError::FileCopy(format!("{} -> {}: {}", current.display(), new_path, e))
    })?;
    log::info!("Database copied to {}", new_path);

    save_database_path(store, new_path)
}
