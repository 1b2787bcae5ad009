//! Database location command handlers.

use crate::app;
use crate::error::AppError;
use crate::infra::config::ConfigStore;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn get_database_path(store: State<ConfigStore>) -> String {
    app::database_path(&store)
}

#[tauri::command(rename_all = "snake_case")]
pub fn save_database_path(store: State<ConfigStore>, new_path: String) -> Result<String, AppError> {
    app::save_database_path(&store, &new_path)
}

#[tauri::command(rename_all = "snake_case")]
pub fn move_database(store: State<ConfigStore>, new_path: String) -> Result<String, AppError> {
    app::move_database(&store, &new_path)
}
