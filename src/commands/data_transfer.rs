//! Import command handlers.

use crate::app;
use crate::error::AppError;
use crate::infra::DbPool;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn import_plants_tsv(pool: State<DbPool>, tsv_content: String) -> Result<usize, AppError> {
    app::import_plants_tsv(&pool, &tsv_content)
}
