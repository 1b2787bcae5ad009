//! Calendar command handlers (DTO boundary).

use crate::app::{month_data, MonthData};
use crate::error::AppError;
use crate::infra::DbPool;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn get_month_data(pool: State<DbPool>, month: i32) -> Result<MonthData, AppError> {
    month_data(&pool, month)
}
