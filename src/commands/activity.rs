//! Activity command handlers (DTO boundary).

use crate::app::{activity_create, activity_delete, activity_list, activity_update, Activity};
use crate::error::AppError;
use crate::infra::DbPool;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn get_all_activities(pool: State<DbPool>) -> Result<Vec<Activity>, AppError> {
    activity_list(&pool)
}

#[tauri::command(rename_all = "snake_case")]
pub fn create_activity(pool: State<DbPool>, activity: Activity) -> Result<Activity, AppError> {
    activity_create(&pool, activity)
}

#[tauri::command(rename_all = "snake_case")]
pub fn update_activity(pool: State<DbPool>, activity: Activity) -> Result<(), AppError> {
    activity_update(&pool, activity)
}

#[tauri::command(rename_all = "snake_case")]
pub fn delete_activity(pool: State<DbPool>, id: i64) -> Result<(), AppError> {
    activity_delete(&pool, id)
}
