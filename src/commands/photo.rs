//! Plant photo command handlers (DTO boundary).

use crate::app::{photo_add, photo_delete, photo_list_by_plant, PlantPhoto};
use crate::error::AppError;
use crate::infra::DbPool;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn get_photos(pool: State<DbPool>, plant_id: i64) -> Result<Vec<PlantPhoto>, AppError> {
    photo_list_by_plant(&pool, plant_id)
}

#[tauri::command(rename_all = "snake_case")]
pub fn add_photo(
    pool: State<DbPool>,
    plant_id: i64,
    image_data: String,
    sort_order: i32,
) -> Result<PlantPhoto, AppError> {
    photo_add(&pool, plant_id, image_data, sort_order)
}

#[tauri::command(rename_all = "snake_case")]
pub fn delete_photo(pool: State<DbPool>, id: i64) -> Result<(), AppError> {
    photo_delete(&pool, id)
}
