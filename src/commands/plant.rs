//! Plant command handlers (DTO boundary).

use crate::app::{
    plant_create, plant_delete, plant_list, plant_update, plants_to_reorder, Plant,
};
use crate::error::AppError;
use crate::infra::DbPool;
use tauri::State;

#[tauri::command(rename_all = "snake_case")]
pub fn get_all_plants(pool: State<DbPool>) -> Result<Vec<Plant>, AppError> {
    plant_list(&pool)
}

#[tauri::command(rename_all = "snake_case")]
pub fn create_plant(pool: State<DbPool>, plant: Plant) -> Result<Plant, AppError> {
    plant_create(&pool, plant)
}

#[tauri::command(rename_all = "snake_case")]
pub fn update_plant(pool: State<DbPool>, plant: Plant) -> Result<(), AppError> {
    plant_update(&pool, plant)
}

#[tauri::command(rename_all = "snake_case")]
pub fn delete_plant(pool: State<DbPool>, id: i64) -> Result<(), AppError> {
    plant_delete(&pool, id)
}

#[tauri::command(rename_all = "snake_case")]
pub fn get_plants_to_reorder(pool: State<DbPool>) -> Result<Vec<Plant>, AppError> {
    plants_to_reorder(&pool)
}
