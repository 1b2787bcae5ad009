//! Plant use cases: list, create, update, delete, reorder sweep.

use crate::domain::{is_valid_mask, PlantType, SunRequirements};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: Option<i64>,
    pub name: String,
    pub plant_type: Option<PlantType>,
    #[serde(default)]
    pub sun_requirements: SunRequirements,
    pub sow_periods: i32,
    pub plant_periods: i32,
    pub notes: Option<String>,
    #[serde(default)]
    pub needs_reorder: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

const PLANT_COLUMNS: &str = "id, name, plant_type, sun_requirements, sow_periods, plant_periods, notes, needs_reorder, created_at, updated_at";

fn plant_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Plant> {
    let plant_type: Option<String> = row.get(2)?;
    Ok(Plant {
        id: row.get(0)?,
        name: row.get(1)?,
        plant_type: plant_type.as_deref().and_then(PlantType::from_str),
        sun_requirements: SunRequirements(row.get(3)?),
        sow_periods: row.get(4)?,
        plant_periods: row.get(5)?,
        notes: row.get(6)?,
        needs_reorder: row.get::<_, i32>(7)? != 0,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

pub(crate) fn validate_plant(plant: &Plant) -> Result<(), AppError> {
    if plant.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if !plant.sun_requirements.is_valid() {
        return Err(AppError::Validation(format!(
            "sun_requirements out of range: {}",
            plant.sun_requirements.bits()
        )));
    }
    if !is_valid_mask(plant.sow_periods) {
        return Err(AppError::Validation(format!(
            "sow_periods out of range: {}",
            plant.sow_periods
        )));
    }
    if !is_valid_mask(plant.plant_periods) {
        return Err(AppError::Validation(format!(
            "plant_periods out of range: {}",
            plant.plant_periods
        )));
    }
    Ok(())
}

pub fn plant_list(pool: &DbPool) -> Result<Vec<Plant>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM plants ORDER BY name COLLATE NOCASE",
            PLANT_COLUMNS
        ))
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], plant_from_row)?;

    let mut plants = Vec::new();
    for plant in rows {
        plants.push(plant?);
    }
    Ok(plants)
}

pub fn plant_create(pool: &DbPool, plant: Plant) -> Result<Plant, AppError> {
    validate_plant(&plant)?;
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO plants (name, plant_type, sun_requirements, sow_periods, plant_periods, notes, needs_reorder, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        params![
            plant.name.trim(),
            plant.plant_type.map(|t| t.as_str()),
            plant.sun_requirements.bits(),
            plant.sow_periods,
            plant.plant_periods,
            plant.notes,
            plant.needs_reorder as i32,
            &now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    plant_get(&conn, id)
}

pub fn plant_update(pool: &DbPool, plant: Plant) -> Result<(), AppError> {
    let id = plant
        .id
        .ok_or_else(|| AppError::Validation("id is required".into()))?;
    validate_plant(&plant)?;
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    let rows = conn.execute(
        "UPDATE plants SET name = ?1, plant_type = ?2, sun_requirements = ?3, sow_periods = ?4, plant_periods = ?5, notes = ?6, needs_reorder = ?7, updated_at = ?8 WHERE id = ?9",
        params![
            plant.name.trim(),
            plant.plant_type.map(|t| t.as_str()),
            plant.sun_requirements.bits(),
            plant.sow_periods,
            plant.plant_periods,
            plant.notes,
            plant.needs_reorder as i32,
            &now,
            id,
        ],
    )?;

    if rows == 0 {
        return Err(AppError::NotFound(format!("plant {}", id)));
    }
    Ok(())
}

pub fn plant_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);
    let rows = conn.execute("DELETE FROM plants WHERE id = ?1", [id])?;
    if rows == 0 {
        return Err(AppError::NotFound(format!("plant {}", id)));
    }
    Ok(())
}

/// Sweep over plants flagged for seed re-buying.
pub fn plants_to_reorder(pool: &DbPool) -> Result<Vec<Plant>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM plants WHERE needs_reorder = 1 ORDER BY name COLLATE NOCASE",
            PLANT_COLUMNS
        ))
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], plant_from_row)?;

    let mut plants = Vec::new();
    for plant in rows {
        plants.push(plant?);
    }
    Ok(plants)
}

/// Internal helper to read a single plant.
fn plant_get(conn: &rusqlite::Connection, id: i64) -> Result<Plant, AppError> {
    conn.query_row(
        &format!("SELECT {} FROM plants WHERE id = ?1", PLANT_COLUMNS),
        [id],
        plant_from_row,
    )
    .map_err(|_| AppError::NotFound(format!("plant {}", id)))
}
