//! Plant photo use cases: list by plant, add, delete.
//!
//! Photos belong to exactly one plant; deleting the plant cascades through
//! the schema's foreign key, not through this layer.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantPhoto {
    pub id: Option<i64>,
    pub plant_id: i64,
    pub sort_order: i32,
    /// Base64-encoded image payload; absent when only metadata is wanted.
    pub image_data: Option<String>,
    pub created_at: Option<String>,
}

fn photo_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlantPhoto> {
    Ok(PlantPhoto {
        id: row.get(0)?,
        plant_id: row.get(1)?,
        sort_order: row.get(2)?,
        image_data: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Photos of one plant, display order: sort_order, ties by insertion order.
pub fn photo_list_by_plant(pool: &DbPool, plant_id: i64) -> Result<Vec<PlantPhoto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT id, plant_id, sort_order, image_data, created_at FROM plant_photos WHERE plant_id = ?1 ORDER BY sort_order, id")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([plant_id], photo_from_row)?;

    let mut photos = Vec::new();
    for photo in rows {
        photos.push(photo?);
    }
    Ok(photos)
}

pub fn photo_add(
    pool: &DbPool,
    plant_id: i64,
    image_data: String,
    sort_order: i32,
) -> Result<PlantPhoto, AppError> {
    let conn = get_connection(pool);

    let plant_exists: bool = conn
        .query_row("SELECT 1 FROM plants WHERE id = ?1", [plant_id], |_| {
            Ok(true)
        })
        .unwrap_or(false);
    if !plant_exists {
        return Err(AppError::NotFound(format!("plant {}", plant_id)));
    }

    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO plant_photos (plant_id, sort_order, image_data, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![plant_id, sort_order, image_data, &now],
    )?;

    let id = conn.last_insert_rowid();
    conn.query_row(
        "SELECT id, plant_id, sort_order, image_data, created_at FROM plant_photos WHERE id = ?1",
        [id],
        photo_from_row,
    )
    .map_err(|e| AppError::Db(e.to_string()))
}

pub fn photo_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);
    let rows = conn.execute("DELETE FROM plant_photos WHERE id = ?1", [id])?;
    if rows == 0 {
        return Err(AppError::NotFound(format!("photo {}", id)));
    }
    Ok(())
}
