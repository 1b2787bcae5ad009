//! Activity use cases: list, create, update, delete.

use crate::domain::is_valid_mask;
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub active_periods: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn activity_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        active_periods: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn validate_activity(activity: &Activity) -> Result<(), AppError> {
    if activity.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if !is_valid_mask(activity.active_periods) {
        return Err(AppError::Validation(format!(
            "active_periods out of range: {}",
            activity.active_periods
        )));
    }
    Ok(())
}

pub fn activity_list(pool: &DbPool) -> Result<Vec<Activity>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT id, name, description, active_periods, created_at, updated_at FROM activities ORDER BY name COLLATE NOCASE")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], activity_from_row)?;

    let mut activities = Vec::new();
    for activity in rows {
        activities.push(activity?);
    }
    Ok(activities)
}

pub fn activity_create(pool: &DbPool, activity: Activity) -> Result<Activity, AppError> {
    validate_activity(&activity)?;
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO activities (name, description, active_periods, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
        params![
            activity.name.trim(),
            activity.description,
            activity.active_periods,
            &now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    conn.query_row(
        "SELECT id, name, description, active_periods, created_at, updated_at FROM activities WHERE id = ?1",
        [id],
        activity_from_row,
    )
    .map_err(|e| AppError::Db(e.to_string()))
}

pub fn activity_update(pool: &DbPool, activity: Activity) -> Result<(), AppError> {
    let id = activity
        .id
        .ok_or_else(|| AppError::Validation("id is required".into()))?;
    validate_activity(&activity)?;
    let now = Utc::now().to_rfc3339();

    let conn = get_connection(pool);
    let rows = conn.execute(
        "UPDATE activities SET name = ?1, description = ?2, active_periods = ?3, updated_at = ?4 WHERE id = ?5",
        params![
            activity.name.trim(),
            activity.description,
            activity.active_periods,
            &now,
            id,
        ],
    )?;

    if rows == 0 {
        return Err(AppError::NotFound(format!("activity {}", id)));
    }
    Ok(())
}

pub fn activity_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);
    let rows = conn.execute("DELETE FROM activities WHERE id = ?1", [id])?;
    if rows == 0 {
        return Err(AppError::NotFound(format!("activity {}", id)));
    }
    Ok(())
}
