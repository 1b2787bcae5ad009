//! TSV plant import. All rows land in one transaction or none at all.

use crate::app::plant::{validate_plant, Plant};
use crate::domain::{PlantType, SunRequirements};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use chrono::Utc;
use rusqlite::params;

/// Expected first line of every import file.
pub const TSV_HEADER: &str = "name\tplant_type\tsun_requirements\tsow_periods\tplant_periods\tnotes";

/// Import plants from tab-separated text. Returns the number of rows
/// imported. Any malformed row aborts the whole import; nothing is written.
pub fn import_plants_tsv(pool: &DbPool, tsv_content: &str) -> Result<usize, AppError> {
    let mut lines = tsv_content.lines();
    match lines.next().map(str::trim_end) {
        Some(header) if header == TSV_HEADER => {}
        _ => {
            return Err(AppError::Import(
                "expected header: name, plant_type, sun_requirements, sow_periods, plant_periods, notes (tab-separated)".into(),
            ))
        }
    }

    let mut plants = Vec::new();
    for (idx, line) in lines.enumerate() {
        let row = idx + 2; // 1-based, header is row 1
        if line.trim().is_empty() {
            continue;
        }
        plants.push(parse_row(row, line)?);
    }

    let now = Utc::now().to_rfc3339();
    let conn = get_connection(pool);
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| AppError::Db(e.to_string()))?;

    let mut count = 0usize;
    for plant in &plants {
        tx.execute(
            "INSERT INTO plants (name, plant_type, sun_requirements, sow_periods, plant_periods, notes, needs_reorder, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?7)",
            params![
                plant.name,
                plant.plant_type.map(|t| t.as_str()),
                plant.sun_requirements.bits(),
                plant.sow_periods,
                plant.plant_periods,
                plant.notes,
                &now,
            ],
        )?;
        count += 1;
    }

    tx.commit().map_err(|e| AppError::Db(e.to_string()))?;
    log::info!("Imported {} plants from TSV", count);
    Ok(count)
}

fn parse_row(row: usize, line: &str) -> Result<Plant, AppError> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() != 6 {
        return Err(AppError::Import(format!(
            "Row {}: expected 6 columns, got {}",
            row,
            cols.len()
        )));
    }

    let name = cols[0].trim();
    let plant_type = match cols[1].trim() {
        "" => None,
        value => Some(PlantType::from_str(value).ok_or_else(|| {
            AppError::Import(format!("Row {}: unknown plant_type '{}'", row, value))
        })?),
    };
    let sun_requirements = parse_sun(row, cols[2].trim())?;
    let sow_periods = parse_mask(row, "sow_periods", cols[3].trim())?;
    let plant_periods = parse_mask(row, "plant_periods", cols[4].trim())?;
    let notes = match cols[5].trim() {
        "" => None,
        value => Some(value.to_string()),
    };

    let plant = Plant {
        id: None,
        name: name.to_string(),
        plant_type,
        sun_requirements,
        sow_periods,
        plant_periods,
        notes,
        needs_reorder: false,
        created_at: None,
        updated_at: None,
    };
    validate_plant(&plant).map_err(|e| AppError::Import(format!("Row {}: {}", row, e)))?;
    Ok(plant)
}

/// The sun column takes the integer bitmask; a single legacy label
/// (`full_sun`, `partial_shade`, `full_shade`) is still accepted so old
/// exports keep importing.
fn parse_sun(row: usize, value: &str) -> Result<SunRequirements, AppError> {
    if value.is_empty() {
        return Ok(SunRequirements::NONE);
    }
    if let Ok(bits) = value.parse::<i32>() {
        return Ok(SunRequirements(bits));
    }
    SunRequirements::from_legacy(value).ok_or_else(|| {
        AppError::Import(format!("Row {}: invalid sun_requirements '{}'", row, value))
    })
}

fn parse_mask(row: usize, field: &str, value: &str) -> Result<i32, AppError> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<i32>()
        .map_err(|_| AppError::Import(format!("Row {}: invalid {} '{}'", row, field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_column_accepts_mask_and_legacy_label() {
        assert_eq!(parse_sun(2, "3").unwrap(), SunRequirements(3));
        assert_eq!(
            parse_sun(2, "partial_shade").unwrap(),
            SunRequirements::PARTIAL_SHADE
        );
        assert_eq!(parse_sun(2, "").unwrap(), SunRequirements::NONE);
        assert!(parse_sun(2, "shady").is_err());
    }

    #[test]
    fn mask_column_rejects_garbage() {
        assert_eq!(parse_mask(2, "sow_periods", "4095").unwrap(), 4095);
        assert_eq!(parse_mask(2, "sow_periods", "").unwrap(), 0);
        assert!(parse_mask(2, "sow_periods", "March").is_err());
    }
}
