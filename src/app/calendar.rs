//! Month view: which plants to sow or plant, and which activities run.

use crate::app::activity::{activity_list, Activity};
use crate::app::plant::{plant_list, Plant};
use crate::domain::{is_valid_month, mask_contains, month_halves};
use crate::error::AppError;
use crate::infra::DbPool;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MonthData {
    pub sow_early: Vec<Plant>,
    pub sow_late: Vec<Plant>,
    pub plant_early: Vec<Plant>,
    pub plant_late: Vec<Plant>,
    pub activities: Vec<Activity>,
}

/// Partition plants into the four half-month lists for `month` (1..=12) and
/// collect the activities running that month. A plant lands in a sow or
/// plant list only when the matching period mask has the month's bit set.
pub fn month_data(pool: &DbPool, month: i32) -> Result<MonthData, AppError> {
    if !is_valid_month(month) {
        return Err(AppError::Validation(format!(
            "month must be 1..=12, got {}",
            month
        )));
    }

    let mut data = MonthData {
        sow_early: Vec::new(),
        sow_late: Vec::new(),
        plant_early: Vec::new(),
        plant_late: Vec::new(),
        activities: Vec::new(),
    };

    for plant in plant_list(pool)? {
        let (sow_early, sow_late) = month_halves(plant.sow_periods, month);
        if sow_early {
            data.sow_early.push(plant.clone());
        }
        if sow_late {
            data.sow_late.push(plant.clone());
        }
        let (plant_early, plant_late) = month_halves(plant.plant_periods, month);
        if plant_early {
            data.plant_early.push(plant.clone());
        }
        if plant_late {
            data.plant_late.push(plant);
        }
    }

    data.activities = activity_list(pool)?
        .into_iter()
        .filter(|a| mask_contains(a.active_periods, month))
        .collect();

    Ok(data)
}
