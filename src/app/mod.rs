//! Application use cases and transactions.

mod activity;
mod calendar;
mod import;
mod photo;
mod plant;
mod storage;

pub use activity::{activity_create, activity_delete, activity_list, activity_update, Activity};
pub use calendar::{month_data, MonthData};
pub use import::{import_plants_tsv, TSV_HEADER};
pub use photo::{photo_add, photo_delete, photo_list_by_plant, PlantPhoto};
pub use plant::{plant_create, plant_delete, plant_list, plant_update, plants_to_reorder, Plant};
pub use storage::{database_path, move_database, save_database_path};
