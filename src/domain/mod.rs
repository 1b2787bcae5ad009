//! Domain types: plant classification, sun tolerance, month masks.

mod period;
mod plant_type;
mod sun;

pub use period::{
    is_valid_mask, is_valid_month, mask_contains, month_bit, month_halves, MONTHS, MONTH_MASK_ALL,
};
pub use plant_type::PlantType;
pub use sun::{SunRequirements, SUN_OPTIONS};
