//! Sun tolerance bitmask. A plant may tolerate several conditions at once.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SunRequirements(pub i32);

impl SunRequirements {
    pub const NONE: SunRequirements = SunRequirements(0);
    pub const FULL_SUN: SunRequirements = SunRequirements(1);
    pub const PARTIAL_SHADE: SunRequirements = SunRequirements(2);
    pub const FULL_SHADE: SunRequirements = SunRequirements(4);

    const ALL_BITS: i32 = 0b111;

    pub fn bits(self) -> i32 {
        self.0
    }

    pub fn contains(self, other: SunRequirements) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_valid(self) -> bool {
        self.0 & !Self::ALL_BITS == 0 && self.0 >= 0
    }

    /// Maps a legacy single-value label onto its bitmask equivalent.
    /// Mirrors the CASE expression of migration 0002.
    pub fn from_legacy(label: &str) -> Option<SunRequirements> {
        match label {
            "full_sun" => Some(Self::FULL_SUN),
            "partial_shade" => Some(Self::PARTIAL_SHADE),
            "full_shade" => Some(Self::FULL_SHADE),
            _ => None,
        }
    }
}

/// Picker options: machine value, display label, icon glyph.
pub const SUN_OPTIONS: &[(SunRequirements, &str, &str)] = &[
    (SunRequirements::FULL_SUN, "Full Sun", "☀️"),
    (SunRequirements::PARTIAL_SHADE, "Partial Shade", "⛅"),
    (SunRequirements::FULL_SHADE, "Full Shade", "🌑"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_bits_are_valid() {
        let mixed = SunRequirements(
            SunRequirements::FULL_SUN.bits() | SunRequirements::PARTIAL_SHADE.bits(),
        );
        assert!(mixed.is_valid());
        assert!(mixed.contains(SunRequirements::FULL_SUN));
        assert!(mixed.contains(SunRequirements::PARTIAL_SHADE));
        assert!(!mixed.contains(SunRequirements::FULL_SHADE));
    }

    #[test]
    fn out_of_range_bits_invalid() {
        assert!(!SunRequirements(8).is_valid());
        assert!(!SunRequirements(-1).is_valid());
        assert!(SunRequirements::NONE.is_valid());
        assert!(SunRequirements(7).is_valid());
    }

    #[test]
    fn legacy_labels_map_to_single_bits() {
        assert_eq!(
            SunRequirements::from_legacy("full_sun"),
            Some(SunRequirements::FULL_SUN)
        );
        assert_eq!(
            SunRequirements::from_legacy("partial_shade"),
            Some(SunRequirements::PARTIAL_SHADE)
        );
        assert_eq!(
            SunRequirements::from_legacy("full_shade"),
            Some(SunRequirements::FULL_SHADE)
        );
        assert_eq!(SunRequirements::from_legacy("shade"), None);
    }

    #[test]
    fn picker_options_cover_each_bit_once() {
        let mut seen = 0;
        for (value, label, glyph) in SUN_OPTIONS {
            assert!(value.is_valid());
            assert_eq!(value.bits().count_ones(), 1);
            assert_eq!(seen & value.bits(), 0);
            seen |= value.bits();
            assert!(!label.is_empty());
            assert!(!glyph.is_empty());
        }
        assert_eq!(seen, 0b111);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&SunRequirements(5)).unwrap();
        assert_eq!(json, "5");
    }
}
