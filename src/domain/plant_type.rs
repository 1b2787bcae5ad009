//! Plant classification used by UI pickers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantType {
    VegetableFruit,
    Flower,
    Herb,
}

impl PlantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VegetableFruit => "vegetable_fruit",
            Self::Flower => "flower",
            Self::Herb => "herb",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vegetable_fruit" => Some(Self::VegetableFruit),
            "flower" => Some(Self::Flower),
            "herb" => Some(Self::Herb),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VegetableFruit => "Vegetable/Fruit",
            Self::Flower => "Flower",
            Self::Herb => "Herb",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::VegetableFruit => "🥕",
            Self::Flower => "🌸",
            Self::Herb => "🌿",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::VegetableFruit, Self::Flower, Self::Herb]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_from_str_round_trip() {
        for t in PlantType::all() {
            assert_eq!(PlantType::from_str(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn unknown_value_rejected() {
        assert_eq!(PlantType::from_str("tree"), None);
        assert_eq!(PlantType::from_str(""), None);
    }

    #[test]
    fn every_variant_has_picker_metadata() {
        for t in PlantType::all() {
            assert!(!t.label().is_empty());
            assert!(!t.glyph().is_empty());
        }
    }

    #[test]
    fn serde_uses_snake_case_values() {
        let json = serde_json::to_string(&PlantType::VegetableFruit).unwrap();
        assert_eq!(json, "\"vegetable_fruit\"");
        let back: PlantType = serde_json::from_str("\"herb\"").unwrap();
        assert_eq!(back, PlantType::Herb);
    }
}
