use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PartCategory {
    Blade,
    Ratchet,
    Bit,
}

impl PartCategory {
    /// Capitalized name for section headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Blade => "Blade",
            Self::Ratchet => "Ratchet",
            Self::Bit => "Bit",
        }
    }
}

/// A named, categorized catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PartCategory,
}

impl Part {
    pub fn new(name: impl Into<String>, category: PartCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
        }
    }

    pub fn blade(name: impl Into<String>) -> Self {
        Self::new(name, PartCategory::Blade)
    }

    pub fn ratchet(name: impl Into<String>) -> Self {
        Self::new(name, PartCategory::Ratchet)
    }

    pub fn bit(name: impl Into<String>) -> Self {
        Self::new(name, PartCategory::Bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_parse() {
        assert_eq!(PartCategory::from_str("blade").unwrap(), PartCategory::Blade);
        assert_eq!(PartCategory::from_str("Ratchet").unwrap(), PartCategory::Ratchet);
        assert_eq!(PartCategory::from_str("BIT").unwrap(), PartCategory::Bit);
        assert!(PartCategory::from_str("disc").is_err());
    }

    #[test]
    fn test_category_order() {
        let all: Vec<_> = PartCategory::iter().collect();
        assert_eq!(
            all,
            vec![PartCategory::Blade, PartCategory::Ratchet, PartCategory::Bit]
        );
    }

    #[test]
    fn test_part_serializes_category_as_type() {
        let part = Part::bit("Low Rush");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "bit");
        assert_eq!(json["name"], "Low Rush");

        let back: Part = serde_json::from_value(json).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn test_parts_with_same_name_are_distinct() {
        assert_ne!(Part::blade("WizardRod"), Part::blade("WizardRod"));
    }
}
