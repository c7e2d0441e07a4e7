use tracing::debug;

use crate::catalog::builtin::{BITS, BLADES, RATCHETS};
use crate::catalog::{Part, PartCategory};
use crate::error::{Error, Result};

/// Flat list of catalog parts, seeded from the built-in list
#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: Vec<Part>,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self {
            parts: builtin_parts(),
        }
    }

    /// Catalog with no parts at all
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Parts of one category, in catalog order
    pub fn parts(&self, category: PartCategory) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.category == category).collect()
    }

    pub fn all(&self) -> &[Part] {
        &self.parts
    }

    /// Add a user-entered part
    pub fn add_part(&mut self, name: &str, category: PartCategory) -> Result<Part> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyPartName);
        }

        let part = Part::new(name, category);
        debug!("Added custom {}: {}", category, part.name);
        self.parts.push(part.clone());
        Ok(part)
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, category: PartCategory, name: &str) -> Option<&Part> {
        let name = name.trim();
        self.parts
            .iter()
            .find(|p| p.category == category && p.name.eq_ignore_ascii_case(name))
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn require(&self, category: PartCategory, name: &str) -> Result<&Part> {
        self.find(category, name).ok_or_else(|| Error::UnknownPart {
            category,
            name: name.to_string(),
        })
    }

    /// Drop custom parts and restore the built-in list
    pub fn reset(&mut self) {
        self.parts = builtin_parts();
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_parts() -> Vec<Part> {
    let blades = BLADES.iter().map(|name| Part::blade(*name));
    let ratchets = RATCHETS.iter().map(|name| Part::ratchet(*name));
    let bits = BITS.iter().map(|name| Part::bit(*name));
    blades.chain(ratchets).chain(bits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = PartCatalog::new();
        assert_eq!(catalog.parts(PartCategory::Blade).len(), 78);
        assert_eq!(catalog.parts(PartCategory::Ratchet).len(), 26);
        assert_eq!(catalog.parts(PartCategory::Bit).len(), 38);
        assert_eq!(catalog.len(), 142);
    }

    #[test]
    fn test_parts_keep_catalog_order() {
        let catalog = PartCatalog::new();
        let ratchets = catalog.parts(PartCategory::Ratchet);
        assert_eq!(ratchets[0].name, "0-70");
        assert_eq!(ratchets[ratchets.len() - 1].name, "9-80");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = PartCatalog::new();
        let part = catalog.find(PartCategory::Bit, "low rush").unwrap();
        assert_eq!(part.name, "Low Rush");
        assert!(catalog.find(PartCategory::Blade, "Low Rush").is_none());
    }

    #[test]
    fn test_require_unknown_part() {
        let catalog = PartCatalog::new();
        let err = catalog.require(PartCategory::Blade, "Nope").unwrap_err();
        assert!(matches!(err, Error::UnknownPart { category: PartCategory::Blade, .. }));
    }

    #[test]
    fn test_add_part_and_reset() {
        let mut catalog = PartCatalog::new();
        let part = catalog.add_part("  Custom Blade ", PartCategory::Blade).unwrap();
        assert_eq!(part.name, "Custom Blade");
        assert_eq!(catalog.parts(PartCategory::Blade).len(), 79);
        assert!(catalog.find(PartCategory::Blade, "custom blade").is_some());

        catalog.reset();
        assert_eq!(catalog.parts(PartCategory::Blade).len(), 78);
        assert!(catalog.find(PartCategory::Blade, "Custom Blade").is_none());
    }

    #[test]
    fn test_add_blank_part_rejected() {
        let mut catalog = PartCatalog::empty();
        assert!(matches!(
            catalog.add_part("   ", PartCategory::Bit),
            Err(Error::EmptyPartName)
        ));
        assert!(catalog.is_empty());
    }
}
