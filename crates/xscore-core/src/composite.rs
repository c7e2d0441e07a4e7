//! Composites ("Beyblades") assembled from one part of each category.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{Part, PartCategory};
use crate::error::{Error, Result};

/// Name used for every slot of the simple-mode placeholder
pub const PLACEHOLDER_PART_NAME: &str = "Default";

/// A player-assembled unit made of a blade, a ratchet and a bit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Composite {
    pub id: Uuid,
    pub blade: Part,
    pub ratchet: Part,
    pub bit: Part,
}

impl Composite {
    /// Synthetic `Default/Default/Default` composite used when parts are not tracked
    pub fn placeholder() -> Self {
        build_composite(
            Part::blade(PLACEHOLDER_PART_NAME),
            Part::ratchet(PLACEHOLDER_PART_NAME),
            Part::bit(PLACEHOLDER_PART_NAME),
        )
    }

    /// Display name: blade, ratchet, then the bit's initials (e.g. "GolemRock 6-60 LR")
    pub fn name(&self) -> String {
        format!(
            "{} {} {}",
            self.blade.name,
            self.ratchet.name,
            bit_initials(&self.bit.name)
        )
    }

    /// The part occupying the given slot
    pub fn part(&self, category: PartCategory) -> &Part {
        match category {
            PartCategory::Blade => &self.blade,
            PartCategory::Ratchet => &self.ratchet,
            PartCategory::Bit => &self.bit,
        }
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// First character of each whitespace-separated word, concatenated
pub fn bit_initials(bit_name: &str) -> String {
    bit_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Assemble a composite under a fresh id.
///
/// Slot categories are not checked; callers that take parts from untrusted
/// input should use [`build_composite_checked`].
pub fn build_composite(blade: Part, ratchet: Part, bit: Part) -> Composite {
    let composite = Composite {
        id: Uuid::new_v4(),
        blade,
        ratchet,
        bit,
    };
    debug!("Built composite {}", composite.name());
    composite
}

/// Assemble a composite, rejecting parts placed in the wrong slot
pub fn build_composite_checked(blade: Part, ratchet: Part, bit: Part) -> Result<Composite> {
    for (slot, part) in [
        (PartCategory::Blade, &blade),
        (PartCategory::Ratchet, &ratchet),
        (PartCategory::Bit, &bit),
    ] {
        if part.category != slot {
            return Err(Error::CategoryMismatch {
                slot,
                found: part.category,
                name: part.name.clone(),
            });
        }
    }
    Ok(build_composite(blade, ratchet, bit))
}
