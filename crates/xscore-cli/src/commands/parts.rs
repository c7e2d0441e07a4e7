//! Part catalog listing.

use anyhow::Result;
use strum::IntoEnumIterator;
use xscore_core::{PartCatalog, PartCategory};

pub fn run(category: Option<PartCategory>) -> Result<()> {
    let catalog = PartCatalog::new();
    let categories: Vec<PartCategory> = match category {
        Some(category) => vec![category],
        None => PartCategory::iter().collect(),
    };

    for category in categories {
        let parts = catalog.parts(category);
        println!("{}s ({})", category.title(), parts.len());
        for part in parts {
            println!("  {}", part.name);
        }
        println!();
    }

    Ok(())
}
