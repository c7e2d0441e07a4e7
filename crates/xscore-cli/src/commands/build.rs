//! Composite assembly from catalog part names.

use anyhow::{Result, bail};
use xscore_core::{
    DocumentStore, Part, PartCatalog, PartCategory, SavedComposites, build_composite_checked,
};

pub fn run<S: DocumentStore>(
    store: S,
    blade: &str,
    ratchet: &str,
    bit: &str,
    save: bool,
    custom: bool,
) -> Result<()> {
    let mut catalog = PartCatalog::new();
    let blade = resolve(&mut catalog, PartCategory::Blade, blade, custom)?;
    let ratchet = resolve(&mut catalog, PartCategory::Ratchet, ratchet, custom)?;
    let bit = resolve(&mut catalog, PartCategory::Bit, bit, custom)?;

    let composite = build_composite_checked(blade, ratchet, bit)?;
    println!("{}", composite.name());
    println!("  Blade:   {}", composite.blade.name);
    println!("  Ratchet: {}", composite.ratchet.name);
    println!("  Bit:     {}", composite.bit.name);

    if !save {
        return Ok(());
    }

    // Every build has a fresh id, so the same parts saved twice are two entries
    let mut saved = SavedComposites::load(store);
    if saved.save(composite) {
        println!("Saved as configuration #{}", saved.len());
    }

    Ok(())
}

/// Catalog part by name, or a new custom part when `custom` is set
fn resolve(
    catalog: &mut PartCatalog,
    category: PartCategory,
    name: &str,
    custom: bool,
) -> Result<Part> {
    if let Some(part) = catalog.find(category, name) {
        return Ok(part.clone());
    }
    if custom {
        return Ok(catalog.add_part(name, category)?);
    }
    bail!("Unknown {}: {} (pass --custom to use it anyway)", category, name)
}
