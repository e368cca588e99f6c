//! Sort command implementation

use super::{load_catalog, save_catalog};
use anyhow::Result;
use std::path::Path;

/// Sort a catalog file in place
pub fn sort(catalog_path: &Path) -> Result<()> {
    let mut catalog = load_catalog(catalog_path)?;
    catalog.sort();
    save_catalog(&catalog, catalog_path)?;

    tracing::info!("Sorted {} entries in {:?}", catalog.len(), catalog_path);
    println!("Sorted {} entries", catalog.len());
    Ok(())
}
