//! CLI command implementations

mod chapter;
mod compare;
mod info;
mod mark;
mod sort;

pub use chapter::chapter;
pub use compare::compare;
pub use info::info;
pub use mark::mark;
pub use sort::sort;

use anyhow::{Context, Result};
use omm_core::Catalog;
use std::fs;
use std::path::Path;

/// Load a catalog file; a missing file is an empty catalog
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    match fs::read_to_string(path) {
        Ok(data) => Catalog::from_json(&data)
            .with_context(|| format!("Failed to read catalog: {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No catalog at {:?}, starting empty", path);
            Ok(Catalog::new())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to open catalog: {}", path.display()))
        }
    }
}

/// Save a catalog file atomically
/// Writes to a temp file then renames to avoid partial writes
pub(crate) fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let data = catalog.to_json()?;

    // Write to temp file in same directory (ensures same filesystem for rename)
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &data)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    // Atomic rename
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    tracing::debug!("Saved {} entries to {:?}", catalog.len(), path);
    Ok(())
}
