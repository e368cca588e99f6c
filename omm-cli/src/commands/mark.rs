//! Mark command implementation

use super::{load_catalog, save_catalog};
use anyhow::{Context, Result};
use omm_core::ChapterList;
use std::path::Path;

/// Add or remove chapters on the first entry with the given title
pub fn mark(
    catalog_path: &Path,
    title: &str,
    loved: bool,
    remove: bool,
    chapters: &[String],
) -> Result<()> {
    let mut catalog = load_catalog(catalog_path)?;
    let list = if loved {
        ChapterList::Loved
    } else {
        ChapterList::Liked
    };

    let entry = catalog
        .find_by_title_mut(title)
        .with_context(|| format!("No entry titled {:?}", title))?;

    for text in chapters {
        let result = if remove {
            entry.delete_chapter(text, list)
        } else {
            entry.add_chapter(text, list)
        };

        // Rejected text changes nothing, so the rest still applies.
        if let Err(e) = result {
            tracing::warn!("Skipping chapter {:?}: {}", text, e);
            eprintln!("Skipped {:?}: {}", text, e);
        }
    }

    entry.organize_chapters();
    let summary = entry.chapters(list).serialize().join(", ");
    save_catalog(&catalog, catalog_path)?;

    println!("{} {}: [{}]", title, list.name(), summary);
    Ok(())
}
