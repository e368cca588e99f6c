//! Info command implementation

use super::load_catalog;
use anyhow::Result;
use omm_core::{ChapterList, Entry};
use serde::Serialize;
use std::path::Path;

/// Entry info output
#[derive(Serialize)]
struct EntryInfo {
    title: String,
    kind: String,
    franchise: Option<String>,
    liked: Vec<String>,
    loved: Vec<String>,
}

impl From<&Entry> for EntryInfo {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            kind: entry.kind.clone(),
            franchise: (!entry.franchise.is_empty()).then(|| entry.franchise.clone()),
            liked: entry.chapters(ChapterList::Liked).serialize(),
            loved: entry.chapters(ChapterList::Loved).serialize(),
        }
    }
}

/// Display the entries of a catalog
pub fn info(catalog_path: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let infos: Vec<EntryInfo> = catalog.iter().map(EntryInfo::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("Entries: {}", infos.len());
    for info in &infos {
        println!();
        println!("Title:     {}", info.title);
        if !info.kind.is_empty() {
            println!("Type:      {}", info.kind);
        }
        if let Some(franchise) = &info.franchise {
            println!("Franchise: {}", franchise);
        }
        if !info.liked.is_empty() {
            println!("Liked:     {}", info.liked.join(", "));
        }
        if !info.loved.is_empty() {
            println!("Loved:     {}", info.loved.join(", "));
        }
    }

    Ok(())
}
