//! The catalog: an ordered list of entries
//!
//! Sorting groups entries by franchise/series. Franchise members come first, ordered by franchise
//! name, then story order, then title and type. Standalone entries follow, ordered by title and
//! type. All text comparisons use natural order. Sorting also organizes every chapter list.

use crate::entry::Entry;
use crate::error::Result;
use crate::natural::natural_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A list of entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "Entries", default)]
    entries: Vec<Entry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this catalog as pretty-printed JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The entries in their current order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Insert a copy of the first entry describing the same work right after it
    ///
    /// Returns whether a copy was made.
    pub fn duplicate_entry(&mut self, entry: &Entry) -> bool {
        match self.position_of(entry) {
            Some(index) => {
                let copy = self.entries[index].clone();
                self.entries.insert(index + 1, copy);
                true
            }
            None => false,
        }
    }

    /// Remove the first entry describing the same work
    pub fn delete_entry(&mut self, entry: &Entry) -> Option<Entry> {
        self.position_of(entry)
            .map(|index| self.entries.remove(index))
    }

    /// First entry with the given title
    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.title == title)
    }

    /// Sort the entries and organize their chapters
    pub fn sort(&mut self) {
        sort_entries(&mut self.entries);
    }

    fn position_of(&self, entry: &Entry) -> Option<usize> {
        self.entries.iter().position(|e| e.is_same_work(entry))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sort entries into catalog order and organize their chapter lists
///
/// The sort is stable: entries that compare equal keep their relative order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(catalog_order);

    for entry in entries.iter_mut() {
        entry.organize_chapters();
    }

    tracing::debug!("Sorted {} entries", entries.len());
}

/// Catalog order of two entries
pub fn catalog_order(a: &Entry, b: &Entry) -> Ordering {
    match (a.franchise.is_empty(), b.franchise.is_empty()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => default_order(a, b),
        (false, false) => natural_cmp(&a.franchise, &b.franchise)
            .then_with(|| story_order(&a.franchise_order, &b.franchise_order))
            .then_with(|| default_order(a, b)),
    }
}

/// Order by title, then by type
pub fn default_order(a: &Entry, b: &Entry) -> Ordering {
    natural_cmp(&a.title, &b.title).then_with(|| natural_cmp(&a.kind, &b.kind))
}

/// Compare two franchise order fields; unreadable ones go last
fn story_order(a: &str, b: &str) -> Ordering {
    match (parse_story_order(a), parse_story_order(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Read the integer an order field starts with, e.g. `" 3"`, `"-1"` or `"2 (remake)"`
fn parse_story_order(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(&['+', '-'][..]));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ChapterList, EntryField};

    fn entry(title: &str, franchise: &str, order: &str) -> Entry {
        Entry::new()
            .with(EntryField::Title, title)
            .with(EntryField::Franchise, franchise)
            .with(EntryField::FranchiseOrder, order)
    }

    fn titles(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_franchise_members_first_by_story_order() {
        let mut entries = vec![
            entry("Standalone", "", ""),
            entry("Sequel", "X", "2"),
            entry("Original", "X", "1"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), ["Original", "Sequel", "Standalone"]);
    }

    #[test]
    fn test_franchises_in_natural_order() {
        let mut entries = vec![
            entry("b", "Series 10", "1"),
            entry("a", "Series 2", "1"),
            entry("c", "Alpha", "5"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), ["c", "a", "b"]);
    }

    #[test]
    fn test_story_order_is_numeric() {
        let mut entries = vec![
            entry("Ten", "X", "10"),
            entry("Nine", "X", "9"),
            entry("Unknown", "X", "?"),
            entry("Zero", "X", " 0"),
        ];
        sort_entries(&mut entries);
        assert_eq!(titles(&entries), ["Zero", "Nine", "Ten", "Unknown"]);
    }

    #[test]
    fn test_standalone_by_title_then_type() {
        let mut entries = vec![
            entry("Vol 10", "", "").with(EntryField::Type, "Manga"),
            entry("Vol 2", "", "").with(EntryField::Type, "Manga"),
            entry("Vol 2", "", "").with(EntryField::Type, "Anime"),
        ];
        sort_entries(&mut entries);
        let kinds: Vec<_> = entries.iter().map(|e| (e.title.as_str(), e.kind.as_str())).collect();
        assert_eq!(
            kinds,
            [("Vol 2", "Anime"), ("Vol 2", "Manga"), ("Vol 10", "Manga")]
        );
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut entries = vec![
            entry("Same", "", "").with(EntryField::Notes, "first"),
            entry("Same", "", "").with(EntryField::Notes, "second"),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].notes, "first");
        assert_eq!(entries[1].notes, "second");
    }

    #[test]
    fn test_sort_organizes_chapters() {
        let mut e = entry("A", "", "");
        e.add_chapter("9", ChapterList::Liked).unwrap();
        e.add_chapter("1~3", ChapterList::Liked).unwrap();
        e.add_chapter("2~5", ChapterList::Loved).unwrap();
        e.add_chapter("4~8", ChapterList::Loved).unwrap();
        let mut entries = vec![e];

        sort_entries(&mut entries);
        assert_eq!(entries[0].chapters(ChapterList::Liked).serialize(), ["1 ~ 3", "9"]);
        assert_eq!(entries[0].chapters(ChapterList::Loved).serialize(), ["2 ~ 8"]);
    }

    #[test]
    fn test_parse_story_order() {
        assert_eq!(parse_story_order("3"), Some(3));
        assert_eq!(parse_story_order("  -2"), Some(-2));
        assert_eq!(parse_story_order("+7"), Some(7));
        assert_eq!(parse_story_order("4 (remake)"), Some(4));
        assert_eq!(parse_story_order(""), None);
        assert_eq!(parse_story_order("-"), None);
        assert_eq!(parse_story_order("first"), None);
    }

    #[test]
    fn test_duplicate_and_delete() {
        let mut catalog = Catalog::new();
        catalog.add_entry(entry("A", "", ""));
        catalog.add_entry(entry("B", "", ""));

        assert!(catalog.duplicate_entry(&entry("A", "", "")));
        assert_eq!(titles(catalog.entries()), ["A", "A", "B"]);
        assert!(!catalog.duplicate_entry(&entry("C", "", "")));

        let removed = catalog.delete_entry(&entry("B", "", ""));
        assert_eq!(removed.map(|e| e.title), Some("B".to_string()));
        assert!(catalog.delete_entry(&entry("B", "", "")).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let mut catalog = Catalog::new();
        let mut e = entry("A", "X", "1");
        e.add_chapter("2~4", ChapterList::Loved).unwrap();
        catalog.add_entry(e);

        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"Entries\""));
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_from_json_without_entries() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
        assert!(Catalog::from_json("not json").is_err());
    }
}
