//! Catalog entries
//!
//! An entry carries a fixed set of descriptive fields, any extra string fields a catalog file
//! brings along, and two chapter lists: liked and loved.

use crate::chapters::IntervalSet;
use crate::error::Result;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The descriptive fields every entry has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Title,
    OriginalTitle,
    Franchise,
    FranchiseOrder,
    Author,
    Year,
    Type,
    Language,
    Rating,
    Progress,
    Notes,
}

impl EntryField {
    /// All fields, in catalog order
    pub const ALL: [EntryField; 11] = [
        EntryField::Title,
        EntryField::OriginalTitle,
        EntryField::Franchise,
        EntryField::FranchiseOrder,
        EntryField::Author,
        EntryField::Year,
        EntryField::Type,
        EntryField::Language,
        EntryField::Rating,
        EntryField::Progress,
        EntryField::Notes,
    ];

    /// Key used for this field in catalog files
    pub fn key(self) -> &'static str {
        match self {
            EntryField::Title => "Title",
            EntryField::OriginalTitle => "Original Title",
            EntryField::Franchise => "Franchise/Series",
            EntryField::FranchiseOrder => "Franchise/Series Order",
            EntryField::Author => "Author",
            EntryField::Year => "Year",
            EntryField::Type => "Type",
            EntryField::Language => "Language",
            EntryField::Rating => "Rating",
            EntryField::Progress => "Progress",
            EntryField::Notes => "Notes",
        }
    }

    /// Look a field up by its catalog key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which chapter list of an entry to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChapterList {
    #[default]
    Liked,
    Loved,
}

impl ChapterList {
    /// Name given to the list
    pub fn name(self) -> &'static str {
        match self {
            ChapterList::Liked => "liked",
            ChapterList::Loved => "loved",
        }
    }
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntryRecord")]
pub struct Entry {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Original Title")]
    pub original_title: String,

    /// Franchise or series the entry belongs to; empty when standalone
    #[serde(rename = "Franchise/Series")]
    pub franchise: String,

    /// Story order within the franchise, written as an integer
    #[serde(rename = "Franchise/Series Order")]
    pub franchise_order: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Year")]
    pub year: String,

    /// Kind of work (manga, anime, light novel...)
    #[serde(rename = "Type")]
    pub kind: String,

    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Rating")]
    pub rating: String,

    #[serde(rename = "Progress")]
    pub progress: String,

    #[serde(rename = "Notes")]
    pub notes: String,

    #[serde(rename = "Liked Chapters")]
    liked: IntervalSet,

    #[serde(rename = "Loved Chapters")]
    loved: IntervalSet,

    /// Fields outside the fixed set, kept as found
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Entry {
    /// Create an entry with every field empty
    pub fn new() -> Self {
        Self {
            title: String::new(),
            original_title: String::new(),
            franchise: String::new(),
            franchise_order: String::new(),
            author: String::new(),
            year: String::new(),
            kind: String::new(),
            language: String::new(),
            rating: String::new(),
            progress: String::new(),
            notes: String::new(),
            liked: IntervalSet::new(ChapterList::Liked.name()),
            loved: IntervalSet::new(ChapterList::Loved.name()),
            extra: BTreeMap::new(),
        }
    }

    /// Set a field, builder style
    pub fn with(mut self, field: EntryField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// Value of a fixed field
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Title => &self.title,
            EntryField::OriginalTitle => &self.original_title,
            EntryField::Franchise => &self.franchise,
            EntryField::FranchiseOrder => &self.franchise_order,
            EntryField::Author => &self.author,
            EntryField::Year => &self.year,
            EntryField::Type => &self.kind,
            EntryField::Language => &self.language,
            EntryField::Rating => &self.rating,
            EntryField::Progress => &self.progress,
            EntryField::Notes => &self.notes,
        }
    }

    fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Title => &mut self.title,
            EntryField::OriginalTitle => &mut self.original_title,
            EntryField::Franchise => &mut self.franchise,
            EntryField::FranchiseOrder => &mut self.franchise_order,
            EntryField::Author => &mut self.author,
            EntryField::Year => &mut self.year,
            EntryField::Type => &mut self.kind,
            EntryField::Language => &mut self.language,
            EntryField::Rating => &mut self.rating,
            EntryField::Progress => &mut self.progress,
            EntryField::Notes => &mut self.notes,
        }
    }

    /// Set a fixed field
    pub fn set_field(&mut self, field: EntryField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Value stored under a catalog key, fixed or extra
    pub fn get(&self, key: &str) -> Option<&str> {
        match EntryField::from_key(key) {
            Some(field) => Some(self.field(field)),
            None => self.extra.get(key).map(String::as_str),
        }
    }

    /// Store a value under a catalog key, fixed or extra
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        match EntryField::from_key(key) {
            Some(field) => self.set_field(field, value),
            None => {
                self.extra.insert(key.to_string(), value.into());
            }
        }
    }

    /// One of the two chapter lists
    pub fn chapters(&self, list: ChapterList) -> &IntervalSet {
        match list {
            ChapterList::Liked => &self.liked,
            ChapterList::Loved => &self.loved,
        }
    }

    fn chapters_mut(&mut self, list: ChapterList) -> &mut IntervalSet {
        match list {
            ChapterList::Liked => &mut self.liked,
            ChapterList::Loved => &mut self.loved,
        }
    }

    /// Add chapter text to one of the lists
    pub fn add_chapter(&mut self, chapter: &str, list: ChapterList) -> Result<()> {
        self.chapters_mut(list).add(chapter)
    }

    /// Remove chapter text from one of the lists
    pub fn delete_chapter(&mut self, chapter: &str, list: ChapterList) -> Result<()> {
        self.chapters_mut(list).remove(chapter)
    }

    /// Sort and merge both chapter lists
    pub fn organize_chapters(&mut self) {
        self.liked.organize();
        self.loved.organize();
    }

    /// Whether both entries describe the same work: same title, type, author and year
    pub fn is_same_work(&self, other: &Entry) -> bool {
        self.title == other.title
            && self.kind == other.kind
            && self.author == other.author
            && self.year == other.year
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of an entry in a catalog file
///
/// Missing fields read as empty. Values of the wrong JSON type are skipped the same way, so one
/// odd field does not stop a whole catalog from loading.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntryRecord {
    #[serde(rename = "Title", deserialize_with = "text_or_empty")]
    title: String,
    #[serde(rename = "Original Title", deserialize_with = "text_or_empty")]
    original_title: String,
    #[serde(rename = "Franchise/Series", deserialize_with = "text_or_empty")]
    franchise: String,
    #[serde(rename = "Franchise/Series Order", deserialize_with = "text_or_empty")]
    franchise_order: String,
    #[serde(rename = "Author", deserialize_with = "text_or_empty")]
    author: String,
    #[serde(rename = "Year", deserialize_with = "text_or_empty")]
    year: String,
    #[serde(rename = "Type", deserialize_with = "text_or_empty")]
    kind: String,
    #[serde(rename = "Language", deserialize_with = "text_or_empty")]
    language: String,
    #[serde(rename = "Rating", deserialize_with = "text_or_empty")]
    rating: String,
    #[serde(rename = "Progress", deserialize_with = "text_or_empty")]
    progress: String,
    #[serde(rename = "Notes", deserialize_with = "text_or_empty")]
    notes: String,
    #[serde(rename = "Liked Chapters", deserialize_with = "tokens_or_empty")]
    liked: Vec<String>,
    #[serde(rename = "Loved Chapters", deserialize_with = "tokens_or_empty")]
    loved: Vec<String>,
    #[serde(flatten)]
    extra: TextFields,
}

/// A value that is either of the expected type or ignored
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn text_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Lenient::<String>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default())
}

/// Chapter text of a list; `null` or a non-list reads as no chapters, non-text items are skipped
fn tokens_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let items = Lenient::<Vec<Lenient<String>>>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default();
    Ok(items.into_iter().filter_map(Lenient::into_option).collect())
}

/// Extra fields of an entry, keeping only the text values
#[derive(Debug, Default)]
struct TextFields(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for TextFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields = BTreeMap::<String, Lenient<String>>::deserialize(deserializer)?;
        Ok(Self(
            fields
                .into_iter()
                .filter_map(|(key, value)| value.into_option().map(|value| (key, value)))
                .collect(),
        ))
    }
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Self {
            title: record.title,
            original_title: record.original_title,
            franchise: record.franchise,
            franchise_order: record.franchise_order,
            author: record.author,
            year: record.year,
            kind: record.kind,
            language: record.language,
            rating: record.rating,
            progress: record.progress,
            notes: record.notes,
            liked: IntervalSet::from_tokens(ChapterList::Liked.name(), record.liked),
            loved: IntervalSet::from_tokens(ChapterList::Loved.name(), record.loved),
            extra: record.extra.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_empty_fields() {
        let entry = Entry::new();
        for field in EntryField::ALL {
            assert_eq!(entry.field(field), "");
        }
        assert_eq!(entry.chapters(ChapterList::Liked).name(), "liked");
        assert_eq!(entry.chapters(ChapterList::Loved).name(), "loved");
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in EntryField::ALL {
            assert_eq!(EntryField::from_key(field.key()), Some(field));
        }
        assert_eq!(EntryField::from_key("title"), None);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut entry = Entry::new();
        entry.set("Franchise/Series", "Monogatari");
        entry.set("Publisher", "Kodansha");
        assert_eq!(entry.franchise, "Monogatari");
        assert_eq!(entry.get("Franchise/Series"), Some("Monogatari"));
        assert_eq!(entry.get("Publisher"), Some("Kodansha"));
        assert_eq!(entry.get("Missing"), None);
    }

    #[test]
    fn test_chapter_editing() {
        let mut entry = Entry::new();
        entry.add_chapter("3", ChapterList::Loved).unwrap();
        entry.add_chapter("1 ~ 2", ChapterList::Loved).unwrap();
        entry.add_chapter("10", ChapterList::Liked).unwrap();
        assert!(entry.add_chapter("x", ChapterList::Liked).is_err());

        entry.organize_chapters();
        assert_eq!(entry.chapters(ChapterList::Loved).serialize(), ["1 ~ 3"]);
        assert_eq!(entry.chapters(ChapterList::Liked).serialize(), ["10"]);

        entry.delete_chapter("2", ChapterList::Loved).unwrap();
        assert_eq!(
            entry.chapters(ChapterList::Loved).serialize(),
            ["1", "3"]
        );
    }

    #[test]
    fn test_same_work() {
        let a = Entry::new()
            .with(EntryField::Title, "Frieren")
            .with(EntryField::Type, "Manga")
            .with(EntryField::Rating, "10");
        let b = a.clone().with(EntryField::Rating, "9");
        let c = a.clone().with(EntryField::Type, "Anime");
        assert!(a.is_same_work(&b));
        assert!(!a.is_same_work(&c));
    }

    #[test]
    fn test_deserialize_fills_defaults_and_keeps_extras() {
        let json = r#"{
            "Title": "Berserk",
            "Liked Chapters": ["3 ~ 1", "bad", "7"],
            "Publisher": "Hakusensha"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "Berserk");
        assert_eq!(entry.author, "");
        assert_eq!(entry.extra.get("Publisher").map(String::as_str), Some("Hakusensha"));
        assert_eq!(
            entry.chapters(ChapterList::Liked).serialize(),
            ["1 ~ 3", "7"]
        );
        assert!(entry.chapters(ChapterList::Loved).is_empty());
    }

    #[test]
    fn test_deserialize_skips_values_of_other_types() {
        let json = r#"{
            "Title": "Aria",
            "Year": 2002,
            "Rating": null,
            "Volumes": 12,
            "Publisher": "Mag Garden",
            "Liked Chapters": null,
            "Loved Chapters": ["2", 3, "4"]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "Aria");
        assert_eq!(entry.year, "");
        assert_eq!(entry.rating, "");
        assert_eq!(entry.get("Volumes"), None);
        assert_eq!(entry.get("Publisher"), Some("Mag Garden"));
        assert!(entry.chapters(ChapterList::Liked).is_empty());
        assert_eq!(entry.chapters(ChapterList::Loved).serialize(), ["2", "4"]);
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut entry = Entry::new().with(EntryField::Title, "Vinland Saga");
        entry.add_chapter("1.1 ~ 1.4", ChapterList::Liked).unwrap();
        entry.set("Publisher", "Kodansha");

        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
