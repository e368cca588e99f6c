//! OMM Core Library
//!
//! This crate provides the chapter bookkeeping and ordering rules for the OMM media catalog.
//! Each catalog entry tracks its liked and loved chapters as lists of chapter ranges that are
//! kept sorted and merged, and entries are ordered by franchise and natural string order.

pub mod catalog;
pub mod chapter;
pub mod chapters;
pub mod entry;
pub mod error;
pub mod natural;

pub use catalog::{sort_entries, Catalog};
pub use chapter::{parse_chapter, ChapterId, ChapterState, Interval};
pub use chapters::IntervalSet;
pub use entry::{ChapterList, Entry, EntryField};
pub use error::{ChapterError, OmmError, ParseError, Result};
pub use natural::{natural_cmp, natural_less};
