//! Chapter identifiers and ranges of chapters
//!
//! Chapters are written as dotted numbers (`12`, `3.4`, `1.2.7`) and ranges join two of them with a
//! tilde (`3.1 ~ 3.9`). A range may only vary in its last component, so `5.1 ~ 5.4` is a valid range
//! while `5.1 ~ 6.2` is not.

use crate::error::{ChapterError, ParseError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Symbol separating the two ends of a range
pub const RANGE_SYMBOL: char = '~';

/// Symbol separating the components of a chapter
pub const SECTION_SYMBOL: char = '.';

/// A hierarchical chapter position, e.g. `12.3` is `[12, 3]`
///
/// Ordering is lexicographic over the components, with a prefix ordered before any longer
/// identifier that extends it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterId(Vec<u32>);

impl ChapterId {
    /// Create an identifier from its components; `None` when there are no components
    pub fn new(components: Vec<u32>) -> Option<Self> {
        if components.is_empty() {
            None
        } else {
            Some(Self(components))
        }
    }

    /// The components of this identifier
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Number of components
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The deepest component
    pub fn last(&self) -> u32 {
        // Never empty, see `new` and `FromStr`.
        self.0[self.0.len() - 1]
    }

    /// Everything but the deepest component
    pub fn prefix(&self) -> &[u32] {
        &self.0[..self.0.len() - 1]
    }

    /// The next chapter at the same depth
    pub(crate) fn succ(&self) -> Self {
        self.with_last(self.last().saturating_add(1))
    }

    /// The previous chapter at the same depth
    pub(crate) fn pred(&self) -> Self {
        self.with_last(self.last().saturating_sub(1))
    }

    fn with_last(&self, last: u32) -> Self {
        let mut components = self.0.clone();
        let end = components.len() - 1;
        components[end] = last;
        Self(components)
    }
}

impl FromStr for ChapterId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let components = s
            .split(SECTION_SYMBOL)
            .map(|field| parse_component(field, s))
            .collect::<Result<Vec<_>, _>>()?;

        // `split` always yields at least one field, so an empty string fails above.
        Ok(Self(components))
    }
}

fn parse_component(field: &str, token: &str) -> Result<u32, ParseError> {
    let conversion_failure = || ParseError::ConversionFailure {
        token: token.to_string(),
    };

    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(conversion_failure());
    }

    // Only overflow can fail here.
    field.parse().map_err(|_| conversion_failure())
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SECTION_SYMBOL)?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// Outcome of checking a pair of range ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterState {
    /// Usable as is
    Valid,

    /// Usable once the ends are swapped
    Reversed,

    /// The ends have a different number of components
    DifferentDepth,

    /// The ends differ before their last component
    MultiSection,
}

impl ChapterState {
    /// Check whether `low` and `high` form a range
    pub fn of(low: &ChapterId, high: &ChapterId) -> Self {
        if low.depth() != high.depth() {
            return Self::DifferentDepth;
        }

        if low.prefix() != high.prefix() {
            return Self::MultiSection;
        }

        if low.last() > high.last() {
            Self::Reversed
        } else {
            Self::Valid
        }
    }
}

/// A single chapter or a run of chapters differing only in the last component
///
/// Ordering compares `low` first and `high` second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    low: ChapterId,
    high: ChapterId,
}

/// What is left of an interval after a pivot is cut out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remainder {
    /// The pivot covered the whole interval
    Gone,

    /// One end was trimmed
    Shrunk(Interval),

    /// The pivot was strictly inside; left piece first
    Split(Interval, Interval),
}

impl Interval {
    /// Create a range from two ends, swapping them if they are reversed
    pub fn new(low: ChapterId, high: ChapterId) -> Result<Self, ParseError> {
        match ChapterState::of(&low, &high) {
            ChapterState::Valid => Ok(Self { low, high }),
            ChapterState::Reversed => Ok(Self {
                low: high,
                high: low,
            }),
            ChapterState::DifferentDepth => Err(ParseError::DifferentDepth {
                low: low.to_string(),
                high: high.to_string(),
            }),
            ChapterState::MultiSection => Err(ParseError::MultiSection {
                low: low.to_string(),
                high: high.to_string(),
            }),
        }
    }

    /// Create an interval holding one chapter
    pub fn single(chapter: ChapterId) -> Self {
        Self {
            low: chapter.clone(),
            high: chapter,
        }
    }

    /// Lower end
    pub fn low(&self) -> &ChapterId {
        &self.low
    }

    /// Upper end
    pub fn high(&self) -> &ChapterId {
        &self.high
    }

    /// Number of components of both ends
    pub fn depth(&self) -> usize {
        self.low.depth()
    }

    /// Whether this interval holds exactly one chapter
    pub fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Whether the two intervals share at least one position
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Whether `other` continues this interval without a gap, e.g. `1 ~ 4` and `5`
    pub fn is_adjacent(&self, other: &Interval) -> bool {
        let follows = |a: &Interval, b: &Interval| {
            a.high.prefix() == b.low.prefix()
                && a.high.last().checked_add(1) == Some(b.low.last())
        };
        self.depth() == other.depth() && (follows(self, other) || follows(other, self))
    }

    /// Whether the two intervals can be merged into one
    pub fn joins(&self, other: &Interval) -> bool {
        self.overlaps(other) || self.is_adjacent(other)
    }

    /// Whether `other` lies entirely within this interval
    pub fn covers(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Grow this interval to the combined span of both
    ///
    /// Only meaningful when the two join.
    pub(crate) fn absorb(&mut self, other: &Interval) {
        debug_assert!(self.joins(other));
        if other.low < self.low {
            self.low = other.low.clone();
        }
        if other.high > self.high {
            self.high = other.high.clone();
        }
    }

    /// Cut `pivot` out of this interval
    ///
    /// Both must overlap. A pivot at another depth cannot be expressed as a cut and is rejected.
    pub(crate) fn carve(&self, pivot: &Interval) -> Result<Remainder, ChapterError> {
        debug_assert!(self.overlaps(pivot));
        if self.depth() != pivot.depth() {
            return Err(ChapterError::DepthMismatch {
                pivot: pivot.to_string(),
                container: self.to_string(),
            });
        }

        let trims_left = pivot.low <= self.low;
        let trims_right = pivot.high >= self.high;

        let remainder = match (trims_left, trims_right) {
            (true, true) => Remainder::Gone,
            (true, false) => Remainder::Shrunk(Self {
                low: pivot.high.succ(),
                high: self.high.clone(),
            }),
            (false, true) => Remainder::Shrunk(Self {
                low: self.low.clone(),
                high: pivot.low.pred(),
            }),
            (false, false) => Remainder::Split(
                Self {
                    low: self.low.clone(),
                    high: pivot.low.pred(),
                },
                Self {
                    low: pivot.high.succ(),
                    high: self.high.clone(),
                },
            ),
        };

        Ok(remainder)
    }
}

/// Parse chapter text such as `12`, `3.4` or `3.1 ~ 3.9` into an interval
pub fn parse_chapter(text: &str) -> Result<Interval, ParseError> {
    text.parse()
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(RANGE_SYMBOL) {
            None => Ok(Self::single(s.parse()?)),
            Some((low, high)) => Self::new(low.parse()?, high.parse()?),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.low)?;
        if self.low != self.high {
            write!(f, " {} {}", RANGE_SYMBOL, self.high)?;
        }
        Ok(())
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
