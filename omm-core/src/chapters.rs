//! Named lists of chapters
//!
//! An [`IntervalSet`] keeps the liked or loved chapters of one entry. `add` and `remove` edit the
//! list in place, and `organize` restores the normal form: sorted by `(low, high)` with no two
//! intervals overlapping. Contiguous runs such as `5`, `6` and `7` are merged into `5 ~ 7`.

use crate::chapter::{parse_chapter, Interval, Remainder};
use crate::error::{ChapterError, Result};
use serde::{Serialize, Serializer};

/// A named list of chapters and ranges of chapters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    name: String,
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create an empty list with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intervals: Vec::new(),
        }
    }

    /// Build a list from stored chapter text
    ///
    /// Tokens that do not parse are dropped. The result is not organized.
    pub fn from_tokens<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(name);
        for token in tokens {
            let token = token.as_ref();
            match parse_chapter(token) {
                Ok(interval) => set.intervals.push(interval),
                Err(e) => tracing::warn!("Discarding chapter {:?} in {}: {}", token, set.name, e),
            }
        }
        set
    }

    /// Name of this list
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the list holds no chapters
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over the intervals in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Whether some interval covers all of `chapter`
    pub fn contains(&self, chapter: &Interval) -> bool {
        self.intervals.iter().any(|i| i.covers(chapter))
    }

    /// Parse `text` and add it to the list
    ///
    /// Text that fails to parse leaves the list unchanged.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let interval = parse_chapter(text)?;
        self.insert(interval);
        Ok(())
    }

    /// Add an interval, merging it into the first interval it overlaps or continues
    ///
    /// Otherwise the interval is appended; `organize` puts it in place.
    pub fn insert(&mut self, interval: Interval) {
        match self.intervals.iter_mut().find(|i| i.joins(&interval)) {
            Some(existing) => {
                existing.absorb(&interval);
                tracing::debug!("Merged {} into {} of {}", interval, existing, self.name);
            }
            None => self.intervals.push(interval),
        }
    }

    /// Parse `text` and remove it from the list
    ///
    /// Text that fails to parse leaves the list unchanged.
    pub fn remove(&mut self, text: &str) -> Result<()> {
        let pivot = parse_chapter(text)?;
        self.delete(&pivot)?;
        Ok(())
    }

    /// Cut `pivot` out of every interval it overlaps
    ///
    /// Removing chapters that are not in the list does nothing. The first overlapping interval
    /// decides: if its depth differs from the pivot's nothing is removed. Later overlapping
    /// intervals of another depth are left as they are.
    pub fn delete(&mut self, pivot: &Interval) -> std::result::Result<(), ChapterError> {
        let mut overlapping = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, container)| container.overlaps(pivot));
        let Some((first, container)) = overlapping.next() else {
            return Ok(());
        };
        let mut remainders = vec![(first, container.carve(pivot)?)];
        for (index, container) in overlapping {
            match container.carve(pivot) {
                Ok(remainder) => remainders.push((index, remainder)),
                Err(ChapterError::DepthMismatch { .. }) => {
                    tracing::debug!(
                        "Keeping {} in {}: depth differs from {}",
                        container,
                        self.name,
                        pivot
                    );
                }
            }
        }

        // Back to front so earlier indices stay valid while splicing.
        for (index, remainder) in remainders.into_iter().rev() {
            tracing::debug!("Removing {} from {}: {:?}", pivot, self.name, remainder);
            match remainder {
                Remainder::Gone => {
                    self.intervals.remove(index);
                }
                Remainder::Shrunk(rest) => self.intervals[index] = rest,
                Remainder::Split(left, right) => {
                    self.intervals[index] = right;
                    self.intervals.insert(index, left);
                }
            }
        }

        Ok(())
    }

    /// Sort the list and merge overlapping or contiguous neighbours
    pub fn organize(&mut self) {
        self.intervals.sort();

        let mut index = 0;
        while index + 1 < self.intervals.len() {
            if self.intervals[index].joins(&self.intervals[index + 1]) {
                // Stay put: the grown interval may now reach the next one too.
                let next = self.intervals.remove(index + 1);
                self.intervals[index].absorb(&next);
            } else {
                index += 1;
            }
        }
    }

    /// Whether the list is sorted with no overlapping neighbours
    pub fn is_organized(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|pair| pair[0] < pair[1] && !pair[0].overlaps(&pair[1]))
    }

    /// Canonical text of each interval, in list order
    pub fn serialize(&self) -> Vec<String> {
        self.intervals.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for IntervalSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.intervals)
    }
}
