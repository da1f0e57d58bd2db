//! World/event compatibility relation
//!
//! Text format, one record per line:
//!
//! ```text
//! w1,w2 e1,e2,e3
//! ```
//!
//! Every world on the left is compatible with every event on the right.
//! The reserved event [`WILDCARD_EVENT`] is compatible with every world and
//! never needs to be listed.

use crate::graph::{FxIndexMap, FxIndexSet};
use std::io::BufRead;
use thiserror::Error;
use tracing::debug;

/// Event label executable at every world
pub const WILDCARD_EVENT: &str = "true";

/// Compatibility parse errors
#[derive(Error, Debug)]
pub enum CompatError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No space between the world list and the event list
    #[error("Line {line}: expected `worlds events` separated by a single space")]
    MissingSeparator { line: usize },

    /// Empty list or empty item inside a list
    #[error("Line {line}: empty world or event label")]
    EmptyLabel { line: usize },

    /// More than two space-separated fields
    #[error("Line {line}: unexpected whitespace in event list")]
    UnexpectedWhitespace { line: usize },
}

pub type CompatResult<T> = Result<T, CompatError>;

/// World label -> event labels executable there
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityIndex {
    entries: FxIndexMap<String, FxIndexSet<String>>,
}

impl CompatibilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse compatibility text
    pub fn parse(input: &str) -> CompatResult<Self> {
        Self::parse_lines(input.lines())
    }

    /// Parse compatibility lines from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> CompatResult<Self> {
        let mut index = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            index.add_record(idx + 1, &line?)?;
        }
        index.log_summary();
        Ok(index)
    }

    /// Parse a sequence of compatibility lines
    pub fn parse_lines<I, S>(lines: I) -> CompatResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for (idx, line) in lines.into_iter().enumerate() {
            index.add_record(idx + 1, line.as_ref())?;
        }
        index.log_summary();
        Ok(index)
    }

    /// Register `event` as executable at `world`
    pub fn insert(&mut self, world: impl Into<String>, event: impl Into<String>) {
        self.entries.entry(world.into()).or_default().insert(event.into());
    }

    /// True when `event` is the wildcard or is listed for `world`
    pub fn is_compatible(&self, world: &str, event: &str) -> bool {
        event == WILDCARD_EVENT
            || self
                .entries
                .get(world)
                .map_or(false, |events| events.contains(event))
    }

    /// Events listed for `world`; the wildcard is not included
    pub fn events(&self, world: &str) -> Option<&FxIndexSet<String>> {
        self.entries.get(world)
    }

    /// Number of worlds with at least one listed event
    pub fn world_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add_record(&mut self, line_no: usize, raw: &str) -> CompatResult<()> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        let (worlds, events) = line
            .split_once(' ')
            .ok_or(CompatError::MissingSeparator { line: line_no })?;
        if events.contains(char::is_whitespace) {
            return Err(CompatError::UnexpectedWhitespace { line: line_no });
        }

        let worlds = split_labels(worlds, line_no)?;
        let events = split_labels(events, line_no)?;
        for world in &worlds {
            for event in &events {
                self.insert(*world, *event);
            }
        }
        Ok(())
    }

    fn log_summary(&self) {
        debug!(
            "Parsed compatibility index: {} worlds, {} pairs",
            self.entries.len(),
            self.entries.values().map(|events| events.len()).sum::<usize>()
        );
    }
}

fn split_labels(list: &str, line_no: usize) -> CompatResult<Vec<&str>> {
    let labels: Vec<&str> = list.split(',').collect();
    if labels.iter().any(|label| label.is_empty()) {
        return Err(CompatError::EmptyLabel { line: line_no });
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cartesian_product_per_line() {
        let index = CompatibilityIndex::parse("w1,w2 e1,e2").unwrap();
        for world in ["w1", "w2"] {
            for event in ["e1", "e2"] {
                assert!(index.is_compatible(world, event));
            }
        }
        assert_eq!(index.world_count(), 2);
    }

    #[test]
    fn test_lines_extend_same_world() {
        let index = CompatibilityIndex::parse("w1 e1\nw1 e2\n").unwrap();
        assert_eq!(index.events("w1").unwrap().len(), 2);
        assert!(index.is_compatible("w1", "e1"));
        assert!(index.is_compatible("w1", "e2"));
    }

    #[test]
    fn test_unknown_world_incompatible() {
        let index = CompatibilityIndex::parse("w1 e1").unwrap();
        assert!(!index.is_compatible("w9", "e1"));
        assert!(!index.is_compatible("w1", "e2"));
    }

    #[test]
    fn test_wildcard_bypasses_index() {
        let index = CompatibilityIndex::new();
        assert!(index.is_empty());
        assert!(index.is_compatible("w1", WILDCARD_EVENT));
        assert!(index.is_compatible("anything", "true"));
        // The wildcard is never stored as an entry
        let index = CompatibilityIndex::parse("w1 e1").unwrap();
        assert!(!index.events("w1").unwrap().contains(WILDCARD_EVENT));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let index = CompatibilityIndex::parse("\nw1 e1\n\n").unwrap();
        assert_eq!(index.world_count(), 1);
    }

    #[test]
    fn test_from_reader() {
        let index = CompatibilityIndex::from_reader(Cursor::new("w1 e1\nw2 e2\n")).unwrap();
        assert!(index.is_compatible("w2", "e2"));
        assert!(!index.is_compatible("w2", "e1"));
    }

    #[test]
    fn test_missing_separator() {
        let result = CompatibilityIndex::parse("w1 e1\nw2");
        assert!(matches!(result, Err(CompatError::MissingSeparator { line: 2 })));
    }

    #[test]
    fn test_empty_labels() {
        assert!(matches!(
            CompatibilityIndex::parse("w1,,w2 e1"),
            Err(CompatError::EmptyLabel { line: 1 })
        ));
        assert!(matches!(
            CompatibilityIndex::parse("w1 e1,"),
            Err(CompatError::EmptyLabel { line: 1 })
        ));
    }

    #[test]
    fn test_extra_field() {
        let result = CompatibilityIndex::parse("w1 e1 e2");
        assert!(matches!(result, Err(CompatError::UnexpectedWhitespace { line: 1 })));
    }
}
