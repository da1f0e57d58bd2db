//! Core type definitions for the graph model

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::fmt;

/// Insertion-ordered map keyed with the Fx hasher
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered set keyed with the Fx hasher
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// One agent's accessibility relation: source node -> destination nodes
pub type Adjacency = FxIndexMap<String, FxIndexSet<String>>;

/// Agent label naming one accessibility relation (conventionally one character, e.g. "a")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Agent(String);

impl Agent {
    pub fn new(agent: impl Into<String>) -> Self {
        Agent(agent.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Agent {
    fn from(s: String) -> Self {
        Agent(s)
    }
}

impl From<&str> for Agent {
    fn from(s: &str) -> Self {
        Agent(s.to_string())
    }
}

impl From<char> for Agent {
    fn from(c: char) -> Self {
        Agent(c.to_string())
    }
}
