//! Multi-agent graph model
//!
//! This module implements the in-memory labeled graph:
//! - One directed accessibility relation per agent
//! - One display color per agent
//! - Optional clusters grouping nodes for rendering
//! - Insertion-ordered, Fx-hashed containers for deterministic output

pub mod model;
pub mod types;

// Re-export main types
pub use model::{Clusters, Graph, GraphBuilder};
pub use types::{Adjacency, Agent, FxIndexMap, FxIndexSet};
