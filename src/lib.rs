//! Epistemic Product
//!
//! Computes the synchronous product of a world graph and an event graph, both
//! multi-agent labeled digraphs stored as Graphviz DOT, filtered by a
//! world/event compatibility relation. This is the update-product
//! construction of dynamic epistemic logic.
//!
//! # Pipeline
//!
//! - Parse the world and event graphs ([`dot::DotParser`])
//! - Parse the compatibility relation ([`compat::CompatibilityIndex`])
//! - Build the product ([`product::product`])
//! - Render the result ([`dot::DotWriter`])
//!
//! ## Example Usage
//!
//! ```rust
//! use epistemic_product::{product, Agent, CompatibilityIndex, Graph};
//!
//! let worlds = Graph::from_dot("label=\"a\",\ncolor=\"red\",\nw1 -> w2;").unwrap();
//! let events = Graph::from_dot("label=\"a\",\ncolor=\"blue\",\ne1 -> e2;").unwrap();
//! let compat = CompatibilityIndex::parse("w1 e1\nw2 e2").unwrap();
//!
//! let result = product(&worlds, &events, &compat);
//! assert!(result.has_edge(&Agent::new("a"), "w1e1", "w2e2"));
//!
//! let text = result.to_dot().unwrap();
//! assert!(text.contains("w1e1 -> w2e2;"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod compat;
pub mod dot;
pub mod graph;
pub mod product;

// Re-export main types for convenience
pub use compat::{CompatError, CompatResult, CompatibilityIndex, WILDCARD_EVENT};
pub use dot::{
    DotParser, DotWriter, ParseError, ParseResult, RenderConfig, SerializeError,
    SerializeResult,
};
pub use graph::{Adjacency, Agent, Clusters, Graph, GraphBuilder};
pub use product::product;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
