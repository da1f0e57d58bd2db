//! Graphviz DOT text format
//!
//! Supports only the narrow subset the writer emits:
//! - `label="a",` agent declarations
//! - `color="red",` agent colors
//! - `x -> y;` and `x -> y[dir=both];` edges
//!
//! Every other line is boilerplate and skipped by the parser.

pub mod parser;
pub mod writer;

pub use parser::DotParser;
pub use writer::DotWriter;

use crate::graph::{Agent, Graph};
use thiserror::Error;

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Color or edge line before any agent declaration
    #[error("Line {line}: statement before any agent declaration")]
    NoCurrentAgent { line: usize },

    /// `label="` with nothing after the quote
    #[error("Line {line}: agent declaration without a label")]
    MissingAgentLabel { line: usize },

    /// `color="` without a closing quote
    #[error("Line {line}: unterminated color value")]
    MalformedColor { line: usize },

    /// Edge with nothing on one side of the arrow
    #[error("Line {line}: edge with an empty node label")]
    EmptyNodeLabel { line: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug, PartialEq)]
pub enum SerializeError {
    /// Agent has links but no color
    #[error("No color defined for agent {agent}")]
    MissingColor { agent: Agent },
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Name after the `digraph` keyword
    pub graph_name: String,
    /// Global `edge[arrowsize=..]` directive
    pub arrow_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            arrow_size: 0.3,
        }
    }
}

impl Graph {
    /// Parse a graph from DOT text
    pub fn from_dot(input: &str) -> ParseResult<Graph> {
        DotParser::parse(input)
    }

    /// Lazily render this graph as DOT lines with the default configuration
    pub fn to_dot_lines(&self) -> SerializeResult<impl Iterator<Item = String> + '_> {
        DotWriter::default().lines(self)
    }

    /// Render the whole document, one newline-terminated line at a time
    pub fn to_dot(&self) -> SerializeResult<String> {
        DotWriter::default().write(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.graph_name, "G");
        assert_eq!(config.arrow_size, 0.3);
    }

    #[test]
    fn test_error_messages() {
        let err = SerializeError::MissingColor { agent: Agent::new("a") };
        assert_eq!(err.to_string(), "No color defined for agent a");

        let err = ParseError::NoCurrentAgent { line: 3 };
        assert!(err.to_string().starts_with("Line 3:"));
    }
}
