//! Lazy DOT writer
//!
//! Emission order: header, one `subgraph cluster_*` block per cluster, then one
//! `edge[..]` style block per agent followed by that agent's edges. Lines come
//! out in container insertion order.

use super::{RenderConfig, SerializeError, SerializeResult};
use crate::graph::{Adjacency, Agent, Graph};
use std::iter;

/// DOT writer
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    config: RenderConfig,
}

impl DotWriter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render `graph` as a single-pass sequence of lines
    ///
    /// Every agent's color is checked before anything is produced, so an
    /// error never leaves a half-written document behind.
    pub fn lines<'g>(&self, graph: &'g Graph) -> SerializeResult<impl Iterator<Item = String> + 'g> {
        let blocks = graph
            .agent_links()
            .iter()
            .map(|(agent, links)| match graph.color(agent) {
                Some(color) => Ok((agent, color, links)),
                None => Err(SerializeError::MissingColor { agent: agent.clone() }),
            })
            .collect::<SerializeResult<Vec<_>>>()?;

        let header = [
            format!("digraph {} {{", self.config.graph_name),
            format!("  edge[arrowsize={}];", self.config.arrow_size),
        ];

        let clusters = graph
            .clusters()
            .into_iter()
            .flat_map(|clusters| clusters.iter())
            .flat_map(|(key, members)| {
                [String::new(), format!("  subgraph cluster_{} {{", key)]
                    .into_iter()
                    .chain(members.iter().map(|node| format!("    {};", node)))
                    .chain(iter::once("  }".to_string()))
            });

        let agents = blocks
            .into_iter()
            .flat_map(|(agent, color, links)| style_block(agent, color).into_iter().chain(edge_lines(links)));

        Ok(header
            .into_iter()
            .chain(clusters)
            .chain(agents)
            .chain(iter::once("}".to_string())))
    }

    /// Render `graph` into one string, each line newline-terminated
    pub fn write(&self, graph: &Graph) -> SerializeResult<String> {
        Ok(self.lines(graph)?.fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        }))
    }
}

fn style_block(agent: &Agent, color: &str) -> [String; 6] {
    [
        String::new(),
        "  edge[".to_string(),
        format!("    label=\"{}\",", agent),
        format!("    color=\"{}\",", color),
        format!("    fontcolor=\"{}\",", color),
        "  ];".to_string(),
    ]
}

/// Plain edges, with mutual pairs collapsed into one `dir=both` edge
/// owned by the lexicographically smaller endpoint. Self-loops stay plain.
fn edge_lines(links: &Adjacency) -> impl Iterator<Item = String> + '_ {
    links.iter().flat_map(move |(from, tos)| {
        tos.iter().filter_map(move |to| {
            let bidirectional = from != to
                && links
                    .get(to.as_str())
                    .map_or(false, |back| back.contains(from.as_str()));
            if !bidirectional {
                Some(format!("  {} -> {};", from, to))
            } else if from < to {
                Some(format!("  {} -> {}[dir=both];", from, to))
            } else {
                None
            }
        })
    })
}
