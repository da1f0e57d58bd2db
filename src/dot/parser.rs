//! Line-oriented DOT parser

use super::{ParseError, ParseResult};
use crate::graph::{Agent, Graph, GraphBuilder};
use std::io::BufRead;
use tracing::{debug, trace};

const AGENT_PREFIX: &str = "label=\"";
const COLOR_PREFIX: &str = "color=\"";
const ARROW: &str = "->";
const BIDIRECTIONAL_SUFFIX: &str = "[dir=both];";

/// DOT parser
pub struct DotParser;

impl DotParser {
    /// Parse DOT text
    pub fn parse(input: &str) -> ParseResult<Graph> {
        Self::parse_lines(input.lines())
    }

    /// Parse DOT lines from any buffered reader
    pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<Graph> {
        let mut state = LineState::default();
        for (idx, line) in reader.lines().enumerate() {
            state.feed(idx + 1, &line?)?;
        }
        Ok(state.finish())
    }

    /// Parse a sequence of DOT lines
    pub fn parse_lines<I, S>(lines: I) -> ParseResult<Graph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = LineState::default();
        for (idx, line) in lines.into_iter().enumerate() {
            state.feed(idx + 1, line.as_ref())?;
        }
        Ok(state.finish())
    }
}

/// Running context of one parse: the graph so far and the current agent
#[derive(Default)]
struct LineState {
    builder: GraphBuilder,
    current: Option<Agent>,
    skipped: usize,
}

impl LineState {
    fn feed(&mut self, line_no: usize, raw: &str) -> ParseResult<()> {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(AGENT_PREFIX) {
            let label = rest
                .chars()
                .next()
                .filter(|c| *c != '"')
                .ok_or(ParseError::MissingAgentLabel { line: line_no })?;
            let agent = Agent::from(label);
            self.builder.declare_agent(agent.clone());
            self.current = Some(agent);
        } else if let Some(rest) = line.strip_prefix(COLOR_PREFIX) {
            let agent = self.current_agent(line_no)?;
            let (color, _) = rest
                .split_once('"')
                .ok_or(ParseError::MalformedColor { line: line_no })?;
            self.builder.set_color(agent, color);
        } else if line.contains(ARROW) {
            let agent = self.current_agent(line_no)?;
            let (body, bidirectional) = match line.strip_suffix(BIDIRECTIONAL_SUFFIX) {
                Some(body) => (body, true),
                None => (line.strip_suffix(';').unwrap_or(line), false),
            };
            let Some((lhs, rhs)) = body.split_once(ARROW) else {
                return Err(ParseError::EmptyNodeLabel { line: line_no });
            };
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            if lhs.is_empty() || rhs.is_empty() {
                return Err(ParseError::EmptyNodeLabel { line: line_no });
            }

            self.builder.add_edge(&agent, lhs, rhs);
            if bidirectional {
                self.builder.add_edge(&agent, rhs, lhs);
            }
        } else {
            trace!("Skipping line {}: {:?}", line_no, line);
            self.skipped += 1;
        }

        Ok(())
    }

    fn current_agent(&self, line_no: usize) -> ParseResult<Agent> {
        self.current
            .clone()
            .ok_or(ParseError::NoCurrentAgent { line: line_no })
    }

    fn finish(self) -> Graph {
        let graph = self.builder.build();
        debug!(
            "Parsed graph: {} agents, {} nodes, {} edges ({} lines skipped)",
            graph.agent_links().len(),
            graph.node_count(),
            graph.edge_count(),
            self.skipped
        );
        graph
    }
}
