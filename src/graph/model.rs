//! Immutable multi-agent graph and its builder
//!
//! A [`Graph`] holds one directed accessibility relation per agent plus the
//! display color of each agent. Instances never change after [`GraphBuilder::build`];
//! transformations such as the product produce a brand-new graph.

use super::types::{Adjacency, Agent, FxIndexMap, FxIndexSet};

/// Cluster key (the producing event label) -> member nodes
pub type Clusters = FxIndexMap<String, FxIndexSet<String>>;

/// Labeled multi-agent directed graph
///
/// - nodes: every label appearing as a source or destination under any agent
/// - agent_links: Agent -> (source -> destinations)
/// - agent_colors: Agent -> display color, only used when rendering
/// - clusters: optional visual grouping, set on product results
///
/// Equality compares contents, not insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    nodes: FxIndexSet<String>,
    agent_links: FxIndexMap<Agent, Adjacency>,
    agent_colors: FxIndexMap<Agent, String>,
    clusters: Option<Clusters>,
}

impl Graph {
    /// Start building a new graph
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    pub fn nodes(&self) -> &FxIndexSet<String> {
        &self.nodes
    }

    pub fn agent_links(&self) -> &FxIndexMap<Agent, Adjacency> {
        &self.agent_links
    }

    /// Adjacency map of one agent, if the graph declares it
    pub fn links(&self, agent: &Agent) -> Option<&Adjacency> {
        self.agent_links.get(agent)
    }

    pub fn agent_colors(&self) -> &FxIndexMap<Agent, String> {
        &self.agent_colors
    }

    pub fn color(&self, agent: &Agent) -> Option<&str> {
        self.agent_colors.get(agent).map(String::as_str)
    }

    pub fn clusters(&self) -> Option<&Clusters> {
        self.clusters.as_ref()
    }

    /// Directed edges of one agent as (from, to) pairs
    pub fn edges<'a>(&'a self, agent: &Agent) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.agent_links
            .get(agent)
            .into_iter()
            .flat_map(|links| {
                links.iter().flat_map(|(from, tos)| {
                    tos.iter().map(move |to| (from.as_str(), to.as_str()))
                })
            })
    }

    pub fn has_edge(&self, agent: &Agent, from: &str, to: &str) -> bool {
        self.agent_links
            .get(agent)
            .and_then(|links| links.get(from))
            .map_or(false, |tos| tos.contains(to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total directed edges across all agents
    pub fn edge_count(&self) -> usize {
        self.agent_links
            .values()
            .flat_map(|links| links.values())
            .map(|tos| tos.len())
            .sum()
    }
}

/// Accumulates agents, colors, edges and clusters, then freezes them into a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    agent_links: FxIndexMap<Agent, Adjacency>,
    agent_colors: FxIndexMap<Agent, String>,
    clusters: Option<Clusters>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh, empty adjacency map for `agent`
    ///
    /// Redeclaring an agent discards the edges collected for it so far.
    pub fn declare_agent(&mut self, agent: Agent) {
        self.agent_links.insert(agent, Adjacency::default());
    }

    /// Make sure `agent` has an adjacency map without clearing an existing one
    pub fn ensure_agent(&mut self, agent: Agent) {
        self.agent_links.entry(agent).or_default();
    }

    pub fn set_color(&mut self, agent: Agent, color: impl Into<String>) {
        self.agent_colors.insert(agent, color.into());
    }

    /// Replace every agent color at once
    pub fn colors(mut self, colors: FxIndexMap<Agent, String>) -> Self {
        self.agent_colors = colors;
        self
    }

    /// Add `from -> to` under `agent`, merging into the existing destination set
    pub fn add_edge(&mut self, agent: &Agent, from: impl Into<String>, to: impl Into<String>) {
        self.agent_links
            .entry(agent.clone())
            .or_default()
            .entry(from.into())
            .or_default()
            .insert(to.into());
    }

    /// Register `node` in the cluster keyed by `key`
    pub fn add_to_cluster(&mut self, key: impl Into<String>, node: impl Into<String>) {
        self.clusters
            .get_or_insert_with(Clusters::default)
            .entry(key.into())
            .or_default()
            .insert(node.into());
    }

    /// Freeze into an immutable graph, deriving the node set from the edges
    pub fn build(self) -> Graph {
        let mut nodes = FxIndexSet::default();
        for links in self.agent_links.values() {
            for (from, tos) in links {
                nodes.insert(from.clone());
                nodes.extend(tos.iter().cloned());
            }
        }

        Graph {
            nodes,
            agent_links: self.agent_links,
            agent_colors: self.agent_colors,
            clusters: self.clusters,
        }
    }
}
