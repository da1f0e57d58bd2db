//! Synchronous product of a world graph and an event graph
//!
//! For every agent `a` declared by both graphs, every world edge `w -> w'`
//! is paired with every event edge `e -> e'`. The composite edge
//! `we -> w'e'` is kept when `e` is executable at `w` and `e'` is executable
//! at `w'`. Composite labels are plain concatenations, so two pairs that
//! spell the same string share one node.

use crate::compat::CompatibilityIndex;
use crate::graph::Graph;
use tracing::debug;

/// Compute the product of `worlds` and `events` under `compat`
///
/// The result reuses the world graph's agent colors and groups every
/// composite node into the cluster of the event that produced it. Agents
/// missing from `events` keep an empty relation. Neither input is modified.
pub fn product(worlds: &Graph, events: &Graph, compat: &CompatibilityIndex) -> Graph {
    let mut builder = Graph::builder().colors(worlds.agent_colors().clone());

    for (agent, world_links) in worlds.agent_links() {
        builder.ensure_agent(agent.clone());

        let Some(event_links) = events.links(agent) else {
            debug!("Agent {} has no event relation, skipping", agent);
            continue;
        };

        let mut produced = 0usize;
        for (world_from, worlds_to) in world_links {
            for world_to in worlds_to {
                for (event_from, events_to) in event_links {
                    if !compat.is_compatible(world_from, event_from) {
                        continue;
                    }
                    for event_to in events_to {
                        if !compat.is_compatible(world_to, event_to) {
                            continue;
                        }

                        let node_from = composite(world_from, event_from);
                        let node_to = composite(world_to, event_to);
                        builder.add_to_cluster(event_from.as_str(), node_from.as_str());
                        builder.add_to_cluster(event_to.as_str(), node_to.as_str());
                        builder.add_edge(agent, node_from, node_to);
                        produced += 1;
                    }
                }
            }
        }
        debug!("Agent {}: {} product edges", agent, produced);
    }

    let graph = builder.build();
    debug!(
        "Product graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

fn composite(world: &str, event: &str) -> String {
    let mut label = String::with_capacity(world.len() + event.len());
    label.push_str(world);
    label.push_str(event);
    label
}
