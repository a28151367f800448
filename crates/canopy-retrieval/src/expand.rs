//! Bounded breadth-first expansion over the typed ontology graph.
//!
//! Strict FIFO traversal from the seed set, restricted to an allow-list of
//! relation kinds and bounded by `max_depth` and `max_nodes`. Distances
//! are therefore true shortest hop counts. An edge is recorded only once
//! both endpoints have been admitted, so the output never references a
//! node outside the visited set.

use std::collections::{BTreeSet, HashMap, VecDeque};

use tracing::debug;

use canopy_core::config::ExpandConfig;
use canopy_core::ontology::edge::Adjacency;
use canopy_core::ontology::Edge;

/// Result of one bounded BFS expansion.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Every admitted node, seeds included.
    pub visited: BTreeSet<String>,
    /// Traversed edges; both endpoints are always in `visited`.
    pub edges: Vec<Edge>,
    /// Hop distance from the nearest seed. Seeds are at 0.
    pub distance: HashMap<String, u32>,
}

/// Expand the neighborhood of `seeds` over `adjacency`.
///
/// Nodes at `max_depth` are included but their outgoing edges are not
/// followed. Once `visited` reaches `max_nodes`, no further new nodes are
/// admitted; edges toward rejected nodes are dropped with them.
pub fn expand<'a, I>(seeds: I, adjacency: &Adjacency, config: &ExpandConfig) -> Expansion
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expansion = Expansion::default();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();

    for seed in seeds {
        if expansion.visited.len() >= config.max_nodes {
            break;
        }
        if expansion.visited.insert(seed.to_string()) {
            expansion.distance.insert(seed.to_string(), 0);
            queue.push_back((seed.to_string(), 0));
        }
    }

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= config.max_depth {
            continue;
        }
        for edge in adjacency.get(&node).into_iter().flatten() {
            if !config.allowed_relations.contains(&edge.relation) {
                continue;
            }
            let admitted = if expansion.visited.contains(&edge.to) {
                true
            } else if expansion.visited.len() < config.max_nodes {
                expansion.visited.insert(edge.to.clone());
                expansion.distance.insert(edge.to.clone(), depth + 1);
                queue.push_back((edge.to.clone(), depth + 1));
                true
            } else {
                false
            };
            if admitted {
                expansion.edges.push(edge.clone());
            }
        }
    }

    debug!(
        visited = expansion.visited.len(),
        edges = expansion.edges.len(),
        "expansion complete"
    );
    expansion
}
