use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Typed relation between two ontology nodes. Closed set: traversal only
/// ever follows these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    HasSubsection,
    HasChunk,
    HasItem,
    Captions,
    LinksTo,
}

impl RelationKind {
    /// All relation kinds, in declaration order.
    pub const ALL: [RelationKind; 5] = [
        RelationKind::HasSubsection,
        RelationKind::HasChunk,
        RelationKind::HasItem,
        RelationKind::Captions,
        RelationKind::LinksTo,
    ];
}

/// A directed typed edge. Endpoints are raw node ids: sections, text units,
/// and non-text nodes (figures, link targets) all live in one id space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: RelationKind,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, relation: RelationKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation,
        }
    }
}

/// Adjacency keyed by source node id. BTreeMap so iteration order is
/// deterministic across runs.
pub type Adjacency = BTreeMap<String, Vec<Edge>>;

/// Group a flat edge list into an adjacency map, preserving input order
/// within each source's list.
pub fn build_adjacency<I: IntoIterator<Item = Edge>>(edges: I) -> Adjacency {
    let mut adj = Adjacency::new();
    for edge in edges {
        adj.entry(edge.from.clone()).or_default().push(edge);
    }
    adj
}
