use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::ontology::RelationKind;

/// Graph expansion (bounded BFS) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Maximum hop distance from the nearest seed. Nodes at this depth are
    /// included but their outgoing edges are not followed.
    pub max_depth: u32,
    /// Hard cap on the number of visited nodes.
    pub max_nodes: usize,
    /// Relations traversal may follow. Edges of any other kind are ignored.
    pub allowed_relations: BTreeSet<RelationKind>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            max_nodes: defaults::DEFAULT_MAX_NODES,
            allowed_relations: RelationKind::ALL.into_iter().collect(),
        }
    }
}

impl ExpandConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroBudget { name: "max_depth" });
        }
        if self.max_nodes == 0 {
            return Err(ConfigError::ZeroBudget { name: "max_nodes" });
        }
        Ok(())
    }
}
