use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Seed-selection (drill) configuration.
///
/// `tau_local` and `tau_child` trade precision against recall: raising
/// `tau_local` demands a closer local match before a section may seed
/// itself, raising `tau_child` prunes descent into weakly matching
/// subtrees. `margin` lets a local match win even when one child's subtree
/// scores slightly higher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    pub tau_local: f32,
    pub tau_child: f32,
    pub margin: f32,
    /// Children explored per descent.
    pub top_k_children: usize,
    /// Root sections explored per query.
    pub top_r_roots: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            tau_local: defaults::DEFAULT_TAU_LOCAL,
            tau_child: defaults::DEFAULT_TAU_CHILD,
            margin: defaults::DEFAULT_MARGIN,
            top_k_children: defaults::DEFAULT_TOP_K_CHILDREN,
            top_r_roots: defaults::DEFAULT_TOP_R_ROOTS,
        }
    }
}

impl DrillConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tau_local.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                name: "tau_local",
                value: self.tau_local,
            });
        }
        if !self.tau_child.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                name: "tau_child",
                value: self.tau_child,
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidMargin { value: self.margin });
        }
        if self.top_k_children == 0 {
            return Err(ConfigError::ZeroBudget {
                name: "top_k_children",
            });
        }
        if self.top_r_roots == 0 {
            return Err(ConfigError::ZeroBudget { name: "top_r_roots" });
        }
        Ok(())
    }
}
