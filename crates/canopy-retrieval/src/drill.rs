//! Seed-section selection ("drill").
//!
//! Walks the section forest from the best-matching roots, at each section
//! weighing its own local match against its children's subtree matches.
//! A section with a good-enough local match wins its branch and becomes a
//! seed; otherwise the walk descends into the strongest children or prunes
//! the branch. Each recursion level returns its seeds and the caller
//! merges, so there is no shared accumulator to synchronize.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use canopy_core::config::DrillConfig;
use canopy_core::cosine;
use canopy_core::ontology::{Section, SectionId};
use canopy_index::OntologyIndex;

/// Select seed sections for a query vector.
///
/// Returns the deduplicated union of seeds across the explored roots.
/// Empty when the index has no sections or nothing clears the thresholds;
/// never an error.
pub fn select_seeds(
    index: &OntologyIndex,
    config: &DrillConfig,
    query: &[f32],
) -> BTreeSet<SectionId> {
    let mut roots: Vec<(&Section, f32)> = index
        .sections
        .values()
        .filter(|s| s.is_root())
        .map(|s| (s, cosine(Some(query), s.subtree_vector.as_deref())))
        .collect();
    // Stable sort: ties keep the original id order.
    roots.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut seeds = BTreeSet::new();
    for (root, score) in roots.into_iter().take(config.top_r_roots) {
        debug!(root = %root.id, score, "drilling root");
        seeds.extend(drill_section(index, config, root, query));
    }
    seeds
}

/// Seeds found under one section. Pure: merging happens at the call site.
fn drill_section(
    index: &OntologyIndex,
    config: &DrillConfig,
    section: &Section,
    query: &[f32],
) -> BTreeSet<SectionId> {
    let score_local = cosine(Some(query), section.local_vector.as_deref());

    let mut child_scores: Vec<(&Section, f32)> = section
        .children
        .iter()
        .filter_map(|cid| index.sections.get(cid))
        .map(|c| (c, cosine(Some(query), c.subtree_vector.as_deref())))
        .collect();
    // Childless sections score -1, same as a missing vector.
    let score_best_child = child_scores.iter().map(|(_, s)| *s).fold(-1.0f32, f32::max);

    if !section.has_local_text() {
        // No local text: this section can never seed itself.
        if score_best_child < config.tau_child {
            return BTreeSet::new();
        }
        return descend(index, config, &mut child_scores, query);
    }

    if score_local >= score_best_child - config.margin && score_local >= config.tau_local {
        return BTreeSet::from([section.id.clone()]);
    }

    if score_best_child >= config.tau_child {
        return descend(index, config, &mut child_scores, query);
    }

    BTreeSet::new()
}

/// Recurse into the top `top_k_children` highest-scoring children and merge
/// their seeds. Ties break by score then stable child order.
fn descend(
    index: &OntologyIndex,
    config: &DrillConfig,
    child_scores: &mut [(&Section, f32)],
    query: &[f32],
) -> BTreeSet<SectionId> {
    child_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let mut seeds = BTreeSet::new();
    for (child, _) in child_scores.iter().take(config.top_k_children) {
        seeds.extend(drill_section(index, config, child, query));
    }
    seeds
}
