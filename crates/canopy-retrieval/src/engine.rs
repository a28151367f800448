//! RetrievalEngine: orchestrates the full query pipeline.
//!
//! query text → embed → drill (seeds) → expand (bounded neighborhood) →
//! score (ranked units) → section candidates.
//!
//! The engine borrows an immutable index and a provider; it holds no
//! mutable state, so one engine may serve arbitrarily many concurrent
//! queries. Embedding the query is the only blocking external call —
//! timeout and cancellation around it belong to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use canopy_core::config::RetrievalConfig;
use canopy_core::errors::CanopyResult;
use canopy_core::ontology::{Edge, SectionId};
use canopy_core::traits::IEmbeddingProvider;
use canopy_index::OntologyIndex;

use crate::candidates::{self, RankedUnit, SectionCandidate};
use crate::drill;
use crate::expand;
use crate::score::NodeScorer;

/// Everything a query produces. Zero seeds, nodes, or candidates is a
/// valid empty outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub query: String,
    pub seed_section_ids: Vec<SectionId>,
    pub expanded_node_ids: Vec<String>,
    pub expanded_edges: Vec<Edge>,
    pub ranked_units: Vec<RankedUnit>,
    pub section_candidates: Vec<SectionCandidate>,
}

/// The main retrieval engine.
pub struct RetrievalEngine<'a> {
    index: &'a OntologyIndex,
    provider: &'a dyn IEmbeddingProvider,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    /// Build an engine over a loaded index. The config is validated here
    /// so a bad one never reaches the query path.
    pub fn new(
        index: &'a OntologyIndex,
        provider: &'a dyn IEmbeddingProvider,
        config: RetrievalConfig,
    ) -> CanopyResult<Self> {
        config.validate()?;
        Ok(Self {
            index,
            provider,
            config,
        })
    }

    /// Run the full pipeline for one query. The embed call is the only
    /// external operation; everything after it is pure.
    pub fn run_query(&self, query: &str) -> CanopyResult<QueryOutcome> {
        let query_vector = self.provider.embed(query)?;
        Ok(self.run_query_vector(query, &query_vector))
    }

    /// Run a query against an already-embedded vector. Useful when the
    /// caller batches or caches query embeddings itself.
    pub fn run_query_vector(&self, query: &str, query_vector: &[f32]) -> QueryOutcome {
        let seeds = drill::select_seeds(self.index, &self.config.drill, query_vector);
        debug!(seeds = seeds.len(), "drill complete");

        let expansion = expand::expand(
            seeds.iter().map(|s| s.as_str()),
            &self.index.adjacency,
            &self.config.expand,
        );

        let scorer = NodeScorer::new(self.index, &self.config.score);
        let scored = scorer.rank(
            expansion.visited.iter().map(String::as_str),
            query_vector,
            &expansion.distance,
        );

        let ranked_units: Vec<RankedUnit> = scored
            .into_iter()
            .filter_map(|s| {
                let unit = self.index.units.get(&s.id)?;
                Some(RankedUnit {
                    id: unit.id.clone(),
                    section_id: unit.section.clone(),
                    kind: unit.kind,
                    text: unit.text.clone(),
                    score: s.score,
                })
            })
            .collect();

        let section_candidates = candidates::assemble(self.index, &ranked_units);

        info!(
            seeds = seeds.len(),
            nodes = expansion.visited.len(),
            ranked = ranked_units.len(),
            candidates = section_candidates.len(),
            "query complete"
        );

        QueryOutcome {
            query: query.to_string(),
            seed_section_ids: seeds.into_iter().collect(),
            expanded_node_ids: expansion.visited.into_iter().collect(),
            expanded_edges: expansion.edges,
            ranked_units,
            section_candidates,
        }
    }
}
