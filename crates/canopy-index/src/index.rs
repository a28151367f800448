//! The immutable ontology index and its builder.
//!
//! `IndexBuilder` takes the raw ingestion output (sections, text units, a
//! flat edge list) and runs the full offline build: structural wiring from
//! edges, hierarchy aggregation, vectorization. The resulting
//! [`OntologyIndex`] is never mutated afterwards, so any number of
//! concurrent queries may share a reference to it without locking.

use std::collections::BTreeMap;

use tracing::info;

use canopy_core::errors::CanopyResult;
use canopy_core::ontology::edge::{build_adjacency, Adjacency};
use canopy_core::ontology::{Edge, RelationKind, Section, SectionId, TextUnit, UnitId, UnitKind};
use canopy_core::traits::IEmbeddingProvider;
use canopy_embeddings::VectorCache;

use crate::hierarchy;
use crate::vectorizer;

/// Everything the query phase needs, built once offline.
#[derive(Debug, Clone)]
pub struct OntologyIndex {
    pub sections: BTreeMap<SectionId, Section>,
    pub units: BTreeMap<UnitId, TextUnit>,
    pub adjacency: Adjacency,
}

impl OntologyIndex {
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn unit(&self, id: &UnitId) -> Option<&TextUnit> {
        self.units.get(id)
    }

    /// Level-1 sections in stable id order.
    pub fn root_sections(&self) -> Vec<&Section> {
        hierarchy::root_sections(&self.sections)
    }
}

/// Offline index builder: wire → aggregate → vectorize → assemble.
pub struct IndexBuilder<'a> {
    provider: &'a dyn IEmbeddingProvider,
    cache: &'a VectorCache,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(provider: &'a dyn IEmbeddingProvider, cache: &'a VectorCache) -> Self {
        Self { provider, cache }
    }

    pub fn build(
        &self,
        sections: Vec<Section>,
        units: Vec<TextUnit>,
        edges: Vec<Edge>,
    ) -> CanopyResult<OntologyIndex> {
        let mut sections: BTreeMap<SectionId, Section> =
            sections.into_iter().map(|s| (s.id.clone(), s)).collect();
        let mut units: BTreeMap<UnitId, TextUnit> =
            units.into_iter().map(|u| (u.id.clone(), u)).collect();

        wire_structure(&mut sections, &mut units, &edges);
        let adjacency = build_adjacency(edges);
        info!(
            sections = sections.len(),
            units = units.len(),
            sources = adjacency.len(),
            "ontology wired"
        );

        hierarchy::aggregate(&mut sections, &units)?;
        info!("hierarchy aggregation complete");

        vectorizer::vectorize_sections(&mut sections, self.provider, self.cache)?;
        vectorizer::vectorize_units(&mut units, self.provider, self.cache)?;
        info!(
            provider = self.provider.name(),
            dimensions = self.provider.dimensions(),
            cached = self.cache.len(),
            "vectorization complete"
        );

        Ok(OntologyIndex {
            sections,
            units,
            adjacency,
        })
    }
}

/// Apply the structural side effects of edges that ingestion may not have
/// wired yet: `HAS_SUBSECTION` parent/child links, `HAS_CHUNK` unit
/// ownership, `CAPTIONS` reclassification of the source unit. Inputs that
/// arrive already wired pass through unchanged.
fn wire_structure(
    sections: &mut BTreeMap<SectionId, Section>,
    units: &mut BTreeMap<UnitId, TextUnit>,
    edges: &[Edge],
) {
    for edge in edges {
        match edge.relation {
            RelationKind::HasSubsection => {
                let parent_id = SectionId::from(edge.from.clone());
                let child_id = SectionId::from(edge.to.clone());
                if !sections.contains_key(&parent_id) {
                    continue;
                }
                let Some(child) = sections.get_mut(&child_id) else {
                    continue;
                };
                if child.parent.is_none() {
                    child.parent = Some(parent_id.clone());
                }
                let Some(parent) = sections.get_mut(&parent_id) else {
                    continue;
                };
                if !parent.children.contains(&child_id) {
                    parent.children.push(child_id);
                }
            }
            RelationKind::HasChunk | RelationKind::HasItem => {
                let section_id = SectionId::from(edge.from.clone());
                if !sections.contains_key(&section_id) {
                    continue;
                }
                if let Some(unit) = units.get_mut(&UnitId::from(edge.to.clone())) {
                    if unit.section.is_none() {
                        unit.section = Some(section_id);
                    }
                }
            }
            RelationKind::Captions => {
                if let Some(unit) = units.get_mut(&UnitId::from(edge.from.clone())) {
                    unit.kind = UnitKind::Caption;
                }
            }
            RelationKind::LinksTo => {}
        }
    }
}
