//! Shared fixtures for cross-crate tests: a scripted embedding provider
//! with exact text → vector control, and a small hand-built software
//! manual ontology used by the end-to-end scenarios.

use std::collections::HashMap;

use canopy_core::errors::CanopyResult;
use canopy_core::ontology::{Edge, RelationKind, Section, TextUnit, UnitKind};
use canopy_core::traits::IEmbeddingProvider;

/// Embedding provider backed by an exact text → vector table.
///
/// Texts are keyed trimmed; anything not scripted (including blank text)
/// maps to the zero vector, which cosine treats as the missing-similarity
/// sentinel. This lets tests pin every similarity in a scenario.
pub struct ScriptedProvider {
    table: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl ScriptedProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            table: HashMap::new(),
            dimensions,
        }
    }

    /// Script an exact text → vector mapping.
    pub fn script(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dimensions, "scripted vector dimension");
        self.table.insert(text.trim().to_string(), vector);
        self
    }
}

impl IEmbeddingProvider for ScriptedProvider {
    fn embed(&self, text: &str) -> CanopyResult<Vec<f32>> {
        Ok(self
            .table
            .get(text.trim())
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dimensions]))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// The query used across the install-manual scenarios.
pub const INSTALL_QUERY: &str = "how do I install the software";

pub const MANUAL_TITLE: &str = "Software Manual";
pub const INSTALL_CHUNK: &str = "To install, run setup.exe";
pub const WEATHER_CHUNK: &str = "The weather is nice in spring.";
pub const CAPTION_CHUNK: &str = "Figure 1: installer window";

/// Subtree text of the manual root after aggregation: title, then the two
/// children in child order (install before faq), caption last inside the
/// install section's unit-id order.
fn manual_subtree_text() -> String {
    format!("{MANUAL_TITLE}\n{INSTALL_CHUNK}\n{CAPTION_CHUNK}\n{WEATHER_CHUNK}")
}

fn install_subtree_text() -> String {
    format!("{INSTALL_CHUNK}\n{CAPTION_CHUNK}")
}

/// A 2-level software manual: root `sec_manual` with a title unit, child
/// `sec_install` holding the setup chunk and a figure caption, child
/// `sec_faq` holding an unrelated chunk. `fig_1` is a non-text node only
/// reachable through the caption edge.
pub fn install_manual() -> (Vec<Section>, Vec<TextUnit>, Vec<Edge>) {
    let sections = vec![
        Section::new("sec_manual", 1),
        Section::new("sec_install", 2),
        Section::new("sec_faq", 2),
    ];
    let units = vec![
        TextUnit::new("u_00_title", UnitKind::SectionTitle, MANUAL_TITLE),
        TextUnit::new("u_01_install", UnitKind::Chunk, INSTALL_CHUNK),
        TextUnit::new("u_02_caption", UnitKind::Chunk, CAPTION_CHUNK),
        TextUnit::new("u_03_weather", UnitKind::Chunk, WEATHER_CHUNK),
    ];
    let edges = vec![
        Edge::new("sec_manual", "sec_install", RelationKind::HasSubsection),
        Edge::new("sec_manual", "sec_faq", RelationKind::HasSubsection),
        Edge::new("sec_manual", "u_00_title", RelationKind::HasChunk),
        Edge::new("sec_install", "u_01_install", RelationKind::HasChunk),
        Edge::new("sec_install", "u_02_caption", RelationKind::HasChunk),
        Edge::new("sec_faq", "u_03_weather", RelationKind::HasChunk),
        Edge::new("u_02_caption", "fig_1", RelationKind::Captions),
    ];
    (sections, units, edges)
}

/// Scripted provider tuned for [`install_manual`]:
/// sim(query, install chunk) = 0.6, sim(query, weather chunk) = 0.05,
/// every aggregated section text covered so drill sees real scores.
pub fn install_manual_provider() -> ScriptedProvider {
    let on_query = |sim: f32| vec![sim, (1.0 - sim * sim).sqrt(), 0.0, 0.0];
    ScriptedProvider::new(4)
        .script(INSTALL_QUERY, vec![1.0, 0.0, 0.0, 0.0])
        .script(MANUAL_TITLE, on_query(0.10))
        .script(INSTALL_CHUNK, on_query(0.60))
        .script(CAPTION_CHUNK, on_query(0.20))
        .script(WEATHER_CHUNK, on_query(0.05))
        .script(&install_subtree_text(), on_query(0.60))
        .script(&manual_subtree_text(), on_query(0.50))
}
