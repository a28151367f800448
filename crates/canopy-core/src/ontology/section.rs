use serde::{Deserialize, Serialize};

/// Identifier of a section in the ontology forest.
///
/// Ids come from ingestion and are opaque here; ordering on the raw string
/// is the stable structural order used for deterministic tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A hierarchical document division.
///
/// Sections form a forest: at most one parent, no cycles. `local_text` and
/// `subtree_text` are filled in by the hierarchy aggregator during the
/// offline build; the optional vectors by the vectorizer. Everything is
/// immutable at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Depth in the forest, 1 = root.
    pub level: u32,
    pub parent: Option<SectionId>,
    /// Ordered child references.
    pub children: Vec<SectionId>,
    /// Concatenated text of the units assigned directly to this section.
    #[serde(default)]
    pub local_text: String,
    /// Depth-first concatenation of this section's text plus all descendants'.
    #[serde(default)]
    pub subtree_text: String,
    #[serde(default)]
    pub local_vector: Option<Vec<f32>>,
    #[serde(default)]
    pub subtree_vector: Option<Vec<f32>>,
}

impl Section {
    /// A bare section with no text, vectors, or links yet.
    pub fn new(id: impl Into<SectionId>, level: u32) -> Self {
        Self {
            id: id.into(),
            level,
            parent: None,
            children: Vec::new(),
            local_text: String::new(),
            subtree_text: String::new(),
            local_vector: None,
            subtree_vector: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.level == 1
    }

    /// Whether this section has any directly assigned text.
    pub fn has_local_text(&self) -> bool {
        !self.local_text.trim().is_empty()
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
