use serde::{Deserialize, Serialize};

use super::section::SectionId;

/// Identifier of a text unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of a text unit. Closed set; `Other` absorbs unrecognized kinds from
/// future ontology versions so deserialization never fails on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Chunk,
    Caption,
    SectionTitle,
    ListItem,
    #[serde(other)]
    Other,
}

/// Minimal addressable body-text item: a chunk, caption, list item, or
/// section title, optionally owned by a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextUnit {
    pub id: UnitId,
    /// Owning section, if any. When set it must name an existing section.
    pub section: Option<SectionId>,
    pub kind: UnitKind,
    pub text: String,
    /// Absent when the unit has no embeddable text.
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
}

impl TextUnit {
    pub fn new(id: impl Into<UnitId>, kind: UnitKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section: None,
            kind,
            text: text.into(),
            vector: None,
        }
    }

    pub fn with_section(mut self, section: impl Into<SectionId>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Whether this unit carries embeddable text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
