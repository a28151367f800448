use crate::ontology::SectionId;

/// Hierarchy inconsistencies detected during aggregation. Fatal: aborts the
/// offline index build, never swallowed by query-time components.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("cycle detected in section hierarchy at {section_id}")]
    CycleDetected { section_id: SectionId },

    #[error("section {referenced_by} references missing child {section_id}")]
    MissingSection {
        section_id: SectionId,
        referenced_by: SectionId,
    },
}
