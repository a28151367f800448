//! # canopy-core
//!
//! Foundation crate for the Canopy retrieval system.
//! Defines the ontology types, config, errors, similarity, and the
//! embedding provider trait. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ontology;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RetrievalConfig;
pub use errors::{CanopyError, CanopyResult};
pub use ontology::{Edge, RelationKind, Section, SectionId, TextUnit, UnitId, UnitKind};
pub use similarity::cosine;
pub use traits::IEmbeddingProvider;
