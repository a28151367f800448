//! # canopy-index
//!
//! Offline phase of the Canopy system: aggregate per-section text over the
//! section forest, vectorize sections and text units through an explicit
//! cache, and assemble the immutable [`OntologyIndex`] the query phase
//! runs against.

pub mod hierarchy;
pub mod index;
pub mod vectorizer;

pub use hierarchy::{aggregate, root_sections, section_path};
pub use index::{IndexBuilder, OntologyIndex};
pub use vectorizer::{vectorize_sections, vectorize_units};
