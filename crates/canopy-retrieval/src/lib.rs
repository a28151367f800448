//! # canopy-retrieval
//!
//! Online query phase over a built [`canopy_index::OntologyIndex`]:
//! drill selects seed sections, expand walks a bounded typed-edge
//! neighborhood, score ranks the text units inside it, and the engine
//! assembles the final ranked text plus section candidates.
//!
//! Every component here is a pure function over the immutable index; the
//! only external call on the query path is embedding the query text.

pub mod candidates;
pub mod drill;
pub mod engine;
pub mod expand;
pub mod score;

pub use candidates::{RankedUnit, SectionCandidate};
pub use drill::select_seeds;
pub use engine::{QueryOutcome, RetrievalEngine};
pub use expand::{expand, Expansion};
pub use score::NodeScorer;
