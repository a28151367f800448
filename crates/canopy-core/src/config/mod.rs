pub mod defaults;
pub mod drill_config;
pub mod expand_config;
pub mod retrieval_config;
pub mod score_config;

pub use drill_config::DrillConfig;
pub use expand_config::ExpandConfig;
pub use retrieval_config::RetrievalConfig;
pub use score_config::{ScoreConfig, TypeBonus};
