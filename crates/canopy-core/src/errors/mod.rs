pub mod config_error;
pub mod embedding_error;
pub mod structural_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use structural_error::StructuralError;

/// Top-level error type aggregating every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum CanopyError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

pub type CanopyResult<T> = Result<T, CanopyError>;
