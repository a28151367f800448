/// Embedding provider failures. A failed vectorization is fatal for that
/// entity: substituting a placeholder vector would silently corrupt every
/// downstream ranking.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
