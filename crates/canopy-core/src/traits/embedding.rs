use crate::errors::CanopyResult;

/// Embedding generation provider.
///
/// Implementations must be deterministic for identical input and must map
/// empty or blank text to a defined non-crashing placeholder (the zero
/// vector works: cosine treats it as the missing-similarity sentinel).
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a unit-norm vector of floats.
    fn embed(&self, text: &str) -> CanopyResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> CanopyResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
