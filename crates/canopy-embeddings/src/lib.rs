//! # canopy-embeddings
//!
//! Embedding support for the offline build: a deterministic hashed
//! bag-of-words provider (always available, no model download) and a
//! thread-safe vector cache keyed by content hash. Neural providers are an
//! external concern; anything implementing
//! [`canopy_core::IEmbeddingProvider`] plugs in.

pub mod cache;
pub mod provider;

pub use cache::VectorCache;
pub use provider::HashedBowProvider;
