//! Hashed bag-of-words fallback provider.
//!
//! Produces fixed-dimension, L2-normalized vectors by hashing terms into
//! buckets and weighting by term frequency. Not as semantically rich as a
//! neural encoder, but deterministic and dependency-free, which is what
//! tests and air-gapped builds need.

use canopy_core::errors::CanopyResult;
use canopy_core::traits::IEmbeddingProvider;
use std::collections::HashMap;

/// Deterministic hashed bag-of-words embedding provider.
///
/// Blank text maps to the zero vector, the defined placeholder: cosine
/// treats zero-norm input as the missing-similarity sentinel, so blank
/// entities rank at the bottom without any special casing downstream.
pub struct HashedBowProvider {
    dimensions: usize,
}

impl HashedBowProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Lowercase alphanumeric terms, length >= 2.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            vec[Self::bucket(term, self.dimensions)] += count / total;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedBowProvider {
    fn embed(&self, text: &str) -> CanopyResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bow"
    }
}
