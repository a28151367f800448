//! Text → vector cache for the offline build.
//!
//! Keys are blake3 hashes of the trimmed text, values are vectors. The
//! cache is an explicit object passed into vectorization, never ambient
//! process state. It is concurrency-safe; a race that computes the same
//! text twice costs time, not correctness, because providers are
//! deterministic.

use moka::sync::Cache;

/// Content-hash-keyed embedding cache.
pub struct VectorCache {
    cache: Cache<String, Vec<f32>>,
}

impl VectorCache {
    /// A cache holding at most `max_entries` vectors.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    fn key(text: &str) -> String {
        blake3::hash(text.trim().as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, vector: Vec<f32>) {
        self.cache.insert(Self::key(text), vector);
    }

    /// Look up the vector for `text`, computing and caching it on a miss.
    pub fn get_or_compute<E>(
        &self,
        text: &str,
        compute: impl FnOnce(&str) -> Result<Vec<f32>, E>,
    ) -> Result<Vec<f32>, E> {
        if let Some(hit) = self.get(text) {
            return Ok(hit);
        }
        // Embed exactly what the key hashes, so whitespace variants that
        // share a slot cannot disagree on the stored vector.
        let vector = compute(text.trim())?;
        self.insert(text, vector.clone());
        Ok(vector)
    }

    /// Number of cached vectors.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VectorCache {
    fn default() -> Self {
        Self::new(100_000)
    }
}
