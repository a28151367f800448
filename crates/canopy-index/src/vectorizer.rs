//! Section and text-unit vectorization.
//!
//! Non-empty text goes through the cache to the provider; empty text gets
//! no vector at all. Provider failures are fatal for the build — a
//! placeholder vector in place of a real one would silently corrupt every
//! ranking computed from it.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

use canopy_core::errors::CanopyResult;
use canopy_core::ontology::{Section, SectionId, TextUnit, UnitId};
use canopy_core::traits::IEmbeddingProvider;
use canopy_embeddings::VectorCache;

fn embed_nonempty(
    text: &str,
    provider: &dyn IEmbeddingProvider,
    cache: &VectorCache,
) -> CanopyResult<Option<Vec<f32>>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    cache.get_or_compute(text, |t| provider.embed(t)).map(Some)
}

/// Compute `local_vector` and `subtree_vector` for every section.
pub fn vectorize_sections(
    sections: &mut BTreeMap<SectionId, Section>,
    provider: &dyn IEmbeddingProvider,
    cache: &VectorCache,
) -> CanopyResult<()> {
    let mut entries: Vec<&mut Section> = sections.values_mut().collect();
    entries.par_iter_mut().try_for_each(|section| -> CanopyResult<()> {
        section.local_vector = embed_nonempty(&section.local_text, provider, cache)?;
        section.subtree_vector = embed_nonempty(&section.subtree_text, provider, cache)?;
        Ok(())
    })?;
    debug!(sections = sections.len(), "section vectorization complete");
    Ok(())
}

/// Compute `vector` for every text unit carrying embeddable text.
pub fn vectorize_units(
    units: &mut BTreeMap<UnitId, TextUnit>,
    provider: &dyn IEmbeddingProvider,
    cache: &VectorCache,
) -> CanopyResult<()> {
    let mut entries: Vec<&mut TextUnit> = units.values_mut().collect();
    entries.par_iter_mut().try_for_each(|unit| -> CanopyResult<()> {
        unit.vector = embed_nonempty(&unit.text, provider, cache)?;
        Ok(())
    })?;
    debug!(units = units.len(), "unit vectorization complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::errors::{CanopyError, EmbeddingError};
    use canopy_core::ontology::UnitKind;
    use canopy_embeddings::HashedBowProvider;

    struct FailingProvider;

    impl IEmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> CanopyResult<Vec<f32>> {
            Err(EmbeddingError::ProviderFailed {
                provider: "failing".to_string(),
                reason: "backend offline".to_string(),
            }
            .into())
        }

        fn dimensions(&self) -> usize {
            8
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn unit_map(units: Vec<TextUnit>) -> BTreeMap<UnitId, TextUnit> {
        units.into_iter().map(|u| (u.id.clone(), u)).collect()
    }

    #[test]
    fn empty_text_gets_no_vector() {
        let provider = HashedBowProvider::new(16);
        let cache = VectorCache::default();
        let mut units = unit_map(vec![
            TextUnit::new("u_1", UnitKind::Chunk, "real text"),
            TextUnit::new("u_2", UnitKind::Chunk, "   "),
        ]);
        vectorize_units(&mut units, &provider, &cache).unwrap();
        assert!(units[&UnitId::from("u_1")].vector.is_some());
        assert!(units[&UnitId::from("u_2")].vector.is_none());
    }

    #[test]
    fn identical_texts_share_the_cache() {
        let provider = HashedBowProvider::new(16);
        let cache = VectorCache::default();
        let mut units = unit_map(vec![
            TextUnit::new("u_1", UnitKind::Chunk, "same text"),
            TextUnit::new("u_2", UnitKind::Caption, "same text"),
        ]);
        vectorize_units(&mut units, &provider, &cache).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(
            units[&UnitId::from("u_1")].vector,
            units[&UnitId::from("u_2")].vector
        );
    }

    #[test]
    fn provider_failure_aborts_the_build() {
        let cache = VectorCache::default();
        let mut units = unit_map(vec![TextUnit::new("u_1", UnitKind::Chunk, "text")]);
        let err = vectorize_units(&mut units, &FailingProvider, &cache).unwrap_err();
        assert!(matches!(err, CanopyError::Embedding(_)));
        // No placeholder was substituted.
        assert!(units[&UnitId::from("u_1")].vector.is_none());
    }

    #[test]
    fn sections_get_local_and_subtree_vectors() {
        let provider = HashedBowProvider::new(16);
        let cache = VectorCache::default();
        let mut section = Section::new("sec_a", 1);
        section.local_text = "intro".to_string();
        section.subtree_text = "intro\ndetails".to_string();
        let mut sections = BTreeMap::from([(section.id.clone(), section)]);

        vectorize_sections(&mut sections, &provider, &cache).unwrap();
        let section = &sections[&SectionId::from("sec_a")];
        assert!(section.local_vector.is_some());
        assert!(section.subtree_vector.is_some());
    }
}
