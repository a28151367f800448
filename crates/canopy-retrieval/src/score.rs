//! Multi-factor scoring of text units inside the expanded set.
//!
//! score = w_text·sim + w_type·type_bonus + w_level·level_bonus
//!         − w_dist·hop_distance
//!
//! A missing vector scores the −1 similarity sentinel and a unit absent
//! from the distance map gets the maximal distance penalty, so incomplete
//! units sink to the bottom instead of erroring. Candidate ids with no
//! text unit behind them (figures, link targets) are skipped silently.

use std::cmp::Ordering;
use std::collections::HashMap;

use canopy_core::config::ScoreConfig;
use canopy_core::constants::DISTANCE_SENTINEL;
use canopy_core::cosine;
use canopy_core::ontology::{TextUnit, UnitId};
use canopy_index::OntologyIndex;

/// A unit id with its composite relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredUnit {
    pub id: UnitId,
    pub score: f32,
}

/// Scores and ranks text units for one query.
pub struct NodeScorer<'a> {
    index: &'a OntologyIndex,
    config: &'a ScoreConfig,
}

impl<'a> NodeScorer<'a> {
    pub fn new(index: &'a OntologyIndex, config: &'a ScoreConfig) -> Self {
        Self { index, config }
    }

    /// Composite score for one unit.
    pub fn score_one(
        &self,
        unit: &TextUnit,
        query: &[f32],
        distance: &HashMap<String, u32>,
    ) -> f32 {
        let sim = cosine(Some(query), unit.vector.as_deref());
        let bonus_type = self.config.type_bonus.for_kind(unit.kind);
        let level = unit
            .section
            .as_ref()
            .and_then(|sid| self.index.sections.get(sid))
            .map(|s| s.level)
            .unwrap_or(1);
        let bonus_level = self.config.level_bonus_for(level);
        let dist = distance
            .get(unit.id.as_str())
            .copied()
            .unwrap_or(DISTANCE_SENTINEL);

        self.config.w_text * sim + self.config.w_type * bonus_type
            + self.config.w_level * bonus_level
            - self.config.w_dist * dist as f32
    }

    /// Rank the scorable units among `candidates`, descending, top
    /// `top_k`. The sort is stable: ties keep candidate order.
    pub fn rank<'c, I>(
        &self,
        candidates: I,
        query: &[f32],
        distance: &HashMap<String, u32>,
    ) -> Vec<ScoredUnit>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut scored: Vec<ScoredUnit> = candidates
            .into_iter()
            .filter_map(|id| {
                let unit = self.index.units.get(&UnitId::from(id))?;
                Some(ScoredUnit {
                    id: unit.id.clone(),
                    score: self.score_one(unit, query, distance),
                })
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.config.top_k);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::ontology::{Section, SectionId, UnitKind};
    use std::collections::BTreeMap;

    fn index_with(units: Vec<TextUnit>) -> OntologyIndex {
        let mut section = Section::new("sec_a", 2);
        section.local_text = "local".to_string();
        let sections: BTreeMap<SectionId, Section> =
            BTreeMap::from([(section.id.clone(), section)]);
        OntologyIndex {
            sections,
            units: units.into_iter().map(|u| (u.id.clone(), u)).collect(),
            adjacency: BTreeMap::new(),
        }
    }

    fn unit(id: &str, vector: Option<Vec<f32>>) -> TextUnit {
        let mut u = TextUnit::new(id, UnitKind::Chunk, "text").with_section("sec_a");
        u.vector = vector;
        u
    }

    #[test]
    fn higher_similarity_never_scores_lower() {
        let index = index_with(vec![
            unit("u_hi", Some(vec![1.0, 0.0])),
            unit("u_lo", Some(vec![0.0, 1.0])),
        ]);
        let config = ScoreConfig::default();
        let scorer = NodeScorer::new(&index, &config);
        let distance = HashMap::from([("u_hi".to_string(), 1), ("u_lo".to_string(), 1)]);

        let ranked = scorer.rank(["u_lo", "u_hi"], &[1.0, 0.0], &distance);
        assert_eq!(ranked[0].id.as_str(), "u_hi");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn vectorless_unit_scores_at_or_below_vectored_twin() {
        let index = index_with(vec![
            unit("u_vec", Some(vec![1.0, 0.0])),
            unit("u_none", None),
        ]);
        let config = ScoreConfig::default();
        let scorer = NodeScorer::new(&index, &config);
        let distance = HashMap::from([("u_vec".to_string(), 1), ("u_none".to_string(), 1)]);

        let ranked = scorer.rank(["u_none", "u_vec"], &[1.0, 0.0], &distance);
        assert_eq!(ranked[0].id.as_str(), "u_vec");
    }

    #[test]
    fn untracked_unit_gets_the_distance_sentinel_penalty() {
        let index = index_with(vec![
            unit("u_near", Some(vec![1.0, 0.0])),
            unit("u_lost", Some(vec![1.0, 0.0])),
        ]);
        let config = ScoreConfig::default();
        let scorer = NodeScorer::new(&index, &config);
        let distance = HashMap::from([("u_near".to_string(), 1)]);

        let ranked = scorer.rank(["u_lost", "u_near"], &[1.0, 0.0], &distance);
        assert_eq!(ranked[0].id.as_str(), "u_near");
        // Sentinel penalty dominates everything else.
        assert!(ranked[1].score < -100.0);
    }

    #[test]
    fn non_unit_candidates_are_skipped_silently() {
        let index = index_with(vec![unit("u_only", Some(vec![1.0, 0.0]))]);
        let config = ScoreConfig::default();
        let scorer = NodeScorer::new(&index, &config);
        let distance = HashMap::new();

        let ranked = scorer.rank(["fig_1", "sec_a", "u_only"], &[1.0, 0.0], &distance);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id.as_str(), "u_only");
    }

    #[test]
    fn ties_keep_candidate_order() {
        let index = index_with(vec![
            unit("u_b", Some(vec![1.0, 0.0])),
            unit("u_a", Some(vec![1.0, 0.0])),
        ]);
        let config = ScoreConfig::default();
        let scorer = NodeScorer::new(&index, &config);
        let distance = HashMap::from([("u_a".to_string(), 1), ("u_b".to_string(), 1)]);

        let ranked = scorer.rank(["u_b", "u_a"], &[1.0, 0.0], &distance);
        assert_eq!(ranked[0].id.as_str(), "u_b");
        assert_eq!(ranked[1].id.as_str(), "u_a");
    }

    #[test]
    fn top_k_truncates() {
        let units: Vec<TextUnit> = (0..5)
            .map(|i| unit(&format!("u_{i}"), Some(vec![1.0, 0.0])))
            .collect();
        let index = index_with(units);
        let config = ScoreConfig {
            top_k: 2,
            ..Default::default()
        };
        let scorer = NodeScorer::new(&index, &config);

        let ids: Vec<String> = (0..5).map(|i| format!("u_{i}")).collect();
        let ranked = scorer.rank(
            ids.iter().map(String::as_str),
            &[1.0, 0.0],
            &HashMap::new(),
        );
        assert_eq!(ranked.len(), 2);
    }
}
