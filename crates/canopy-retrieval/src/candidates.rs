//! Section-candidate assembly: the boundary between ranked text units and
//! what downstream context assembly consumes.
//!
//! Ranked units are grouped by owning section, each section's full text is
//! reconstructed from all of its units in stable unit-id order, and the
//! section takes the maximum score among its ranked members. Candidates
//! sort by score descending with the section-id order as the stable
//! structural tie-break.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use canopy_core::ontology::{SectionId, UnitId, UnitKind};
use canopy_index::OntologyIndex;

/// One ranked text unit, as exposed to the orchestration layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedUnit {
    pub id: UnitId,
    pub section_id: Option<SectionId>,
    pub kind: UnitKind,
    pub text: String,
    pub score: f32,
}

/// A reconstructed section with its aggregate relevance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCandidate {
    pub section_id: SectionId,
    /// First line of the section's local text.
    pub title: String,
    /// Full section text: every unit of the section in unit-id order.
    pub text: String,
    /// Maximum score among the section's ranked units.
    pub score: f32,
    /// The ranked units that surfaced this section, in rank order.
    pub contributing_unit_ids: Vec<UnitId>,
}

/// Group ranked units into section candidates. Units with no owning
/// section stay in the ranked list but produce no candidate.
pub fn assemble(index: &OntologyIndex, ranked: &[RankedUnit]) -> Vec<SectionCandidate> {
    // BTreeMap: groups come out in section-id order, the stable tie-break.
    let mut by_section: BTreeMap<&SectionId, Vec<&RankedUnit>> = BTreeMap::new();
    for unit in ranked {
        if let Some(sid) = &unit.section_id {
            by_section.entry(sid).or_default().push(unit);
        }
    }

    let mut candidates: Vec<SectionCandidate> = by_section
        .into_iter()
        .filter_map(|(sid, members)| {
            let section = index.sections.get(sid)?;
            let title = section
                .local_text
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .to_string();

            // Full text from the index, not just the ranked members: the
            // candidate reconstructs the whole section. Unit-id order comes
            // from the index map.
            let text = index
                .units
                .values()
                .filter(|u| u.section.as_ref() == Some(sid))
                .map(|u| u.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string();

            let score = members
                .iter()
                .map(|m| m.score)
                .fold(f32::NEG_INFINITY, f32::max);

            Some(SectionCandidate {
                section_id: sid.clone(),
                title,
                text,
                score,
                contributing_unit_ids: members.iter().map(|m| m.id.clone()).collect(),
            })
        })
        .collect();

    // Stable sort over id-ordered input: score ties keep structural order.
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::ontology::{Section, TextUnit};

    fn index() -> OntologyIndex {
        let mut sec_a = Section::new("sec_a", 1);
        sec_a.local_text = "Alpha heading\nAlpha body".to_string();
        let mut sec_b = Section::new("sec_b", 1);
        sec_b.local_text = "Beta heading".to_string();

        let units = vec![
            TextUnit::new("u_1", UnitKind::Chunk, "Alpha heading").with_section("sec_a"),
            TextUnit::new("u_2", UnitKind::Chunk, "Alpha body").with_section("sec_a"),
            TextUnit::new("u_3", UnitKind::Chunk, "Beta heading").with_section("sec_b"),
            TextUnit::new("u_4", UnitKind::Chunk, "floating").with_section("sec_a"),
        ];

        OntologyIndex {
            sections: [sec_a, sec_b]
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            units: units.into_iter().map(|u| (u.id.clone(), u)).collect(),
            adjacency: BTreeMap::new(),
        }
    }

    fn ranked_unit(id: &str, section: Option<&str>, score: f32) -> RankedUnit {
        RankedUnit {
            id: id.into(),
            section_id: section.map(SectionId::from),
            kind: UnitKind::Chunk,
            text: String::new(),
            score,
        }
    }

    #[test]
    fn groups_by_section_and_takes_max_score() {
        let index = index();
        let ranked = vec![
            ranked_unit("u_2", Some("sec_a"), 0.9),
            ranked_unit("u_3", Some("sec_b"), 0.5),
            ranked_unit("u_1", Some("sec_a"), 0.3),
        ];
        let candidates = assemble(&index, &ranked);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].section_id.as_str(), "sec_a");
        assert_eq!(candidates[0].score, 0.9);
        assert_eq!(
            candidates[0].contributing_unit_ids,
            vec![UnitId::from("u_2"), UnitId::from("u_1")]
        );
    }

    #[test]
    fn full_text_reconstructs_all_units_in_id_order() {
        let index = index();
        let ranked = vec![ranked_unit("u_2", Some("sec_a"), 0.9)];
        let candidates = assemble(&index, &ranked);
        // u_1, u_2, u_4 all belong to sec_a even though only u_2 ranked.
        assert_eq!(candidates[0].text, "Alpha heading\nAlpha body\nfloating");
        assert_eq!(candidates[0].title, "Alpha heading");
    }

    #[test]
    fn sectionless_units_produce_no_candidate() {
        let index = index();
        let ranked = vec![ranked_unit("u_9", None, 1.0)];
        assert!(assemble(&index, &ranked).is_empty());
    }

    #[test]
    fn score_ties_break_by_section_id_order() {
        let index = index();
        let ranked = vec![
            ranked_unit("u_3", Some("sec_b"), 0.7),
            ranked_unit("u_1", Some("sec_a"), 0.7),
        ];
        let candidates = assemble(&index, &ranked);
        assert_eq!(candidates[0].section_id.as_str(), "sec_a");
        assert_eq!(candidates[1].section_id.as_str(), "sec_b");
    }

    #[test]
    fn unknown_section_reference_is_skipped() {
        let index = index();
        let ranked = vec![ranked_unit("u_1", Some("sec_ghost"), 1.0)];
        assert!(assemble(&index, &ranked).is_empty());
    }
}
