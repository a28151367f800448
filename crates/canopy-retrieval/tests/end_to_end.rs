//! Full-pipeline tests over the install-manual fixture: build the index,
//! run queries through the engine, and check every output surface.

use canopy_core::config::RetrievalConfig;
use canopy_core::ontology::SectionId;
use canopy_embeddings::VectorCache;
use canopy_index::{IndexBuilder, OntologyIndex};
use canopy_retrieval::{QueryOutcome, RetrievalEngine};
use test_fixtures::{install_manual, install_manual_provider, INSTALL_CHUNK, INSTALL_QUERY};

fn built_index() -> OntologyIndex {
    let (sections, units, edges) = install_manual();
    let provider = install_manual_provider();
    let cache = VectorCache::default();
    IndexBuilder::new(&provider, &cache)
        .build(sections, units, edges)
        .unwrap()
}

#[test]
fn install_query_surfaces_the_setup_chunk() {
    let index = built_index();
    let provider = install_manual_provider();
    let engine = RetrievalEngine::new(&index, &provider, RetrievalConfig::default()).unwrap();

    let outcome = engine.run_query(INSTALL_QUERY).unwrap();

    assert_eq!(
        outcome.seed_section_ids,
        vec![SectionId::from("sec_install")]
    );

    // The seed, its chunk and caption, and the figure behind the caption.
    assert!(outcome.expanded_node_ids.contains(&"sec_install".to_string()));
    assert!(outcome.expanded_node_ids.contains(&"u_01_install".to_string()));
    assert!(outcome.expanded_node_ids.contains(&"u_02_caption".to_string()));
    assert!(outcome.expanded_node_ids.contains(&"fig_1".to_string()));
    // The unrelated FAQ chunk is not reachable from the seed.
    assert!(!outcome.expanded_node_ids.contains(&"u_03_weather".to_string()));

    // The setup chunk ranks first; the figure node was skipped silently.
    assert_eq!(outcome.ranked_units[0].id.as_str(), "u_01_install");
    assert_eq!(outcome.ranked_units[0].text, INSTALL_CHUNK);
    assert!(outcome.ranked_units.iter().all(|u| u.id.as_str() != "fig_1"));

    // One section candidate, reconstructed in unit-id order.
    assert_eq!(outcome.section_candidates.len(), 1);
    let candidate = &outcome.section_candidates[0];
    assert_eq!(candidate.section_id.as_str(), "sec_install");
    assert_eq!(candidate.score, outcome.ranked_units[0].score);
    assert!(candidate.text.starts_with(INSTALL_CHUNK));
    assert_eq!(candidate.contributing_unit_ids[0].as_str(), "u_01_install");
}

#[test]
fn recorded_edges_stay_inside_the_visited_set() {
    let index = built_index();
    let provider = install_manual_provider();
    let engine = RetrievalEngine::new(&index, &provider, RetrievalConfig::default()).unwrap();

    let outcome = engine.run_query(INSTALL_QUERY).unwrap();
    for edge in &outcome.expanded_edges {
        assert!(outcome.expanded_node_ids.contains(&edge.from));
        assert!(outcome.expanded_node_ids.contains(&edge.to));
    }
}

#[test]
fn unanswerable_query_returns_empty_outcome_not_error() {
    let index = built_index();
    let provider = install_manual_provider();
    let engine = RetrievalEngine::new(&index, &provider, RetrievalConfig::default()).unwrap();

    // Unscripted text embeds to the zero vector: nothing clears thresholds.
    let outcome = engine.run_query("completely unrelated request").unwrap();
    assert!(outcome.seed_section_ids.is_empty());
    assert!(outcome.expanded_node_ids.is_empty());
    assert!(outcome.ranked_units.is_empty());
    assert!(outcome.section_candidates.is_empty());
}

#[test]
fn invalid_config_fails_at_engine_construction() {
    let index = built_index();
    let provider = install_manual_provider();
    let mut config = RetrievalConfig::default();
    config.expand.max_nodes = 0;
    assert!(RetrievalEngine::new(&index, &provider, config).is_err());
}

#[test]
fn outcome_round_trips_through_json() {
    let index = built_index();
    let provider = install_manual_provider();
    let engine = RetrievalEngine::new(&index, &provider, RetrievalConfig::default()).unwrap();

    let outcome = engine.run_query(INSTALL_QUERY).unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    let back: QueryOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed_section_ids, outcome.seed_section_ids);
    assert_eq!(back.ranked_units.len(), outcome.ranked_units.len());
}

#[test]
fn concurrent_queries_share_one_index() {
    let index = built_index();
    let provider = install_manual_provider();
    let engine = RetrievalEngine::new(&index, &provider, RetrievalConfig::default()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let outcome = engine.run_query(INSTALL_QUERY).unwrap();
                assert_eq!(outcome.ranked_units[0].id.as_str(), "u_01_install");
            });
        }
    });
}
