mod common;

use essay_retrieval::knowledge::{ComponentValue, KnowledgeStore, LoadError};

use common::{essay, sample_store, single, technology_essay, write_corpus, SAMPLE_CORPUS_JSON};

#[test]
fn load_wrapped_document() {
    let file = write_corpus(SAMPLE_CORPUS_JSON);
    let store = KnowledgeStore::load(file.path()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.essays()[0].id, "tech-education");
    assert_eq!(store.essays()[1].id, "essay-1");
    assert_eq!(store.essays()[1].band_score, 6.0);
}

#[test]
fn load_bare_array_document() {
    let file = write_corpus(
        r#"[{"topic": "Cities", "quality_score": 7, "components": {"claim": "Cities grow"}}]"#,
    );
    let store = KnowledgeStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.essays()[0].band_score, 7.0);
}

#[test]
fn load_bundled_corpus() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/ielts_knowledge_graph.json");
    let store = KnowledgeStore::load(path).unwrap();
    assert_eq!(store.len(), 4);
    assert!(store.has_component_type("qualifier"));
}

#[test]
fn load_missing_file_fails() {
    let err = KnowledgeStore::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn load_malformed_document_fails() {
    let file = write_corpus("{ \"essays\": [ ");
    let err = KnowledgeStore::load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn load_missing_required_field_fails() {
    let file = write_corpus(
        r#"{"essays": [
            {"topic": "A", "band_score": 7, "components": {}},
            {"topic": "B", "components": {"claim": "x"}}
        ]}"#,
    );
    let err = KnowledgeStore::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingField {
            index: 1,
            field: "band_score"
        }
    ));
}

#[test]
fn load_missing_components_fails() {
    let file = write_corpus(r#"[{"topic": "A", "band_score": 7}]"#);
    let err = KnowledgeStore::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingField {
            index: 0,
            field: "components"
        }
    ));
}

#[test]
fn load_score_above_band_scale_fails() {
    let file = write_corpus(
        r#"[
            {"topic": "Cities", "band_score": 8, "components": {"claim": "Cities grow"}},
            {"topic": "Tech", "band_score": 12, "components": {"claim": "Tech helps"}}
        ]"#,
    );
    let err = KnowledgeStore::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidField {
            index: 1,
            field: "band_score",
            ..
        }
    ));
}

#[test]
fn find_by_text_scoped_to_list_component() {
    let store = sample_store();

    let hits = store.find_by_text("data", Some("data"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "tech-education");

    assert!(store.find_by_text("data", Some("claim")).is_empty());
}

#[test]
fn find_by_text_scoped_to_scalar_component() {
    let store = sample_store();
    let hits = store.find_by_text("INTERRUPTIONS", Some("data"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "remote-work");
}

#[test]
fn find_by_text_across_components_in_corpus_order() {
    let store = sample_store();

    let hits = store.find_by_text("the", None);
    let ids: Vec<_> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["tech-education", "city-traffic", "global-tourism"]);

    let once = store.find_by_text("students", None);
    assert_eq!(once.len(), 1);
}

#[test]
fn find_by_text_empty_query_matches_every_essay_with_text() {
    let mut essays = common::sample_essays();
    essays.push(essay("bare", "Nothing", 9.0, vec![("data", ComponentValue::Many(vec![]))]));
    let store = KnowledgeStore::from_essays(essays);

    assert_eq!(store.find_by_text("", None).len(), 4);
}

#[test]
fn find_by_text_unknown_component_is_empty() {
    let store = sample_store();
    assert!(store.find_by_text("technology", Some("thesis")).is_empty());
}

#[test]
fn find_structure_by_topic_requires_high_score() {
    let store = KnowledgeStore::from_essays(vec![technology_essay(7.5)]);
    let structure = store.find_structure_by_topic("Technology").unwrap();
    assert_eq!(structure.topic, "Technology in Education");
    assert_eq!(structure.band_score, 7.5);
    assert!(structure.components.contains_key("claim"));

    let low = KnowledgeStore::from_essays(vec![technology_essay(6.0)]);
    assert!(low.find_structure_by_topic("Technology").is_none());
}

#[test]
fn find_structure_by_topic_takes_first_in_corpus_order() {
    let store = KnowledgeStore::from_essays(vec![
        essay("first", "Education policy", 7.0, vec![("claim", single("a"))]),
        essay("second", "Education funding", 9.0, vec![("claim", single("b"))]),
    ]);
    let structure = store.find_structure_by_topic("EDUCATION").unwrap();
    assert_eq!(structure.topic, "Education policy");
}

#[test]
fn find_exemplars_filters_by_score_and_keeps_order() {
    let store = sample_store();
    let exemplars = store.find_exemplars("claim");

    let topics: Vec<_> = exemplars.iter().map(|x| x.topic.as_str()).collect();
    assert_eq!(
        topics,
        vec![
            "Technology in Education",
            "The Impact of Global Tourism",
            "Remote Work and Productivity"
        ]
    );
    assert!(exemplars.iter().all(|x| x.band_score >= 7.0));
    assert_eq!(
        exemplars[0].example,
        single("Technology has transformed how students learn.")
    );

    let json = serde_json::to_value(&exemplars[0]).unwrap();
    assert!(json.get("example").is_some());
    assert!(json.get("topic").is_some());
    assert!(json.get("band_score").is_some());
}

#[test]
fn find_exemplars_skips_essays_without_component() {
    let store = sample_store();
    let exemplars = store.find_exemplars("rebuttal");
    assert_eq!(exemplars.len(), 1);
    assert_eq!(exemplars[0].topic, "The Impact of Global Tourism");
}

#[test]
fn find_exemplars_empty_when_nothing_qualifies() {
    let store = KnowledgeStore::from_essays(vec![technology_essay(5.5)]);
    assert!(store.find_exemplars("claim").is_empty());
    assert!(sample_store().find_exemplars("qualifier").is_empty());
}
