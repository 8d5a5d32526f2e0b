use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use blookup::synset::{
    DbpediaUri, InMemoryKnowledgeBase, Language, Relation, Sense, SenseSource, Synset, SynsetId,
    SynsetType, UniversalPos, WordNetOffset,
};
use blookup_api::{AppState, build_app};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

fn sense(lemma: &str, pos: UniversalPos, language: Language, source: SenseSource) -> Sense {
    Sense {
        full_lemma: lemma.to_string(),
        pos,
        language,
        source,
    }
}

/// Fixture nodes: "bank" as noun and verb, "Paris" with a Wikipedia-sourced
/// sense, and "The_Hague" for normalized matching.
fn fixture_synsets() -> Vec<Synset> {
    vec![
        Synset {
            id: SynsetId::from_string("bn:00008364n"),
            synset_type: SynsetType::Concept,
            senses: vec![
                sense("bank", UniversalPos::Noun, Language::En, SenseSource::WordNet),
                sense("Bank", UniversalPos::Noun, Language::De, SenseSource::WordNet),
            ],
            relations: vec![Relation {
                symbol: "@".to_string(),
                target: SynsetId::from_string("bn:00034537n"),
            }],
            wordnet_offsets: vec![WordNetOffset::from_string("wn:08420278n")],
            dbpedia_uris: vec![DbpediaUri {
                uri: "http://dbpedia.org/resource/Bank".to_string(),
                language: Language::En,
            }],
        },
        Synset {
            id: SynsetId::from_string("bn:00008365v"),
            synset_type: SynsetType::Concept,
            senses: vec![sense(
                "bank",
                UniversalPos::Verb,
                Language::En,
                SenseSource::WordNet,
            )],
            relations: vec![],
            wordnet_offsets: vec![],
            dbpedia_uris: vec![],
        },
        Synset {
            id: SynsetId::from_string("bn:00015556n"),
            synset_type: SynsetType::NamedEntity,
            senses: vec![
                sense("Paris", UniversalPos::Noun, Language::En, SenseSource::Wiki),
                sense("Paris", UniversalPos::Noun, Language::Fr, SenseSource::WordNet),
            ],
            relations: vec![],
            wordnet_offsets: vec![WordNetOffset::from_string("wn:08765623n")],
            dbpedia_uris: vec![DbpediaUri {
                uri: "http://dbpedia.org/resource/Paris".to_string(),
                language: Language::En,
            }],
        },
        Synset {
            id: SynsetId::from_string("bn:00042055n"),
            synset_type: SynsetType::NamedEntity,
            senses: vec![sense(
                "The_Hague",
                UniversalPos::Noun,
                Language::En,
                SenseSource::Wiki,
            )],
            relations: vec![],
            wordnet_offsets: vec![],
            dbpedia_uris: vec![],
        },
    ]
}

/// Create a test application with an in-memory knowledge base
fn create_test_app() -> axum::Router {
    let kb = InMemoryKnowledgeBase::new();
    for synset in fixture_synsets() {
        kb.insert(synset).unwrap();
    }
    let state = AppState::new(Arc::new(kb), Duration::from_secs(1));
    build_app(state, false)
}

/// Helper function to make plain-text requests
async fn get_text(app: &mut axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_text_lookup_without_pos_is_union_over_pos() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/text/en/bank").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body.lines().collect();
    assert_eq!(ids, vec!["bn:00008364n", "bn:00008365v"]);
}

#[tokio::test]
async fn test_text_lookup_with_pos_constrains_results() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/text/en/bank/NOUN").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008364n\n");

    // One-letter WordNet code works too
    let (status, body) = get_text(&mut app, "/text/en/bank/v").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008365v\n");
}

#[tokio::test]
async fn test_text_lookup_language_codes_are_case_insensitive() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/text/DE/Bank").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008364n\n");
}

#[tokio::test]
async fn test_text_lookup_falls_back_to_normalized_matching() {
    let mut app = create_test_app();

    // Exact spelling misses, the normalized variant finds the node
    let (status, body) = get_text(&mut app, "/text/en/The_hague").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00042055n\n");
}

#[tokio::test]
async fn test_text_lookup_invalid_language_is_bad_request() {
    let mut app = create_test_app();

    let (status, _) = get_text(&mut app, "/text/xx/bank").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_text_lookup_invalid_pos_is_bad_request() {
    let mut app = create_test_app();

    let (status, _) = get_text(&mut app, "/text/en/bank/Z").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_text_lookup_unknown_term_is_not_found() {
    let mut app = create_test_app();

    let (status, _) = get_text(&mut app, "/text/en/zzzzz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_textnr_matches_exact_spelling_only() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/textnr/en/n/bank").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008364n\n");

    // No normalized fallback on the non-redirecting variant
    let (status, _) = get_text(&mut app, "/textnr/en/n/BANK").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wordnet_offset_lookup() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/wordnet/wn:08420278n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008364n\n");

    let (status, _) = get_text(&mut app, "/wordnet/wn:99999999n").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wikipedia_title_lookup() {
    let mut app = create_test_app();

    let (status, body) = get_text(&mut app, "/wikipedia/Paris/n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00015556n\n");
}

#[tokio::test]
async fn test_wikipedia_falls_back_to_term_query() {
    let mut app = create_test_app();

    // "bank" has no Wikipedia-sourced sense; the English term query
    // takes over.
    let (status, body) = get_text(&mut app, "/wikipedia/bank/n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "bn:00008364n\n");
}

#[tokio::test]
async fn test_wikipedia_invalid_pos_is_bad_request_not_a_crash() {
    let mut app = create_test_app();

    let (status, _) = get_text(&mut app, "/wikipedia/Paris/Z").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unmatched_path_is_not_found() {
    let mut app = create_test_app();

    let (status, _) = get_text(&mut app, "/nope/en/bank").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
