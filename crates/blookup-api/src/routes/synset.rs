use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use blookup::synset::{DbpediaUri, Language, Sense, SynsetId, WordNetOffset};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/synset/{id}/type", get(synset_type))
        .route("/synset/{id}/related", get(related))
        .route("/synset/{id}/senses", get(senses))
        .route("/synset/{id}/senses/{lang}", get(senses_in_language))
        .route("/synset/{id}/dbpedia_uri", get(dbpedia_uris))
        .route("/synset/{id}/dbpedia_uri/{lang}", get(dbpedia_uris_in_language))
        .route("/synset/{id}/wn", get(wordnet_refs))
}

fn non_empty_lines<T>(
    records: Vec<T>,
    line: impl Fn(&T) -> String,
    what: impl Into<String>,
) -> Result<String, ApiError> {
    if records.is_empty() {
        return Err(ApiError::NotFound(what.into()));
    }
    let mut body = String::new();
    for record in &records {
        body.push_str(&line(record));
        body.push('\n');
    }
    Ok(body)
}

fn sense_line(sense: &Sense) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        sense.full_lemma, sense.pos, sense.language, sense.source
    )
}

/// Category of a synset node
#[utoipa::path(
    get,
    path = "/synset/{id}/type",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n")
    ),
    responses(
        (status = 200, description = "Synset category (CONCEPT, NAMED_ENTITY or UNKNOWN)", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown synset id")
    ),
    tag = "synset"
)]
pub async fn synset_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    debug!(%id, "synset type");

    let synset_type = state.with_timeout(state.lookup.synset_type(&id)).await?;
    Ok(synset_type.to_string())
}

/// Outgoing relations of a synset
#[utoipa::path(
    get,
    path = "/synset/{id}/related",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n")
    ),
    responses(
        (status = 200, description = "Tab-separated relation symbol and target id, one per line", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown synset id or no outgoing relations")
    ),
    tag = "synset"
)]
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    debug!(%id, "outgoing relations");

    let relations = state.with_timeout(state.lookup.relations(&id)).await?;
    non_empty_lines(
        relations,
        |rel| format!("{}\t{}", rel.symbol, rel.target),
        format!("synset '{}' has no outgoing relations", id),
    )
}

/// All lexicalizations of a synset
#[utoipa::path(
    get,
    path = "/synset/{id}/senses",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n")
    ),
    responses(
        (status = 200, description = "Tab-separated lemma, POS, language and source, one per line", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown synset id or no senses")
    ),
    tag = "synset"
)]
pub async fn senses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    debug!(%id, "senses");

    let senses = state.with_timeout(state.lookup.senses(&id, None)).await?;
    non_empty_lines(
        senses,
        sense_line,
        format!("synset '{}' has no senses", id),
    )
}

/// Lexicalizations of a synset in one language
#[utoipa::path(
    get,
    path = "/synset/{id}/senses/{lang}",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n"),
        ("lang" = String, Path, description = "Language code, e.g. en")
    ),
    responses(
        (status = 200, description = "Tab-separated lemma, POS, language and source, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid language code"),
        (status = 404, description = "Unknown synset id or no senses in the language")
    ),
    tag = "synset"
)]
pub async fn senses_in_language(
    State(state): State<AppState>,
    Path((id, lang)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    let language = Language::parse(&lang)?;
    debug!(%id, %language, "senses");

    let senses = state
        .with_timeout(state.lookup.senses(&id, Some(language)))
        .await?;
    non_empty_lines(
        senses,
        sense_line,
        format!("synset '{}' has no senses in {}", id, language),
    )
}

/// All linked-data URIs of a synset
#[utoipa::path(
    get,
    path = "/synset/{id}/dbpedia_uri",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n")
    ),
    responses(
        (status = 200, description = "Linked-data URIs, one per line", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown synset id or no linked-data URIs")
    ),
    tag = "synset"
)]
pub async fn dbpedia_uris(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    debug!(%id, "dbpedia uris");

    let uris = state
        .with_timeout(state.lookup.dbpedia_uris(&id, None))
        .await?;
    non_empty_lines(
        uris,
        |u: &DbpediaUri| u.uri.clone(),
        format!("synset '{}' has no linked-data URIs", id),
    )
}

/// Linked-data URIs of a synset in one language
#[utoipa::path(
    get,
    path = "/synset/{id}/dbpedia_uri/{lang}",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n"),
        ("lang" = String, Path, description = "Language code, e.g. en")
    ),
    responses(
        (status = 200, description = "Linked-data URIs, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid language code"),
        (status = 404, description = "Unknown synset id or no linked-data URIs in the language")
    ),
    tag = "synset"
)]
pub async fn dbpedia_uris_in_language(
    State(state): State<AppState>,
    Path((id, lang)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    let language = Language::parse(&lang)?;
    debug!(%id, %language, "dbpedia uris");

    let uris = state
        .with_timeout(state.lookup.dbpedia_uris(&id, Some(language)))
        .await?;
    non_empty_lines(
        uris,
        |u: &DbpediaUri| u.uri.clone(),
        format!("synset '{}' has no linked-data URIs in {}", id, language),
    )
}

/// External dictionary cross-references of a synset
#[utoipa::path(
    get,
    path = "/synset/{id}/wn",
    params(
        ("id" = String, Path, description = "Synset id, e.g. bn:00008364n")
    ),
    responses(
        (status = 200, description = "External dictionary offsets, one per line", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown synset id or no cross-references")
    ),
    tag = "synset"
)]
pub async fn wordnet_refs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let id = SynsetId::from_string(id);
    debug!(%id, "wordnet cross-references");

    let offsets = state
        .with_timeout(state.lookup.wordnet_offsets(&id))
        .await?;
    non_empty_lines(
        offsets,
        |offset: &WordNetOffset| offset.to_string(),
        format!("synset '{}' has no external dictionary cross-references", id),
    )
}
