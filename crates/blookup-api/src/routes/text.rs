use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use blookup::synset::{Language, UniversalPos};
use tracing::debug;

use super::id_lines;
use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/text/{lang}/{term}", get(text_lookup))
        .route("/text/{lang}/{term}/{pos}", get(text_lookup_pos))
        .route("/textnr/{lang}/{pos}/{term}", get(text_lookup_exact))
}

/// Term lookup over all parts of speech
#[utoipa::path(
    get,
    path = "/text/{lang}/{term}",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en"),
        ("term" = String, Path, description = "Term to look up")
    ),
    responses(
        (status = 200, description = "Synset ids, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid language code"),
        (status = 404, description = "No synset lexicalized by the term")
    ),
    tag = "text"
)]
pub async fn text_lookup(
    State(state): State<AppState>,
    Path((lang, term)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let language = Language::parse(&lang)?;
    debug!(%language, %term, "text lookup");

    let synsets = state
        .with_timeout(state.lookup.lookup_term(language, &term, None))
        .await?;
    id_lines(synsets, format!("no synsets for term '{}'", term))
}

/// Term lookup constrained to one part of speech
#[utoipa::path(
    get,
    path = "/text/{lang}/{term}/{pos}",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en"),
        ("term" = String, Path, description = "Term to look up"),
        ("pos" = String, Path, description = "POS tag (NOUN/VERB/ADJ/ADV) or letter (n/v/a/r)")
    ),
    responses(
        (status = 200, description = "Synset ids, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid language code or POS tag"),
        (status = 404, description = "No synset lexicalized by the term")
    ),
    tag = "text"
)]
pub async fn text_lookup_pos(
    State(state): State<AppState>,
    Path((lang, term, pos)): Path<(String, String, String)>,
) -> Result<String, ApiError> {
    let language = Language::parse(&lang)?;
    let pos = UniversalPos::parse(&pos)?;
    debug!(%language, %term, %pos, "text lookup");

    let synsets = state
        .with_timeout(state.lookup.lookup_term(language, &term, Some(pos)))
        .await?;
    id_lines(synsets, format!("no synsets for term '{}'", term))
}

/// Non-normalized term lookup; the exact spelling must match
#[utoipa::path(
    get,
    path = "/textnr/{lang}/{pos}/{term}",
    params(
        ("lang" = String, Path, description = "Language code, e.g. en"),
        ("pos" = String, Path, description = "POS tag (NOUN/VERB/ADJ/ADV) or letter (n/v/a/r)"),
        ("term" = String, Path, description = "Term to look up, exact spelling")
    ),
    responses(
        (status = 200, description = "Synset ids, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid language code or POS tag"),
        (status = 404, description = "No synset lexicalized by the term")
    ),
    tag = "text"
)]
pub async fn text_lookup_exact(
    State(state): State<AppState>,
    Path((lang, pos, term)): Path<(String, String, String)>,
) -> Result<String, ApiError> {
    let language = Language::parse(&lang)?;
    let pos = UniversalPos::parse(&pos)?;
    debug!(%language, %pos, %term, "non-normalized text lookup");

    let synsets = state
        .with_timeout(state.lookup.lookup_term_exact(language, pos, &term))
        .await?;
    id_lines(synsets, format!("no synsets for term '{}'", term))
}
