use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use blookup::synset::UniversalPos;
use tracing::debug;

use super::id_lines;
use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/wikipedia/{title}/{pos}", get(wikipedia_lookup))
}

/// Synsets linked to an encyclopedia title, with a term-query fallback
#[utoipa::path(
    get,
    path = "/wikipedia/{title}/{pos}",
    params(
        ("title" = String, Path, description = "Encyclopedia article title, e.g. Paris"),
        ("pos" = String, Path, description = "POS tag (NOUN/VERB/ADJ/ADV) or letter (n/v/a/r)")
    ),
    responses(
        (status = 200, description = "Synset ids, one per line", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid POS tag"),
        (status = 404, description = "No synset for the title")
    ),
    tag = "wikipedia"
)]
pub async fn wikipedia_lookup(
    State(state): State<AppState>,
    Path((title, pos)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let pos = UniversalPos::parse(&pos)?;
    debug!(%title, %pos, "wikipedia title lookup");

    let synsets = state
        .with_timeout(state.lookup.by_wikipedia(&title, pos))
        .await?;
    id_lines(synsets, format!("no synsets for title '{}'", title))
}
