use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use blookup::synset::WordNetOffset;
use tracing::debug;

use super::id_lines;
use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/wordnet/{offset}", get(wordnet_lookup))
}

/// Synsets cross-referenced from an external dictionary offset
#[utoipa::path(
    get,
    path = "/wordnet/{offset}",
    params(
        ("offset" = String, Path, description = "External dictionary offset, e.g. wn:08420278n")
    ),
    responses(
        (status = 200, description = "Synset ids, one per line", body = String, content_type = "text/plain"),
        (status = 404, description = "No synset cross-referenced from the offset")
    ),
    tag = "wordnet"
)]
pub async fn wordnet_lookup(
    State(state): State<AppState>,
    Path(offset): Path<String>,
) -> Result<String, ApiError> {
    let offset = WordNetOffset::from_string(offset);
    debug!(%offset, "wordnet offset lookup");

    let synsets = state
        .with_timeout(state.lookup.by_wordnet_offset(&offset))
        .await?;
    id_lines(synsets, format!("no synsets for offset '{}'", offset))
}
