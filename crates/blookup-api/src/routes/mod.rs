use crate::error::ApiError;
use crate::AppState;
use axum::Router;
use blookup::synset::Synset;

pub mod health;
pub mod synset;
pub mod text;
pub mod wikipedia;
pub mod wordnet;

/// Merge all routes.
///
/// Each path shape maps to exactly one handler; overlapping `/synset/...`
/// shapes are disambiguated by their static segments, so a later route can
/// never re-consume a path already matched by an earlier one.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(text::routes())
        .merge(wordnet::routes())
        .merge(wikipedia::routes())
        .merge(synset::routes())
}

/// Render one synset id per line; an empty result is a 404, never a
/// fallthrough to another route.
pub(crate) fn id_lines(synsets: Vec<Synset>, what: impl Into<String>) -> Result<String, ApiError> {
    if synsets.is_empty() {
        return Err(ApiError::NotFound(what.into()));
    }
    let mut body = String::new();
    for synset in &synsets {
        body.push_str(synset.id.as_str());
        body.push('\n');
    }
    Ok(body)
}
