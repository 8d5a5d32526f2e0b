use axum::Router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use blookup::synset::{KbResult, KnowledgeBase, LookupService};

pub mod config;
pub mod error;
pub mod routes;

pub use config::ApiConfig;
pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(knowledge_base: Arc<dyn KnowledgeBase>, request_timeout: Duration) -> Self {
        Self {
            lookup: LookupService::new(knowledge_base),
            request_timeout,
        }
    }

    /// Run one upstream lookup under the configured request budget
    pub(crate) async fn with_timeout<T>(
        &self,
        call: impl Future<Output = KbResult<T>>,
    ) -> Result<T, ApiError> {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(_) => Err(ApiError::Timeout),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::text::text_lookup,
        crate::routes::text::text_lookup_pos,
        crate::routes::text::text_lookup_exact,
        crate::routes::wordnet::wordnet_lookup,
        crate::routes::wikipedia::wikipedia_lookup,
        crate::routes::synset::synset_type,
        crate::routes::synset::related,
        crate::routes::synset::senses,
        crate::routes::synset::senses_in_language,
        crate::routes::synset::dbpedia_uris,
        crate::routes::synset::dbpedia_uris_in_language,
        crate::routes::synset::wordnet_refs,
    ),
    components(
        schemas(crate::routes::health::HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "text", description = "Term lookup endpoints"),
        (name = "wordnet", description = "External dictionary cross-reference endpoints"),
        (name = "wikipedia", description = "Encyclopedia title lookup endpoints"),
        (name = "synset", description = "Synset node endpoints")
    )
)]
pub struct ApiDoc;

/// Build API application; the Swagger UI is only mounted when asked for
pub fn build_app(state: AppState, enable_swagger: bool) -> Router {
    let mut router = Router::new().merge(routes::routes());
    if enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
