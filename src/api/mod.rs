//! REST API for the lexical corpus.

pub mod error;
pub mod extract;
pub mod lexicon_routes;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::service::LexiconService;

pub use error::ErrorResponse;
pub use lexicon_routes::create_lexicon_router;

/// Lexicon routes with request tracing and permissive CORS.
///
/// Credentials are not allowed: browsers reject them together with a
/// wildcard origin.
pub fn build_app(service: LexiconService) -> Router {
    create_lexicon_router(service).layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    )
}
