//! Router composition: probes at the root, resources under `/api/v1`, and the middleware stack.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes_with_ready;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
};

pub const API_PREFIX: &str = "/api/v1";

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    AppError::Internal("unexpected failure".into()).into_response()
}

/// Full application: every route plus tracing, panic recovery, a request body cap and CORS.
/// The body cap wraps CORS: `Cors` needs a `Default` inner response body.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, api_routes(state))
        .fallback(common::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::disable()),
        )
}
