use axum::{
    Router,
    response::Response,
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::aggregator::Aggregator;
use crate::error::generic_error_response;

pub mod handlers;
pub mod page;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

pub fn create_router(aggregator: Arc<Aggregator>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/fetch_api_data", post(handlers::fetch_api_data_handler))
        .with_state(aggregator)
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("request handler panicked: {detail}");
    generic_error_response()
}
