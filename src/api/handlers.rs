use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::aggregator::Aggregator;
use crate::data_models::{AggregatedResult, SearchRequest};

use super::page::render_index;

pub async fn index_handler(State(aggregator): State<Arc<Aggregator>>) -> Html<String> {
    Html(render_index(aggregator.endpoints()))
}

pub async fn fetch_api_data_handler(
    State(aggregator): State<Arc<Aggregator>>,
    form: Result<Form<SearchRequest>, FormRejection>,
) -> Json<AggregatedResult> {
    let start = Instant::now();

    // no usable form means no terms; every endpoint still gets queried
    let request = form.map(|Form(r)| r).unwrap_or_else(|e| {
        log::debug!("no search terms in form body: {}", e.body_text());
        SearchRequest::default()
    });

    let data = aggregator.fetch_all(&request).await;

    let failed = data.iter().filter(|(_, r)| r.is_err()).count();
    log::info!(
        "aggregated {} endpoints ({} failed) in {}ms",
        data.len(),
        failed,
        start.elapsed().as_millis()
    );

    Json(data)
}
