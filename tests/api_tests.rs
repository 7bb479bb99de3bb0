use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use markscout::aggregator::Aggregator;
use markscout::api::create_router;
use markscout::config::Credentials;
use markscout::endpoints::ENDPOINTS;
use markscout::fetcher::Fetcher;

mod test_helpers {
    use super::*;

    pub fn create_app(base_url: String) -> Router {
        let credentials = Credentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        let fetcher = Fetcher::new(Client::new(), base_url, credentials);
        create_router(Arc::new(Aggregator::with_fetcher(fetcher)))
    }

    pub fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/fetch_api_data")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    pub async fn body_json(body: Body) -> Result<Value> {
        let bytes = to_bytes(body, usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_index_lists_endpoints() -> Result<()> {
    let app = create_app("http://127.0.0.1:1".to_string());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let html = String::from_utf8(bytes.to_vec())?;
    for endpoint in &ENDPOINTS {
        assert!(html.contains(endpoint.name), "missing {}", endpoint.name);
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_api_data_end_to_end() -> Result<()> {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/trademarks/serialnumber/77777777",
        json!({"count": 1, "trademarks": [{"serialnumber": "77777777"}]}),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/trademarks/trademark//status/all/start/0",
        json!({"search": "trademark"}),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/trademarks/description//status/all/start/0",
        json!({"search": "description"}),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/trademarks/owner//start/0",
        json!({"search": "owner"}),
    )
    .await;
    mount_json(
        &server,
        "/api/v2/trademarks/expiring/6%20months/start/0",
        json!({"search": "expiring"}),
    )
    .await;

    let app = create_app(format!("{}/api/v2/trademarks", server.uri()));
    let response = app
        .oneshot(form_request("Serial+Number+Search=77777777"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await?;
    assert_eq!(
        body,
        json!({
            "Serial Number Search": {"count": 1, "trademarks": [{"serialnumber": "77777777"}]},
            "Trademark Search": {"search": "trademark"},
            "Description Search": {"search": "description"},
            "Owner Search": {"search": "owner"},
            "Expiration Search": {"search": "expiring"},
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_fetch_api_data_reports_upstream_errors_inline() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let app = create_app(format!("{}/api/v2/trademarks", server.uri()));
    let response = app.oneshot(form_request("Owner+Search=acme")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await?;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for endpoint in &ENDPOINTS {
        assert_eq!(
            object[endpoint.name],
            json!({"error": "API Error: 401 - Unauthorized"})
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_response_keeps_table_order() -> Result<()> {
    let app = create_app("http://127.0.0.1:1".to_string());
    let response = app.oneshot(form_request("")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let text = String::from_utf8(bytes.to_vec())?;
    let positions: Vec<usize> = ENDPOINTS
        .iter()
        .map(|e| text.find(&format!("\"{}\"", e.name)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    Ok(())
}

#[tokio::test]
async fn test_non_form_body_is_treated_as_empty_search() -> Result<()> {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/v2/trademarks/owner//start/0",
        json!({"search": "owner"}),
    )
    .await;

    let app = create_app(format!("{}/api/v2/trademarks", server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch_api_data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"Owner Search": "acme"}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    // the JSON term is ignored, so owner search runs with an empty term
    let body = body_json(response.into_body()).await?;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert_eq!(object["Owner Search"], json!({"search": "owner"}));
    Ok(())
}

#[tokio::test]
async fn test_empty_body_without_content_type_queries_all_endpoints() -> Result<()> {
    let app = create_app("http://127.0.0.1:1".to_string());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch_api_data")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await?;
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for endpoint in &ENDPOINTS {
        let message = object[endpoint.name]["error"].as_str().unwrap();
        assert!(message.starts_with("Client Error: "), "{message}");
    }
    Ok(())
}

#[tokio::test]
async fn test_static_script_is_served() -> Result<()> {
    let app = create_app("http://127.0.0.1:1".to_string());

    let response = app
        .oneshot(Request::builder().uri("/static/app.js").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let script = String::from_utf8(bytes.to_vec())?;
    assert!(script.contains("search-form"));
    Ok(())
}
