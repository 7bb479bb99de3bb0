use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Credentials;
use crate::data_models::FetchResult;
use crate::endpoints::{Arguments, Endpoint};
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl Fetcher {
    pub fn new(client: Client, base_url: impl Into<String>, credentials: Credentials) -> Fetcher {
        Fetcher {
            client,
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn url_for(&self, endpoint: &Endpoint, args: &Arguments) -> String {
        format!("{}{}", self.base_url, endpoint.resolve(args))
    }

    /// Fetch one endpoint. Every failure comes back as a `FetchError` value.
    pub async fn fetch(&self, endpoint: &Endpoint, args: &Arguments) -> FetchResult {
        let url = self.url_for(endpoint, args);
        log::debug!("fetching {}: {url}", endpoint.name);

        let result = self.get_json(&url).await;
        if let Err(e) = &result {
            log::error!("Error fetching {}: {}", endpoint.name, e);
        }
        result
    }

    async fn get_json(&self, url: &str) -> FetchResult {
        let res = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await?;
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value = res.json::<Value>().await?;
        Ok(value)
    }
}
