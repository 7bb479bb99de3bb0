use futures::future::join_all;
use reqwest::Client;

use crate::config::Config;
use crate::data_models::{AggregatedResult, SearchRequest};
use crate::endpoints::{ENDPOINTS, Endpoint};
use crate::fetcher::Fetcher;

/// Fans one search out to every configured endpoint and joins the results.
#[derive(Debug, Clone)]
pub struct Aggregator {
    fetcher: Fetcher,
    endpoints: &'static [Endpoint],
}

impl Aggregator {
    pub fn new(config: &Config) -> Aggregator {
        let fetcher = Fetcher::new(
            Client::new(),
            config.base_url.clone(),
            config.credentials.clone(),
        );
        Aggregator::with_fetcher(fetcher)
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Aggregator {
        Aggregator {
            fetcher,
            endpoints: &ENDPOINTS,
        }
    }

    pub fn endpoints(&self) -> &'static [Endpoint] {
        self.endpoints
    }

    /// Query all endpoints concurrently and wait for every one to settle.
    ///
    /// Failures are captured per endpoint, so the result always holds one
    /// entry per endpoint in table order.
    pub async fn fetch_all(&self, request: &SearchRequest) -> AggregatedResult {
        let tasks = self.endpoints.iter().map(|endpoint| {
            let args = endpoint.arguments(request.term_for(endpoint.name));
            async move { self.fetcher.fetch(endpoint, &args).await }
        });

        let results = join_all(tasks).await;
        log::info!("fetched {} endpoints", results.len());

        AggregatedResult::new(
            self.endpoints
                .iter()
                .map(|e| e.name)
                .zip(results)
                .collect(),
        )
    }
}
