use std::sync::Arc;

use chrono::Local;
use http::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::internal::helpers::format_timestamp;
use super::trivia_config::TriviaConfig;
use super::trivia_error::{Result, TriviaError};

pub const RAPID_API_HOST_KEY: &str = "X-RapidAPI-Host";
pub const RAPID_API_KEY: &str = "X-RapidAPI-Key";
pub const TRIVIA_API_HOST_VALUE: &str = "trivia-by-api-ninjas.p.rapidapi.com";

const DEFAULT_LIMIT: &str = "5";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TriviaRecord {
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Fetches questions from the third-party trivia API. One GET per call, no retry.
pub struct TriviaApi {
    client: Client,
    config: Arc<TriviaConfig>,
}

impl TriviaApi {
    pub fn new(config: Arc<TriviaConfig>) -> Self {
        TriviaApi { client: Client::new(), config }
    }

    /// Returns the time the response arrived and the decoded questions.
    /// An empty `category` is left off the query; an empty `limit` means 5.
    pub async fn fetch(&self, category: &str, limit: &str) -> Result<(String, Vec<TriviaRecord>)> {
        let mut query = Vec::with_capacity(2);
        if !category.is_empty() {
            query.push(("category", category));
        }
        query.push(("limit", if limit.is_empty() { DEFAULT_LIMIT } else { limit }));

        let request = self.client.get(&self.config.trivia_url)
            .query(&query)
            .headers(self.headers()?)
            .build()
            .map_err(|e| TriviaError::RequestBuild(e.to_string()))?;
        debug!(url = %request.url(), "sending trivia request");

        let response = self.client.execute(request).await.map_err(TriviaError::Transport)?;

        let timestamp = format_timestamp(&Local::now());

        let body = response.bytes().await.map_err(TriviaError::BodyRead)?;
        let records: Vec<TriviaRecord> = serde_json::from_slice(&body).map_err(TriviaError::Decode)?;

        Ok((timestamp, records))
    }

    fn headers(&self) -> Result<HeaderMap> {
        let api_key = HeaderValue::from_str(&self.config.trivia_api_key)
            .map_err(|e| TriviaError::RequestBuild(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(RAPID_API_HOST_KEY, HeaderValue::from_static(TRIVIA_API_HOST_VALUE));
        headers.insert(RAPID_API_KEY, api_key);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_host_and_key() {
        let config = TriviaConfig { trivia_api_key: "secret".to_string(), ..TriviaConfig::default() };
        let headers = TriviaApi::new(Arc::new(config)).headers().unwrap();

        assert_eq!(headers.get(RAPID_API_HOST_KEY).unwrap(), TRIVIA_API_HOST_VALUE);
        assert_eq!(headers.get(RAPID_API_KEY).unwrap(), "secret");
    }

    #[test]
    fn rejects_unencodable_api_key() {
        let config = TriviaConfig { trivia_api_key: "bad\nkey".to_string(), ..TriviaConfig::default() };
        let err = TriviaApi::new(Arc::new(config)).headers().unwrap_err();
        assert!(matches!(err, TriviaError::RequestBuild(_)));
    }
}
