use std::sync::Arc;

use http::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::trivia::datastore_types::StatusCode;
use crate::trivia::trivia_config::TriviaConfig;
use crate::trivia::trivia_error::{Result, TriviaError};

use super::data_types::StatusResponse;

pub const DS_STATUS_PATH: &str = "/api/v1/ds/status";
pub const DS_INSERT_PATH: &str = "/api/v1/ds/insert";
pub const DS_GET_PATH: &str = "/api/v1/ds/get";

pub struct DataStoreNetwork {
    client: Client,
    config: Arc<TriviaConfig>,
}

impl DataStoreNetwork {
    pub fn new(config: Arc<TriviaConfig>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| TriviaError::unavailable(format!("failed to build http client: {}", e)))?;

        Ok(DataStoreNetwork { client, config })
    }

    pub fn url_for(&self, path: &str) -> String {
        resolve_url(&self.config, path)
    }

    /// Probes the status endpoint. Never fails: a request that does not
    /// complete reports `RequestError`, an unreadable body reports the empty
    /// status.
    pub async fn send_status_request(&self) -> StatusCode {
        let url = self.url_for(DS_STATUS_PATH);
        debug!(%url, "sending status request");

        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!(%url, error = %e, "status request failed");
                return StatusCode::RequestError;
            }
        };

        read_or_empty::<StatusResponse>(res).await.status
    }

    /// Encodes `body` as JSON and POSTs it to `path`. Only encoding and
    /// transport failures are errors; the response body is decoded leniently.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned + Default,
    {
        let request_body = serde_json::to_vec(body).map_err(|e| {
            warn!(error = %e, "marshaling error");
            TriviaError::Serialization(e)
        })?;

        let url = self.url_for(path);
        debug!(%url, "posting datastore request");

        let res = self.client.post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(request_body)
            .send().await
            .map_err(TriviaError::Transport)?;

        Ok(read_or_empty(res).await)
    }
}

/// Production talks to the bare host; everything else appends the datastore port.
pub fn resolve_url(config: &TriviaConfig, path: &str) -> String {
    if config.is_production() {
        format!("{}{}", config.datastore_name, path)
    } else {
        format!("{}:{}{}", config.datastore_name, config.datastore_port, path)
    }
}

async fn read_or_empty<T: DeserializeOwned + Default>(res: Response) -> T {
    match res.bytes().await {
        Ok(body) => decode_or_empty(&body),
        Err(e) => {
            warn!(error = %e, "failed to read datastore response body");
            T::default()
        }
    }
}

pub fn decode_or_empty<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice(body) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(error = %e, "failed to decode datastore response, using empty response");
            T::default()
        }
    }
}
