use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::datastore_types::{DataStoreTable, QuestionAndAnswer, StatusCode};
use super::internal::data_types::{
    AddQuestionRequest, AddQuestionResponse, CheckAnswerRequest, CheckAnswerResponse,
};
use super::internal::{DataStoreNetwork, DS_GET_PATH, DS_INSERT_PATH};
use super::trivia_config::TriviaConfig;
use super::trivia_error::{Result, TriviaError};

/// Storage seam used by the HTTP layer. `DataStore` is the only implementation
/// shipped here; tests and embedders can supply their own.
#[async_trait] // when implementing this trait, use the #[async_trait] macro
pub trait QuestionStore: Send + Sync {
    async fn insert(&self, question_id: &str, table: &DataStoreTable) -> Result<()>;

    /// Returns the server timestamp and the stored question.
    async fn get(&self, question_id: &str) -> Result<(String, QuestionAndAnswer)>;
}

/// Client for the remote datastore service.
///
/// Construction probes the service's status endpoint until it reports
/// `Running` or the configured attempts run out. Running out is not an error:
/// the client is still handed back and individual calls fail on their own.
pub struct DataStore {
    config: Arc<TriviaConfig>,
    network: DataStoreNetwork,
    server_status: StatusCode,
}

impl DataStore {
    pub async fn new(config: Arc<TriviaConfig>) -> Result<Self> {
        info!("Creating DataStore object");

        let network = DataStoreNetwork::new(config.clone())?;
        let mut data_store = DataStore {
            config,
            network,
            server_status: StatusCode::NotStarted,
        };
        data_store.wait_for_server().await;

        Ok(data_store)
    }

    /// Loads the config snapshot with `TriviaConfig::load` and connects.
    /// Fails with `Unavailable` when no usable snapshot can be loaded.
    pub async fn from_env() -> Result<Self> {
        let config = TriviaConfig::load().map_err(|e| {
            warn!(error = %e, "error getting config data");
            TriviaError::unavailable(e.to_string())
        })?;

        Self::new(Arc::new(require_datastore_host(config)?)).await
    }

    /// Last status observed while probing during construction.
    pub fn status(&self) -> StatusCode {
        self.server_status
    }

    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }

    pub async fn insert(&self, question_id: &str, table: &DataStoreTable) -> Result<()> {
        let request = AddQuestionRequest::new(question_id, table);
        let response: AddQuestionResponse = self.network.post(DS_INSERT_PATH, &request).await?;

        // Only the round trip matters; a zero-record insert still counts as done.
        debug!(
            question_id,
            action = %response.action,
            records_affected = %response.records_affected,
            "insert completed"
        );
        Ok(())
    }

    pub async fn get(&self, question_id: &str) -> Result<(String, QuestionAndAnswer)> {
        let request = CheckAnswerRequest::new(question_id);
        let response: CheckAnswerResponse = self.network.post(DS_GET_PATH, &request).await?;

        Ok(response.into_parts())
    }

    async fn wait_for_server(&mut self) {
        let mut attempts_left = self.config.status_attempts;

        while attempts_left > 0 {
            self.server_status = self.network.send_status_request().await;
            if self.server_status.is_running() {
                info!("Datastore server is running");
                return;
            }

            attempts_left -= 1;
            if attempts_left > 0 {
                info!(status = %self.server_status, attempts_left, "waiting for Datastore server...");
                sleep(self.config.status_delay()).await;
            }
        }

        warn!(status = %self.server_status, "Datastore server never reported running");
    }
}

#[async_trait]
impl QuestionStore for DataStore {
    async fn insert(&self, question_id: &str, table: &DataStoreTable) -> Result<()> {
        DataStore::insert(self, question_id, table).await
    }

    async fn get(&self, question_id: &str) -> Result<(String, QuestionAndAnswer)> {
        DataStore::get(self, question_id).await
    }
}

fn require_datastore_host(config: TriviaConfig) -> Result<TriviaConfig> {
    if config.datastore_name.is_empty() {
        warn!("error getting config data: datastore host is not configured");
        return Err(TriviaError::unavailable("datastore host is not configured"));
    }
    Ok(config)
}
