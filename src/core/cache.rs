use crate::core::client::StorefrontClient;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Memo of successful GET payloads, keyed by endpoint path. Constructed
/// explicitly and shared via `Arc`; there is no global instance. No
/// expiry and no in-flight de-duplication.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached payload for `path`, fetching and storing it on
    /// a miss. Failures are not cached, so a later call retries.
    pub async fn get<T: DeserializeOwned>(
        &self,
        client: &StorefrontClient,
        path: &str,
    ) -> Result<T> {
        if let Some(value) = self.entries.lock().await.get(path).cloned() {
            tracing::debug!("Query cache hit for {}", path);
            return Ok(serde_json::from_value(value)?);
        }

        let value: serde_json::Value = client.get_json(path).await?;
        self.entries
            .lock()
            .await
            .insert(path.to_string(), value.clone());
        Ok(serde_json::from_value(value)?)
    }

    pub async fn invalidate(&self, path: &str) {
        self.entries.lock().await.remove(path);
    }
}
