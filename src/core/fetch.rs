use crate::core::client::StorefrontClient;
use crate::utils::error::{Result, StorefrontError};
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle of a single outbound request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Pending,
    Resolved(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, FetchState::Resolved(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Resolved(value) => Some(value),
            _ => None,
        }
    }
}

/// A single-shot fetch. Spawning issues exactly one request against the
/// given endpoint path; the state can be observed at any time without
/// triggering another request. Dropping the handle aborts an in-flight
/// request.
pub struct Fetch<T> {
    rx: watch::Receiver<FetchState<T>>,
    handle: JoinHandle<()>,
}

impl<T> Fetch<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn spawn(client: StorefrontClient, path: impl Into<String>) -> Self {
        let path = path.into();
        let (tx, rx) = watch::channel(FetchState::Idle);

        let handle = tokio::spawn(async move {
            // Receivers may have gone away; send failures are fine.
            let _ = tx.send(FetchState::Pending);
            match client.get_json::<T>(&path).await {
                Ok(value) => {
                    let _ = tx.send(FetchState::Resolved(value));
                }
                Err(e) => {
                    tracing::warn!("Fetch of {} failed: {}", path, e);
                    let _ = tx.send(FetchState::Failed(e.to_string()));
                }
            }
        });

        Self { rx, handle }
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> FetchState<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the request to finish, returning the decoded payload or
    /// the failure it ended in.
    pub async fn try_resolved(&mut self) -> Result<T> {
        loop {
            let snapshot = self.rx.borrow_and_update().clone();
            match snapshot {
                FetchState::Resolved(value) => return Ok(value),
                FetchState::Failed(message) => {
                    return Err(StorefrontError::ProcessingError { message })
                }
                FetchState::Idle | FetchState::Pending => {}
            }

            if self.rx.changed().await.is_err() {
                return Err(StorefrontError::ProcessingError {
                    message: "fetch task exited without a result".to_string(),
                });
            }
        }
    }
}

impl<T> Drop for Fetch<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
