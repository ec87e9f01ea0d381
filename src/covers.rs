//! Background cover image fetching.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::action::Action;

/// Cover fetch errors.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("cover URL is empty")]
    EmptyUrl,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Downloads cover images over HTTP.
#[derive(Debug, Clone)]
pub struct CoverFetcher {
    client: Client,
}

impl CoverFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, CoverError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the raw bytes behind a cover URL.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoverError> {
        if url.trim().is_empty() {
            return Err(CoverError::EmptyUrl);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoverError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch a cover on the runtime and report the outcome as an action.
    ///
    /// The UI loop never waits on this; the result arrives whenever the
    /// request finishes.
    pub fn spawn(&self, id: u32, url: String, action_tx: mpsc::UnboundedSender<Action>) {
        let fetcher = self.clone();
        tokio::spawn(async move {
            let action = match fetcher.fetch(&url).await {
                Ok(bytes) => Action::CoverLoaded(id, bytes),
                Err(e) => {
                    tracing::warn!("Failed to load cover for playlist {}: {}", id, e);
                    Action::CoverFailed(id, e.to_string())
                }
            };
            // The receiver is gone once the app has quit.
            let _ = action_tx.send(action);
        });
    }
}
