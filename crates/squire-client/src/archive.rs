use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use tracing::debug;

use squire_core::{Result, SquireError};

/// Durable storage for the session journal. The journal is written whole
/// under a fixed resource path on every export; the remote side keeps the
/// latest copy.
#[async_trait]
pub trait HistoryArchive: Send + Sync {
    /// Store the journal blob. An error means the durable copy lags; the
    /// local journal is untouched.
    async fn store(&self, snapshot: &[u8]) -> Result<()>;
}

/// reqwest-backed archive client: a bearer-guarded PUT of
/// `{message, content: base64(blob), branch}` to a fixed URL.
pub struct HttpArchive {
    http: reqwest::Client,
    url: String,
    token: String,
    branch: String,
    commit_message: String,
}

impl HttpArchive {
    pub fn new(
        url: &str,
        token: &str,
        branch: &str,
        commit_message: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SquireError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            url: url.to_string(),
            token: token.to_string(),
            branch: branch.to_string(),
            commit_message: commit_message.to_string(),
        })
    }
}

#[async_trait]
impl HistoryArchive for HttpArchive {
    async fn store(&self, snapshot: &[u8]) -> Result<()> {
        let body = json!({
            "message": self.commit_message,
            "content": BASE64.encode(snapshot),
            "branch": self.branch,
        });

        let response = self
            .http
            .put(&self.url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SquireError::ArchiveUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the response body — it is logged verbatim upstream.
            let body = response.text().await.unwrap_or_default();
            return Err(SquireError::ArchiveRejected {
                status: status.as_u16(),
                body,
            });
        }
        debug!(bytes = snapshot.len(), "journal blob stored");
        Ok(())
    }
}
