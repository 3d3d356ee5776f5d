use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use squire_core::{ActionRequest, Result, SquireError, Suggestion};

/// The remote action executor: receives dispatched actions and can be
/// polled for a suggested next action for a named task.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Dispatch an action. An error means the dispatch was not
    /// acknowledged; the caller treats it as a no-op.
    async fn dispatch(&self, request: &ActionRequest) -> Result<()>;

    /// Ask for a suggested next action. `Ok(None)` means the executor has
    /// nothing to suggest.
    async fn suggest(&self, task: &str) -> Result<Option<Suggestion>>;
}

/// reqwest-backed executor client with a bounded per-request timeout.
pub struct HttpExecutor {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpExecutor {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SquireError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            http,
            endpoint: format!("{}/next-action", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ActionExecutor for HttpExecutor {
    async fn dispatch(&self, request: &ActionRequest) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SquireError::ExecutorUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SquireError::DispatchRejected {
                status: status.as_u16(),
            });
        }
        debug!(action = %request.action, "dispatch acknowledged");
        Ok(())
    }

    async fn suggest(&self, task: &str) -> Result<Option<Suggestion>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("task", task)])
            .send()
            .await
            .map_err(|e| SquireError::ExecutorUnreachable(e.to_string()))?;

        // Anything but 200 means "no suggestion".
        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }
        let suggestion = response
            .json::<Suggestion>()
            .await
            .map_err(|e| SquireError::ExecutorUnreachable(e.to_string()))?;
        Ok(Some(suggestion))
    }
}
