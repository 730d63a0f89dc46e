use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

const RELEASE_PATH: &str = "/api/sessions/current/release";
const STATUS_PATH: &str = "/api/sessions/current";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Releases the current hosted compute session.
///
/// Narrow seam over the runtime control capability: one method, no
/// arguments, fallible. Callers invoke it at most once and never retry.
/// [`crate::testing::MockRelease`] substitutes for it in tests.
#[async_trait]
pub trait SessionRelease: Send + Sync {
    async fn release(&self) -> Result<()>;
}

/// Talks to the hosted runtime's control endpoint over HTTP.
pub struct HttpRelease {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRelease {
    /// Creates a client for the control endpoint at `base_url`, sending
    /// `token` as a bearer credential when present.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Fetches the current session assignment.
    ///
    /// A 404 from the endpoint means nothing is assigned and maps to `None`
    /// rather than an error.
    pub async fn status(&self) -> Result<Option<SessionStatus>> {
        let url = format!("{}{STATUS_PATH}", self.base_url);
        let response = self.with_auth(self.client.get(&url)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = check(response).await?;
        Ok(Some(response.json().await?))
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl SessionRelease for HttpRelease {
    async fn release(&self) -> Result<()> {
        let url = format!("{}{RELEASE_PATH}", self.base_url);
        debug!(target = "nbcut.release", %url, "releasing compute session");

        let response = self.with_auth(self.client.post(&url)).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Endpoint {
        status: status.as_u16(),
        body,
    })
}

/// Session assignment as reported by the control endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,
    #[serde(default)]
    pub kernel: Option<String>,
    #[serde(default)]
    pub connected_seconds: Option<u64>,
    #[serde(default)]
    pub idle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let release = HttpRelease::new("http://127.0.0.1:8899///", None).unwrap();
        assert_eq!(release.base_url, "http://127.0.0.1:8899");
    }

    #[test]
    fn status_payload_tolerates_missing_fields() {
        let status: SessionStatus =
            serde_json::from_str(r#"{"session_id":"s-1"}"#).unwrap();
        assert_eq!(status.session_id, "s-1");
        assert_eq!(status.kernel, None);
        assert_eq!(status.connected_seconds, None);
        assert!(!status.idle);
    }
}
