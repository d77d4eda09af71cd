//! Rate-limited outbound HTTP transport
//!
//! All upstream traffic of the process goes through one [`RequestPacer`],
//! which keeps the completion time of the previous request and makes the
//! next caller wait until `min_interval` has elapsed since then. It is a
//! gate, not a queue: two callers arriving together both wait out the
//! same remainder and may then race on send order.
//!
//! There are no retries here. One failed attempt is one failure.

use crate::core::config::Config;
use crate::core::error::{EntscheidsucheError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Process-wide minimum-interval gate
///
/// Lifecycle: created once at startup with no previous request,
/// read before every send, updated after every completed send.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_completed: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_completed: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time still to wait before the next request may go out
    pub async fn remaining(&self) -> Duration {
        let last = *self.last_completed.lock().await;
        match last {
            Some(at) => self.min_interval.saturating_sub(at.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Suspend until the minimum interval since the last completion has passed
    pub async fn wait_turn(&self) {
        let wait = self.remaining().await;
        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "Pacing upstream request");
            tokio::time::sleep(wait).await;
        }
    }

    /// Record that a request has just completed (successfully or not)
    pub async fn mark_completed(&self) {
        *self.last_completed.lock().await = Some(Instant::now());
    }
}

/// Raw upstream answer with a 2xx status
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| EntscheidsucheError::UnparseableResponse {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }
}

/// Outbound HTTP seam, mockable in tests
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a URL; non-2xx is an error
    async fn get(&self, url: &str) -> Result<UpstreamResponse>;

    /// POST a JSON body; non-2xx is an error
    async fn post_json(&self, url: &str, body: &Value) -> Result<UpstreamResponse>;
}

/// reqwest-backed transport sharing one [`RequestPacer`]
pub struct HttpTransport {
    http: reqwest::Client,
    pacer: Arc<RequestPacer>,
}

impl HttpTransport {
    pub fn new(config: &Config, pacer: Arc<RequestPacer>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream.timeout())
            .user_agent(config.upstream.user_agent.clone())
            .build()
            .map_err(|e| EntscheidsucheError::ConfigError(format!("HTTP client: {e}")))?;

        Ok(Self { http, pacer })
    }

    pub fn pacer(&self) -> &Arc<RequestPacer> {
        &self.pacer
    }

    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> Result<UpstreamResponse> {
        self.pacer.wait_turn().await;
        let outcome = Self::execute(url, request).await;
        self.pacer.mark_completed().await;
        outcome
    }

    async fn execute(url: &str, request: reqwest::RequestBuilder) -> Result<UpstreamResponse> {
        let response = request.send().await.map_err(|e| {
            warn!(url, error = %e, "Upstream request failed");
            EntscheidsucheError::UpstreamUnreachable {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Upstream returned error status");
            return Err(EntscheidsucheError::UpstreamHttp {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| EntscheidsucheError::UpstreamUnreachable {
                url: url.to_string(),
                message: format!("reading body: {e}"),
            })?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "Upstream response");

        Ok(UpstreamResponse {
            url: url.to_string(),
            status: status.as_u16(),
            content_type,
            body: body.to_vec(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<UpstreamResponse> {
        debug!(url, "GET");
        self.send(url, self.http.get(url)).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<UpstreamResponse> {
        debug!(url, body = %body, "POST");
        self.send(url, self.http.post(url).json(body)).await
    }
}
