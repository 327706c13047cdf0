//! HTTP transport
//!
//! Wraps `reqwest::Client` with the base URL, timeout, JSON headers, and
//! bearer-token injection from an attached [`SessionStore`]. Status-code
//! handling lives here and nowhere else: 401 clears the local session
//! before the error propagates, other failures are logged and mapped to
//! the typed error taxonomy. The backend surface is POST-only.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// HTTP transport for the LearnPortal API
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    http: reqwest::Client,
    store: Option<Arc<dyn SessionStore>>,
}

impl Transport {
    /// Create a transport from the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
            store: None,
        })
    }

    /// Attach a session store.
    ///
    /// Requests pick up the stored token as a bearer header, and a 401
    /// response clears the store.
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and decode the enveloped response.
    ///
    /// `default_msg` is the message surfaced when the backend fails
    /// without supplying one.
    pub async fn post<B, T>(&self, path: &str, body: &B, default_msg: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let mut builder = self.http.post(&url).json(body);
        if let Some(store) = &self.store {
            if let Some(session) = store.load() {
                builder = builder.bearer_auth(&session.token);
            }
        }

        let response = builder.send().await.map_err(|e| {
            error!(%url, error = %e, "Network error - no response received");
            Error::Http(e)
        })?;

        let status = response.status();
        if status.is_success() {
            let envelope: Envelope<T> = response.json().await?;
            return envelope.into_result(default_msg);
        }

        let body_text = response.text().await.unwrap_or_default();
        self.handle_failure_status(status);
        Err(Error::from_status(
            status,
            failure_message(&body_text, default_msg),
        ))
    }

    /// Centralized status-code handling, mirrored for every endpoint.
    fn handle_failure_status(&self, status: reqwest::StatusCode) {
        match status.as_u16() {
            401 => {
                warn!("Unauthorized - clearing local session");
                if let Some(store) = &self.store {
                    if let Err(e) = store.clear() {
                        warn!(error = %e, "Failed to clear session after 401");
                    }
                }
            }
            403 => error!("Access forbidden"),
            404 => error!("Resource not found"),
            500..=599 => error!(status = status.as_u16(), "Server error occurred"),
            code => error!(status = code, "HTTP error"),
        }
    }
}

/// Pull a human-readable message out of a failure body when the backend
/// still used the envelope shape; otherwise fall back.
fn failure_message(body: &str, default_msg: &str) -> String {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.errors.into_iter().find(|e| !e.is_empty()))
        .unwrap_or_else(|| default_msg.to_string())
}
