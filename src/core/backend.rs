//! RoleDoc Backend HTTP Client
//!
//! Handles communication with the question-answering backend: document
//! upload (`POST /upload`), question submission (`POST /query`), and a
//! liveness ping (`GET /`). Both POST endpoints take multipart forms.
//!
//! The backend reports application errors in the `/query` response body
//! rather than through HTTP status codes, so `query` parses the body
//! regardless of status and leaves the error/result split to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

// ============================================================================
// Errors
// ============================================================================

/// Errors from backend communication.
///
/// Every variant is a transport-class failure from the chat session's point
/// of view; backend-reported application errors arrive as a parsed
/// [`QueryResponse`] with its `error` field set, not as a `BackendError`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection, TLS, timeout, or other client-level failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upload endpoint answered with a non-success status.
    #[error("upload failed with status {0}")]
    UploadStatus(reqwest::StatusCode),

    /// Response body did not match the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Body(String),
}

// ============================================================================
// Response types
// ============================================================================

/// Reply shape of `POST /query`.
///
/// Exactly one of `result` / `error` is expected in practice, but the client
/// tolerates any combination and leaves interpretation to the session layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Reply shape of `POST /upload`. Informational only; the upload flow
/// relies on HTTP status alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub suggested_questions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    #[serde(default)]
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the RoleDoc backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Get the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a document as multipart field `file`.
    ///
    /// Success is decided by HTTP status alone; the body is parsed leniently
    /// for diagnostics (the backend includes suggested questions).
    #[instrument(skip(self, bytes))]
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<UploadResponse, BackendError> {
        let url = format!("{}/upload", self.base_url);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::warn!("Upload of '{}' rejected with status {}", file_name, status);
            return Err(BackendError::UploadStatus(status));
        }

        let body = match response.json::<UploadResponse>().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Upload response body not parseable ({e}); ignoring");
                UploadResponse::default()
            }
        };

        if let Some(questions) = &body.suggested_questions {
            log::debug!("Backend suggested {} question(s) for '{}'", questions.len(), file_name);
        }
        log::info!("Uploaded '{}' to {}", file_name, url);

        Ok(body)
    }

    /// Ask one question about a previously uploaded document.
    ///
    /// The body is parsed regardless of HTTP status; a body that fails to
    /// parse is reported as [`BackendError::Body`].
    #[instrument(skip(self))]
    pub async fn query(&self, query: &str, file_name: &str) -> Result<QueryResponse, BackendError> {
        let url = format!("{}/query", self.base_url);

        let form = reqwest::multipart::Form::new()
            .text("query", query.to_string())
            .text("file_name", file_name.to_string());

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        let raw = response.text().await?;

        match serde_json::from_str::<QueryResponse>(&raw) {
            Ok(parsed) => {
                log::debug!("Query answered with status {} for '{}'", status, file_name);
                Ok(parsed)
            }
            Err(e) => {
                log::warn!("Query response (status {}) not parseable: {}", status, e);
                Err(BackendError::Body(truncate_for_log(&raw)))
            }
        }
    }

    /// Liveness check against `GET /`.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<String, BackendError> {
        let url = format!("{}/", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: PingResponse = response.json().await?;
        Ok(body.message)
    }
}

fn truncate_for_log(raw: &str) -> String {
    const MAX: usize = 200;
    if raw.len() <= MAX {
        raw.to_string()
    } else {
        let cut = raw
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &raw[..cut])
    }
}

// ============================================================================
// Tests
// ============================================================================
