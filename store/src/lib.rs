//! Hosted record store client for contact requests.
//!
//! # Protocol
//!
//! Records are written to a PostgREST-style table, the shape hosted Postgres
//! services such as Supabase expose:
//!
//! ```text
//! POST {url}/rest/v1/{table}
//! apikey: {anon_key}
//! Authorization: Bearer {anon_key}
//! Prefer: return=minimal
//!
//! {"name": "...", "field": "...", "phone": "...", "email": "..."}
//! ```
//!
//! # Error Handling
//!
//! A write is a single best-effort attempt. There is no retry and no queue; the
//! caller shows the outcome and the visitor resubmits by hand. Store-side
//! rejections carry the store's own message when the body contains one.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use folio_types::ContactSubmission;

/// Table used when the configuration does not name one.
pub const DEFAULT_TABLE: &str = "contact_requests";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 15;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;
const MAX_ERROR_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact store is not configured")]
    NotConfigured,
    #[error("invalid contact store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("could not reach the contact store: {0}")]
    Request(#[source] reqwest::Error),
    #[error("contact store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Where and how to write contact records.
#[derive(Clone)]
pub struct StoreConfig {
    url: Url,
    anon_key: String,
    table: String,
}

// Manual Debug impl to prevent leaking the project key in logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"[REDACTED]")
            .field("table", &self.table)
            .finish()
    }
}

impl StoreConfig {
    /// Validate store settings.
    ///
    /// Empty values and URLs still containing `placeholder` mean the project
    /// was never wired to a store, and yield [`StoreError::NotConfigured`].
    pub fn new(url: &str, anon_key: &str, table: &str) -> Result<Self, StoreError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() || anon_key.is_empty() || url.contains("placeholder") {
            return Err(StoreError::NotConfigured);
        }

        let mut url = Url::parse(url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let table = match table.trim() {
            "" => DEFAULT_TABLE,
            other => other,
        };

        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
            table: table.to_string(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn endpoint(&self) -> Result<Url, StoreError> {
        Ok(self.url.join(&format!("rest/v1/{}", self.table))?)
    }
}

fn base_client_builder() -> reqwest::ClientBuilder {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        "X-Client-Info",
        HeaderValue::from_static(concat!("folio/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .default_headers(default_headers)
}

/// Client bound to one configured table.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let endpoint = config.endpoint()?;
        let http = base_client_builder().build().map_err(StoreError::Client)?;
        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Insert one contact record.
    pub async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        tracing::info!(table = %self.config.table, "Submitting contact request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("apikey", self.config.anon_key.as_str())
            .bearer_auth(&self.config.anon_key)
            .header("Prefer", "return=minimal")
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%e, "Contact store unreachable");
                StoreError::Request(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Contact request stored");
            return Ok(());
        }

        let body = read_capped_error_body(response).await;
        let message = extract_error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string()
        });
        tracing::warn!(status = status.as_u16(), %message, "Contact store rejected request");
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

async fn read_capped_error_body(response: reqwest::Response) -> String {
    use futures_util::StreamExt;
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            break;
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Pull a human-readable message out of a store error body.
///
/// PostgREST uses `message` (plus `hint`/`details`); gateway errors use
/// `error.message` or `error_description`. Plain-text bodies are used as-is.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(payload) => payload
            .pointer("/message")
            .and_then(Value::as_str)
            .or_else(|| payload.pointer("/error/message").and_then(Value::as_str))
            .or_else(|| payload.pointer("/error_description").and_then(Value::as_str))
            .or_else(|| payload.pointer("/error").and_then(Value::as_str))
            .or_else(|| payload.pointer("/hint").and_then(Value::as_str))
            .map(ToString::to_string)?,
        Err(_) => trimmed.to_string(),
    };

    Some(truncate_message(&message))
}

fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut out: String = message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect();
    out.push('…');
    out
}
