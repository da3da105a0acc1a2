//! # zex-api
//!
//! ZenMoney HTTP client for zenexport.
//!
//! One operation matters to the pipeline: [`ZenMoneyClient::full_sync`],
//! which performs a diff request with `serverTimestamp = 0` and returns the
//! complete [`Snapshot`]. There is no incremental variant here — every run
//! replaces the destination, so every fetch is a full one.

mod error;
mod http;

pub use error::ApiError;

use chrono::Utc;
use serde::Serialize;
use zex_core::Snapshot;

use crate::http::check_response;

/// Diff request body. A `server_timestamp` of zero asks the API for
/// everything the account has ever recorded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DiffRequest {
    current_client_timestamp: i64,
    server_timestamp: i64,
}

/// HTTP client for the ZenMoney v8 API.
///
/// Deliberately built without a request timeout: a sync can carry years of
/// transactions, and the scheduler owns the decision to wait it out.
pub struct ZenMoneyClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ZenMoneyClient {
    /// Create a new client for the given token and API base URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("zenexport/0.1")
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Perform a full synchronization and return the complete snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure, [`ApiError::Api`]
    /// when the API answers with a non-success status, and
    /// [`ApiError::Decode`] when the response body is not a valid diff
    /// response.
    pub async fn full_sync(&self) -> Result<Snapshot, ApiError> {
        let url = format!("{}/v8/diff/", self.base_url);
        let body = DiffRequest {
            current_client_timestamp: Utc::now().timestamp(),
            server_timestamp: 0,
        };

        tracing::debug!(%url, "requesting full diff");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let text = resp.text().await?;
        let snapshot: Snapshot = serde_json::from_str(&text)?;
        tracing::debug!(
            records = snapshot.record_count(),
            server_timestamp = snapshot.server_timestamp,
            "full diff received"
        );
        Ok(snapshot)
    }
}
