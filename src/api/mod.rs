use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorDetail, Result};

pub mod bets;
pub mod events;

/// Typed client for the betting API. Every call carries the opaque bearer
/// token handed over by the embedding host shell; the client forwards it and
/// never inspects it. Boundary failures are surfaced verbatim and never
/// retried here.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
    // Single-in-flight guard for bet submission, shared across clones.
    submitting: Arc<AtomicBool>,
}

/// Error body shape of the API: `{"detail": ...}` where detail is a string
/// or a list of field errors.
#[derive(Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth_token: auth_token.into(),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| Error::boundary(e.to_string()))?;

        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.auth_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::boundary(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| Error::boundary(format!("malformed response body: {e}")));
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail.to_string(),
            Err(_) => format!("HTTP {status}"),
        };

        Err(match status {
            StatusCode::NOT_FOUND => Error::NotFound(detail),
            StatusCode::CONFLICT => Error::Conflict(detail),
            _ => Error::boundary(detail),
        })
    }

    pub(crate) fn submitting_flag(&self) -> &AtomicBool {
        &self.submitting
    }
}
