//! Typed client for the inventory REST API
//!
//! One reqwest client, one versioned contract. The bearer token and base URL
//! are injected from [`crate::config::ApiConfig`]; every request carries the
//! token and the configured timeout. List endpoints may answer with either a
//! bare JSON array or `{"results": [...]}` — both are accepted, anything
//! else is a contract violation.

mod batches;
mod damage;
mod items;
mod reference;
mod stock;
mod transactions;

pub use damage::DamageEntryRequest;
pub use items::{CheckItemBatchesResponse, CheckItemResponse};
pub use stock::{
    AddStockRequest, AdjustStockRequest, BatchIntake, CreateOrRestockRequest,
    ReceiveWithBatchesRequest, ReceiveWithBatchesResponse,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// Inventory API client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from injected configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport {
                url: config.base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.get_with_query::<T>(path, &[]).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Transport {
                url: url.clone(),
                source: e,
            })?;
        decode(url, response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Transport {
                url: url.clone(),
                source: e,
            })?;
        decode(url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: String, response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| AppError::Transport {
        url: url.clone(),
        source: e,
    })?;

    if !status.is_success() {
        let message = extract_error_message(status.as_u16(), &body);
        tracing::error!(%url, status = status.as_u16(), %message, "api error");
        return Err(AppError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| AppError::Contract {
        url,
        detail: e.to_string(),
    })
}

/// Pull the server's `error` field out of a failure body, falling back to a
/// generic message when the body is not JSON or lacks the field.
pub fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("request failed with status {}", status))
}

/// List endpoints answer with either shape; both deserialize here
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { results } => results,
            ListEnvelope::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_accepts_both_shapes() {
        let bare: ListEnvelope<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2, 3]);

        let wrapped: ListEnvelope<i64> = serde_json::from_str(r#"{"results": [4, 5]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec![4, 5]);
    }

    #[test]
    fn envelope_rejects_other_shapes() {
        assert!(serde_json::from_str::<ListEnvelope<i64>>(r#"{"data": [1]}"#).is_err());
        assert!(serde_json::from_str::<ListEnvelope<i64>>("42").is_err());
    }

    #[test]
    fn error_field_is_preferred() {
        assert_eq!(
            extract_error_message(400, r#"{"error": "item already exists"}"#),
            "item already exists"
        );
        assert_eq!(
            extract_error_message(500, "<html>oops</html>"),
            "request failed with status 500"
        );
        assert_eq!(
            extract_error_message(404, r#"{"detail": "nope"}"#),
            "request failed with status 404"
        );
    }
}
