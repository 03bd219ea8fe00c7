// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client for a running `majuscule serve`.
//!
//! Posts a [`CompleteRequest`] batch to `<server>/complete` and decodes the
//! responses, so `majuscule complete --server <URL>` renders exactly what a
//! local run would.

use crate::error::ClientError;
use crate::service::{CompleteRequest, CompleteResponse};

/// Batch client bound to one server.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    /// `server` is a base URL such as `http://localhost:8080`; a trailing
    /// slash is ignored.
    pub fn new(server: &str) -> Self {
        Self::with_http_client(server, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies).
    pub fn with_http_client(server: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base: server.trim_end_matches('/').to_string(),
        }
    }

    pub fn complete_url(&self) -> String {
        format!("{}/complete", self.base)
    }

    /// `POST /complete` with `request`; one response per input.
    pub async fn complete(
        &self,
        request: &CompleteRequest,
    ) -> Result<Vec<CompleteResponse>, ClientError> {
        let url = self.complete_url();
        tracing::debug!(%url, inputs = request.inputs.len(), "posting batch");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { url, status, body });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Request { url, source })
    }
}
