// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP front end.
//!
//! # Endpoints
//!
//! - `GET /complete?input=<s>&count=<n>&debug=true` - one [`CompleteResponse`]
//! - `POST /complete` with a [`CompleteRequest`] body - one response per input
//!
//! A non-numeric `count` is `400 {"error": "Invalid count"}`; a body that is
//! not a valid request is `400 {"error": "Invalid request"}`.
//!
//! The search is CPU-bound and capped (inputs of at most 60 characters, a
//! result ceiling), so handlers run it inline.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::service::{CompleteRequest, CompleteResponse, Suggester, DEFAULT_COUNT};

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// ERRORS
// =============================================================================

/// Client errors, rendered as `400 {"error": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    InvalidCount,
    InvalidRequest,
}

impl ApiError {
    fn message(self) -> &'static str {
        match self {
            Self::InvalidCount => "Invalid count",
            Self::InvalidRequest => "Invalid request",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Query string of `GET /complete`. Kept as raw strings so a bad count can be
/// reported as such instead of as a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CompleteQuery {
    #[serde(default)]
    pub input: String,
    pub count: Option<String>,
    pub debug: Option<String>,
}

pub async fn get_complete(
    State(suggester): State<Arc<Suggester>>,
    Query(query): Query<CompleteQuery>,
) -> Result<Json<CompleteResponse>, ApiError> {
    let count = match query.count.as_deref() {
        None => DEFAULT_COUNT,
        Some(raw) => raw.trim().parse().map_err(|_| ApiError::InvalidCount)?,
    };
    let debug = query.debug.as_deref() == Some("true");

    Ok(Json(suggester.complete(&query.input, count, debug)))
}

pub async fn post_complete(
    State(suggester): State<Arc<Suggester>>,
    payload: Result<Json<CompleteRequest>, JsonRejection>,
) -> Result<Json<Vec<CompleteResponse>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected request body");
        ApiError::InvalidRequest
    })?;

    Ok(Json(suggester.complete_all(&request)))
}

// =============================================================================
// SERVER
// =============================================================================

/// The application router.
pub fn router(suggester: Arc<Suggester>) -> Router {
    Router::new()
        .route("/complete", get(get_complete).post(post_complete))
        .with_state(suggester)
}

/// Serve on an already-bound listener until the process stops.
pub async fn serve_on(listener: TcpListener, suggester: Arc<Suggester>) -> std::io::Result<()> {
    axum::serve(listener, router(suggester)).await
}

/// Bind `addr` and serve.
pub async fn serve(addr: SocketAddr, suggester: Arc<Suggester>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "starting server");
    serve_on(listener, suggester).await
}
