// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HTTP routes for storing and fetching messages.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tiercel::{Error, MessageCache};
use tiercel_store::error::EMPTY_ENTRY;

#[derive(Debug, Deserialize)]
struct PutRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct PutResponse {
    digest: String,
}

#[derive(Debug, Serialize)]
struct GetResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Failures a handler reports to the client.
#[derive(Debug)]
enum ApiError {
    MalformedBody,
    MissingDigest,
    MessageNotFound,
    Store(Error),
    MethodNotAllowed,
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::MalformedBody => (StatusCode::BAD_REQUEST, "malformed request body"),
            Self::MissingDigest => (StatusCode::BAD_REQUEST, "`digest` request variable is required"),
            Self::MessageNotFound => (StatusCode::NOT_FOUND, "message not found"),
            Self::Store(e) if e.is_validation() => (StatusCode::BAD_REQUEST, EMPTY_ENTRY),
            Self::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server error storing digest"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            Self::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Builds the router serving `/messages`.
///
/// Request bodies are not size-limited; messages may be arbitrarily large.
pub(crate) fn router(cache: MessageCache) -> Router {
    Router::new()
        .route("/messages", get(missing_digest).post(put_message))
        .route("/messages/", get(missing_digest))
        .route("/messages/{digest}", get(get_message))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(cache)
}

async fn put_message(State(cache): State<MessageCache>, body: Bytes) -> Result<Json<PutResponse>, ApiError> {
    let request: PutRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed request body");
        ApiError::MalformedBody
    })?;

    match cache.put(&request.message).await {
        Ok(digest) => Ok(Json(PutResponse {
            digest: digest.into_string(),
        })),
        Err(e) => {
            if !e.is_validation() {
                tracing::error!(error = %e, message = %request.message, "failed to store message");
            }
            Err(ApiError::Store(e))
        }
    }
}

async fn get_message(State(cache): State<MessageCache>, Path(digest): Path<String>) -> Result<Json<GetResponse>, ApiError> {
    cache
        .get(&digest)
        .await
        .map(|message| Json(GetResponse { message }))
        .ok_or(ApiError::MessageNotFound)
}

async fn missing_digest() -> ApiError {
    ApiError::MissingDigest
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
