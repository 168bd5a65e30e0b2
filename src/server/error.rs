use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::YfError;

/// Cache policy for every response except upstream failures.
pub const PUBLIC_CACHE_CONTROL: &str = "public, max-age=86400";
/// Cache policy for upstream failures.
pub const NO_CACHE_CONTROL: &str = "private, no-cache, must-revalidate";

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

/// `{"message": ..}` JSON body with the given status and `Cache-Control`.
pub(crate) fn message(status: StatusCode, cache: &'static str, message: &'static str) -> Response {
    (status, [(header::CACHE_CONTROL, cache)], Json(Message { message })).into_response()
}

/// Errors a handler can return. Upstream details are never sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input")]
    InvalidInput,

    #[error("not found")]
    NotFound,

    #[error("upstream failure: {0}")]
    Upstream(#[from] YfError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInput => {
                message(StatusCode::BAD_REQUEST, PUBLIC_CACHE_CONTROL, "Invalid Input")
            }
            Self::NotFound => message(StatusCode::NOT_FOUND, PUBLIC_CACHE_CONTROL, "Not Found"),
            Self::Upstream(_) => {
                message(StatusCode::INTERNAL_SERVER_ERROR, NO_CACHE_CONTROL, "Try again")
            }
        }
    }
}
