use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::{
    AppState,
    error::{ApiError, PUBLIC_CACHE_CONTROL, message},
};
use crate::report::{self, normalize_symbol};

/// `GET /`
pub(crate) async fn root() -> Response {
    message(StatusCode::OK, PUBLIC_CACHE_CONTROL, "hello!")
}

/// `GET /query/:symbol`
pub(crate) async fn query(
    State(state): State<AppState>,
    symbol: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Ok(Path(raw)) = symbol else {
        return Err(ApiError::InvalidInput);
    };
    let symbol = normalize_symbol(&raw).ok_or(ApiError::InvalidInput)?;

    let report = report::load_report(state.summaries.as_ref(), &symbol).await?;

    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, PUBLIC_CACHE_CONTROL)],
        Json(report),
    )
        .into_response())
}

/// `GET /query` and `GET /query/`: the symbol segment is missing.
pub(crate) async fn missing_symbol() -> ApiError {
    ApiError::InvalidInput
}

/// Unmatched paths and unsupported methods.
pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}
