//! Key endpoint handler.

use axum::{
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Handler for every path.
///
/// Only GET is served; the request body is never read.
#[instrument(skip_all, fields(method = %method))]
pub async fn serve_keys(State(state): State<AppState>, method: Method) -> Result<Response, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let snapshot = state
        .cache()
        .get_current()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if snapshot.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        snapshot.render(),
    )
        .into_response())
}
