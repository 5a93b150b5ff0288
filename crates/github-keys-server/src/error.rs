use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Errores del handler de keys. Todas las respuestas de error van sin body.
#[derive(Debug)]
pub enum AppError {
    /// Metodo distinto de GET
    MethodNotAllowed,

    /// Error interno (no hay keys para servir)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => {
                let mut response = StatusCode::METHOD_NOT_ALLOWED.into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("GET"));
                response
            },
            AppError::Internal(msg) => {
                tracing::debug!(error = %msg, "Responding with internal error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        }
    }
}
