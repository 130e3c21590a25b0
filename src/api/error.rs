//! HTTP mapping of [`CorpusError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::error::CorpusError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for CorpusError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if let CorpusError::Internal(ref e) = self {
            tracing::error!("corpus query failed: {:#}", e);
        }
        (
            status,
            Json(ErrorResponse {
                detail: self.client_message(),
            }),
        )
            .into_response()
    }
}
