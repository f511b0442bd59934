use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coinfolio_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => match e {
                CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                CoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                // Echo the upstream status where one exists; otherwise
                // this is a plain bad-gateway condition
                CoreError::UpstreamAuth { .. }
                | CoreError::UpstreamFetch { .. }
                | CoreError::Network(_) => e
                    .upstream_status()
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
            },
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
