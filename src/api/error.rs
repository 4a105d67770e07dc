use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use crate::clients::ClientError;
use crate::search::SearchError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Upstream(#[from] ClientError),

    /// A creator search failed; carries the term it was run for.
    #[error("{source}")]
    Search {
        search: String,
        #[source]
        source: SearchError,
    },
}

impl ApiError {
    pub fn search(search: &str, source: SearchError) -> Self {
        ApiError::Search {
            search: search.to_string(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Search { source: SearchError::Superseded(_), .. } => StatusCode::CONFLICT,
            ApiError::Search { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = match &self {
            ApiError::Search { search, source } => json!({
                "error": source.to_string(),
                "search": search,
            }),
            _ => json!({
                "error": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

// Implement From<ValidationError> for ApiError
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidEthereumAddress(address) => ApiError::InvalidAddress(address),
            ValidationError::MissingParameter(param) =>
                ApiError::BadRequest(format!("Missing parameter: {}", param)),
            ValidationError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
        }
    }
}
