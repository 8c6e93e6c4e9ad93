use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Service credits exhausted. Please try again later.")]
    QuotaExhausted,

    #[error("Failed to fetch AI response. Please try again.")]
    UpstreamFailure { status: u16, body: String },

    #[error("Failed to fetch AI response. Please try again.")]
    TransportFailure(String),

    #[error("No response from AI")]
    EmptyResponse,

    #[error("Failed to parse AI response. Please try again.")]
    ParseFailure { raw: String },

    #[error("AI response did not match the expected format: {0}")]
    SchemaViolation(String),

    // Detail (e.g. the missing variable name) is logged, never serialized.
    #[error("Service is not configured correctly")]
    ConfigurationError(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::QuotaExhausted => "QUOTA_EXHAUSTED",
            AppError::UpstreamFailure { .. } => "UPSTREAM_FAILURE",
            AppError::TransportFailure(_) => "TRANSPORT_FAILURE",
            AppError::EmptyResponse => "EMPTY_RESPONSE",
            AppError::ParseFailure { .. } => "PARSE_FAILURE",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) => log::debug!("request rejected: {}", msg),
            AppError::UpstreamFailure { status, body } => {
                log::error!("AI gateway error: {} {}", status, body)
            }
            AppError::TransportFailure(detail) => {
                log::error!("AI gateway unreachable: {}", detail)
            }
            AppError::ParseFailure { raw } => {
                log::error!("Failed to parse AI response: {}", raw)
            }
            AppError::SchemaViolation(detail) => {
                log::error!("AI response failed shape validation: {}", detail)
            }
            AppError::ConfigurationError(detail) => log::error!("configuration error: {}", detail),
            other => log::warn!("{}: {}", other.kind(), other),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            AppError::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TransportFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyResponse => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ParseFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let raw = match self {
            AppError::ParseFailure { raw } => Some(raw.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            raw,
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportFailure(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
