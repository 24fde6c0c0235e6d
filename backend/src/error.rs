//! Error handling for the Water Quality Advisor Platform
//!
//! Provides consistent JSON error responses across all handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    // External service errors
    #[error("Forecast service unavailable")]
    ForecastServiceUnavailable,

    #[error("Prediction service error: {0}")]
    PredictionServiceError(String),

    #[error("Text generation service error: {0}")]
    TextGenerationError(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
            AppError::ForecastServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "FORECAST_SERVICE_UNAVAILABLE".to_string(),
                    message: "Forecast service is temporarily unavailable".to_string(),
                },
            ),
            AppError::PredictionServiceError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "PREDICTION_SERVICE_ERROR".to_string(),
                    message: format!("Prediction service error: {}", msg),
                },
            ),
            AppError::TextGenerationError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "TEXT_GENERATION_ERROR".to_string(),
                    message: format!("Text generation service error: {}", msg),
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message: format!("External service error: {}", msg),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
