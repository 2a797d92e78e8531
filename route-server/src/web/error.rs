//! HTTP error mapping.
//!
//! Each pipeline error kind gets its own status, code and message so the
//! page can tell "fix your input" apart from "try again later".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::pipeline::{Field, Provider, ProviderFailure, QueryError};

use super::dto::ErrorResponse;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be decoded
    BadRequest { message: String },

    /// The pipeline rejected or failed the query
    Query(QueryError),
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::Query(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            AppError::Query(e) => query_parts(e),
        }
    }
}

fn query_parts(e: &QueryError) -> (StatusCode, &'static str, String) {
    match e {
        QueryError::InvalidInput { field } => {
            let message = match field {
                Field::Both => "Please enter both source and destination.".to_string(),
                f => format!("Please enter a {f}."),
            };
            (StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
        }
        QueryError::NotFound { place } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("No coordinates found for {place}. Check the spelling or add a city."),
        ),
        QueryError::NoRoute => (
            StatusCode::NOT_FOUND,
            "NO_ROUTE",
            "No route found. Try another location.".to_string(),
        ),
        QueryError::ProviderError { provider, failure } => {
            let (status, message) = match failure {
                ProviderFailure::Unauthorized => (
                    StatusCode::BAD_GATEWAY,
                    format!("The {provider} service rejected our credentials. Check the API key."),
                ),
                ProviderFailure::RateLimited => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("The {provider} service is busy. Try again in a minute."),
                ),
                _ => (
                    StatusCode::BAD_GATEWAY,
                    format!("The {provider} service failed. Try again later."),
                ),
            };
            (status, "PROVIDER_ERROR", message)
        }
        QueryError::Timeout { provider } => (
            StatusCode::GATEWAY_TIMEOUT,
            "TIMEOUT",
            match provider {
                Provider::Geocoding => "Looking up the places took too long. Try again later.",
                Provider::Directions => "Finding routes took too long. Try again later.",
            }
            .to_string(),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            match &self {
                AppError::Query(e) => error!(%status, code, error = %e, "route query failed"),
                AppError::BadRequest { .. } => error!(%status, code, "request failed"),
            }
        } else {
            warn!(%status, code, %message, "route query rejected");
        }

        (status, Json(ErrorResponse { code, message })).into_response()
    }
}
