use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Cannot {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// A handler could not produce its result. `message` is the client-facing
    /// summary; `source` is reported as details.
    #[error("{message}: {source}")]
    HandlerFailed {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    /// A failure with no dedicated response, such as an unreadable body or a
    /// handler panic. Rendered as the catch-all 500.
    #[error("Unhandled error: {0}")]
    Unhandled(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn handler_failed<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AppError::HandlerFailed {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::HandlerFailed { .. }
            | AppError::InternalError(_)
            | AppError::Unhandled(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Default, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(rename = "missingFields", skip_serializing_if = "Option::is_none")]
    missing_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::MissingFields(fields) => ErrorResponse {
                error: "Missing required fields".to_string(),
                missing_fields: Some(fields),
                ..Default::default()
            },
            AppError::RouteNotFound { method, path } => ErrorResponse {
                error: "Route not found".to_string(),
                message: Some(format!("Cannot {} {}", method, path)),
                ..Default::default()
            },
            AppError::HandlerFailed { message, source } => {
                tracing::error!(error = %source, "{}", message);
                ErrorResponse {
                    error: message,
                    details: Some(source.to_string()),
                    ..Default::default()
                }
            }
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal server error");
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    details: Some(format!("{:#}", err)),
                    ..Default::default()
                }
            }
            AppError::Unhandled(msg) => {
                tracing::error!(error = %msg, "Unhandled error");
                ErrorResponse {
                    error: "Something went wrong!".to_string(),
                    message: Some(msg),
                    ..Default::default()
                }
            }
            AppError::ConfigError(err) => ErrorResponse {
                error: "Configuration error".to_string(),
                details: Some(err.to_string()),
                ..Default::default()
            },
        };

        (status, Json(body)).into_response()
    }
}
