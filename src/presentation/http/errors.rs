//! HTTP error handling and response conversion.
//!
//! Every failure reaching a handler is turned into a JSON body with an
//! `error` field, plus a `message` and endpoint-specific context for server
//! errors. Nothing below ever returns a backtrace to the client.

use crate::domain::mls_point::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use std::{any::Any, fmt};

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404). The message is shown to the client.
    NotFound(String),

    /// A lookup failed unexpectedly (500).
    Query {
        context: &'static str,
        message: String,
        details: Map<String, Value>,
    },

    /// Report generation failed (500).
    Report(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Query {
                context, message, ..
            } => write!(f, "{}: {}", context, message),
            Self::Report(msg) => write!(f, "Report error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn query(context: &'static str, message: impl fmt::Display) -> Self {
        Self::Query {
            context,
            message: message.to_string(),
            details: Map::new(),
        }
    }

    /// Maps a domain failure, naming the operation for server errors.
    pub fn from_domain(err: DomainError, context: &'static str) -> Self {
        match err {
            DomainError::NoData => Self::NotFound("No data available".into()),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::ReportFailed(msg) => Self::Report(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg, context);
                Self::query(context, msg)
            }
        }
    }

    /// Adds a field to a query error body; other variants are unchanged.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        if let Self::Query { details, .. } = &mut self {
            details.insert(key.to_string(), value.into());
        }
        self
    }

    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Query { .. } | Self::Report(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(self) -> Value {
        match self {
            Self::NotFound(msg) => json!({ "error": msg }),
            Self::Query {
                context,
                message,
                details,
            } => {
                let mut body = Map::new();
                body.insert("error".into(), context.into());
                body.insert("message".into(), message.into());
                body.extend(details);
                Value::Object(body)
            }
            Self::Report(msg) => json!({ "error": "PDF generation failed", "message": msg }),
            Self::Internal(_) => json!({
                "error": "Internal server error",
                "message": "Unexpected failure",
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::NOT_FOUND => tracing::warn!("error={}", self),
            _ => tracing::info!("error={}", self),
        }

        (status, Json(self.body())).into_response()
    }
}

/// Response for a handler that panicked, used by the panic-catching layer.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
