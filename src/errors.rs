use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use validator::ValidationErrors;

static EXPOSE_INTERNAL_DETAILS: OnceCell<bool> = OnceCell::new();

/// Enables the `details` field on 500 responses. Only the first call has an effect.
pub fn expose_internal_details(enabled: bool) {
    let _ = EXPOSE_INTERNAL_DETAILS.set(enabled);
}

fn internal_details_exposed() -> bool {
    EXPOSE_INTERNAL_DETAILS.get().copied().unwrap_or(false)
}

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            AppError::NotFound(msg) => serde_json::json!({"error": msg}),
            AppError::InternalError(msg) => {
                tracing::error!("Request failed: {}", msg);
                let mut body = serde_json::json!({
                    "error": "Internal server error",
                    "message": "Something went wrong on the server."
                });
                if internal_details_exposed() {
                    body["details"] = serde_json::Value::String(msg.clone());
                }
                body
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(field_errors)
    }
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        self.error_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalError(format!("Database error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
