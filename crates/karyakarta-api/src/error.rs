use axum::{Json, http::StatusCode, response::IntoResponse};
use karyakarta_db::{EventUpdateError, RegistrationError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::NotFound => "not_found",
            ApiError::Conflict(_) => "conflict",
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::EventNotFound(_) => ApiError::NotFound,
            other => ApiError::Conflict(other.to_string()),
        }
    }
}

impl From<EventUpdateError> for ApiError {
    fn from(err: EventUpdateError) -> Self {
        match err {
            EventUpdateError::NotFound(_) => ApiError::NotFound,
            EventUpdateError::CapacityBelowAttendance { .. } => ApiError::Conflict(err.to_string()),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.error_code(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a store lookup miss into a 404.
pub trait FoundExt<T> {
    fn or_not_found(self) -> Result<T, ApiError>;
}

impl<T> FoundExt<T> for Option<T> {
    fn or_not_found(self) -> Result<T, ApiError> {
        self.ok_or(ApiError::NotFound)
    }
}
