use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        // Business rejections come back as an itemized errors list; the
        // create/apply routes answer 400 for not-found/duplicate/cap cases.
        match self {
            Error::BadRequest(msg) | Error::NotFound(msg) | Error::Conflict(msg) => {
                error_list(StatusCode::BAD_REQUEST, vec![msg])
            }
            Error::Validation(errors) => {
                error_list(StatusCode::BAD_REQUEST, validation_messages(&errors))
            }
            Error::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg }))).into_response()
            }
            other => {
                // Internal detail stays server-side.
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An unexpected error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

fn error_list(status: StatusCode, messages: Vec<String>) -> axum::response::Response {
    let items: Vec<_> = messages
        .into_iter()
        .map(|msg| json!({ "msg": msg }))
        .collect();
    (status, Json(json!({ "errors": items }))).into_response()
}

/// Flattens `validator` output into the per-field message list the API
/// returns, preferring the messages declared on the DTO derives.
fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages
}

/// MongoDB duplicate-key write errors (E11000) surface when two inserts race
/// past the pre-insert lookup; the unique index is the source of truth.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}

// A body the `Json` extractor cannot deserialize answers like any other bad
// request, not with axum's default 422.
impl From<axum::extract::rejection::JsonRejection> for Error {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;
    use mongodb::error::{Error as MongoError, ErrorKind, WriteError, WriteFailure};

    use super::*;

    fn write_error(code: i32) -> MongoError {
        let write_error: WriteError = mongodb::bson::from_document(doc! {
            "code": code,
            "errmsg": "write failed",
        })
        .unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn duplicate_key_code_is_detected() {
        assert!(is_duplicate_key(&write_error(11000)));
    }

    #[test]
    fn other_write_errors_are_not_duplicates() {
        assert!(!is_duplicate_key(&write_error(121)));
    }
}
