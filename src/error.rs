//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Postgres SQLSTATE for foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// numeric_value_out_of_range
const NUMERIC_OUT_OF_RANGE: &str = "22003";
/// character_not_in_repertoire (NUL in text)
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Translate a foreign-key violation raised by an INSERT or UPDATE into `InvalidReference`,
    /// and values the column types reject into `Validation`.
    pub fn on_write(e: sqlx::Error, what: &str) -> Self {
        match sqlstate(&e).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                AppError::InvalidReference(format!("{} references a row that does not exist", what))
            }
            Some(NUMERIC_OUT_OF_RANGE) => AppError::Validation("numeric value out of range".into()),
            Some(CHARACTER_NOT_IN_REPERTOIRE) => {
                AppError::Validation("text contains characters that cannot be stored".into())
            }
            _ => AppError::Db(e),
        }
    }

    /// Translate a foreign-key violation raised by a DELETE into `Conflict`.
    pub fn on_delete(e: sqlx::Error, what: &str) -> Self {
        if is_foreign_key_violation(&e) {
            AppError::Conflict(format!("{} is still referenced by other records", what))
        } else {
            AppError::Db(e)
        }
    }
}

fn sqlstate(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    sqlstate(e).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::InvalidReference(_) => (StatusCode::BAD_REQUEST, "invalid_reference"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            // Storage details stay in the logs.
            AppError::Db(e) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!(error = %e, "database error");
                "database error".to_string()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                self.to_string()
            }
            _ => self.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        let cases = [
            (AppError::NotFound("order 1".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("name is required".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidReference("menu item 9".into()), StatusCode::BAD_REQUEST),
            (AppError::BadRequest("invalid id".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("restaurant 1".into()), StatusCode::CONFLICT),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn row_not_found_is_404_and_other_db_errors_are_500() {
        assert_eq!(
            AppError::Db(sqlx::Error::RowNotFound).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Db(sqlx::Error::PoolTimedOut).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_database_errors_pass_through_write_and_delete_translation() {
        assert!(matches!(
            AppError::on_write(sqlx::Error::PoolTimedOut, "order"),
            AppError::Db(sqlx::Error::PoolTimedOut)
        ));
        assert!(matches!(
            AppError::on_delete(sqlx::Error::PoolClosed, "customer 3"),
            AppError::Db(sqlx::Error::PoolClosed)
        ));
    }
}
