use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "backend")]
pub use backend::*;

/// Field constraint violations collected by a model, in field declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", self.first_message())]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { error_messages: vec![message.into()] }
    }

    /// The message reported to clients. Only the first violation is surfaced
    pub fn first_message(&self) -> &str {
        self.error_messages
            .first()
            .map_or("Validation failed", |v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum ServerError {
    /// A field constraint was violated (length, minimum, required)
    #[error("{message}")]
    Validation { message: String },
    /// A unique constraint was violated
    #[error("{message}")]
    DuplicateKey { message: String },
    /// A referenced entity doesn't exist
    #[error("{message}")]
    Reference { message: String },
    /// No route matched the request
    #[error("not found")]
    NotFound,
    #[error("{message}")]
    Internal { message: String },
}

impl ServerError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn duplicate_key<S: Into<String>>(message: S) -> Self {
        Self::DuplicateKey { message: message.into() }
    }

    pub fn reference<S: Into<String>>(message: S) -> Self {
        Self::Reference { message: message.into() }
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    pub fn code(&self) -> StatusCode {
        use ServerError::*;
        match self {
            Validation { .. } | DuplicateKey { .. } | Reference { .. } => StatusCode::BAD_REQUEST,
            NotFound => StatusCode::NOT_FOUND,
            Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.first_message())
    }
}

#[macro_export]
macro_rules! internal_error {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::internal(format!($($arg)*))
    };
}

#[cfg(feature = "backend")]
mod backend {
    use axum::response::{IntoResponse, Response};
    use deadpool_sqlite::{InteractError, PoolError};
    use tracing::{debug, error};

    use super::ServerError;

    // Errors are always rendered as plain text
    impl IntoResponse for ServerError {
        fn into_response(self) -> Response {
            let code = self.code();
            if code.is_server_error() {
                error!(%code, error = %self, "Request failed");
            } else {
                debug!(%code, error = %self, "Request rejected");
            }
            (code, self.to_string()).into_response()
        }
    }

    impl From<rusqlite::Error> for ServerError {
        fn from(err: rusqlite::Error) -> Self {
            crate::internal_error!("Database error: {err}")
        }
    }

    impl From<InteractError> for ServerError {
        fn from(err: InteractError) -> Self {
            crate::internal_error!("Database interaction failed: {err:?}")
        }
    }

    impl From<PoolError> for ServerError {
        fn from(err: PoolError) -> Self {
            crate::internal_error!("Failed to get a database connection: {err:?}")
        }
    }

    /// True when an insert or update hit a UNIQUE constraint
    pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}
