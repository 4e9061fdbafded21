use thiserror::Error;

/// A remote operation failed.
///
/// This is the only error the table knows about: list, create and delete all
/// end up showing `message` in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CarsApiError {
    pub message: String,
}

impl CarsApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<crate::http::HttpError> for CarsApiError {
    fn from(err: crate::http::HttpError) -> Self {
        Self::new(err.message)
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, CarsApiError>;
