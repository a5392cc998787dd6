// errors.rs
use thiserror::Error;

/// Errors raised while answering a request. Each one maps to an HTML
/// error page in `responses::errors`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}
