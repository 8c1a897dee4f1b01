use models::errors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Vehicle with id {0} is not present in the database")]
    NotFound(i32),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Whether the failure was caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::NotFound(_))
    }
}
