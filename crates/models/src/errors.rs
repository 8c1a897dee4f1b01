use thiserror::Error;

/// Field-level rejection of a vehicle payload, raised before any write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Make or Model cannot be null")]
    NullField,
    #[error("Make or Model cannot be empty")]
    EmptyField,
    #[error("Year must be between 1950 and 2050")]
    YearOutOfRange,
    #[error("Vehicle id is required")]
    MissingId,
}
