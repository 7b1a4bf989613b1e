//! Error types for the Product actor.

use crate::model::DraftField;
use thiserror::Error;

/// Reasons a candidate record is refused. Refusals never change the registry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// One or more of ID, Name and Price were left blank.
    #[error("Please fill in ID, Name, and Price (missing: {})", join(.0))]
    MissingFields(Vec<DraftField>),

    /// Another product already carries this ID.
    #[error("ID already exists: {0}")]
    DuplicateId(String),

    /// A numeric input holds something that is not a number.
    #[error("{field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: DraftField, value: String },
}

fn join(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
