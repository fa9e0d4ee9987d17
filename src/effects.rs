//! Validation aliases and helpers built on stillwater.
//!
//! Configuration checks use `Validation` rather than `Result` so that a user
//! sees every problem in their `.investcase.toml` at once instead of fixing
//! them one run at a time.
//!
//! # Example
//!
//! ```rust
//! use investcase::effects::{combine_validations, validation_failure, validation_success};
//! use investcase::errors::ModelError;
//!
//! let validations = vec![
//!     validation_success(1),
//!     validation_failure(ModelError::config("error 1")),
//!     validation_failure(ModelError::config("error 2")),
//! ];
//!
//! let combined = combine_validations(validations);
//! assert!(combined.is_failure());
//! ```

use crate::errors::{errors_to_anyhow, ModelError};
use stillwater::{NonEmptyVec, Validation};

/// Accumulated error collection.
pub type ModelErrors = NonEmptyVec<ModelError>;

/// Validation that accumulates every `ModelError` it encounters.
pub type ModelValidation<T> = Validation<T, ModelErrors>;

pub fn validation_success<T>(value: T) -> ModelValidation<T> {
    Validation::Success(value)
}

pub fn validation_failure<T>(error: ModelError) -> ModelValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Build a validation from a list of errors; an empty list is a success.
pub fn validation_from_errors<T>(value: T, errors: Vec<ModelError>) -> ModelValidation<T> {
    let mut errors = errors.into_iter();
    match errors.next() {
        Some(head) => Validation::Failure(NonEmptyVec::new(head, errors.collect())),
        None => Validation::Success(value),
    }
}

/// Combine validations, keeping all failures.
pub fn combine_validations<T>(validations: Vec<ModelValidation<T>>) -> ModelValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<ModelError> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors.into_vec()),
        }
    }

    validation_from_errors(successes, failures)
}

/// Fail-fast view of a validation for `anyhow` callers.
pub fn run_validation<T>(validation: ModelValidation<T>) -> anyhow::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors_to_anyhow(errors.into_vec())),
    }
}

/// Flatten a validation into its error list (empty on success).
pub fn validation_errors<T>(validation: ModelValidation<T>) -> Vec<ModelError> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.into_vec(),
    }
}
