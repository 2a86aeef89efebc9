// Copyright 2026 Hypermesh Foundation. All rights reserved.
// AI Value Assessment Suite - Errors

/// Errors surfaced by the estimator and the assessment form.
///
/// Numeric input is never an error: blanks and garbage coerce to zero or to
/// the scenario default. Only ids that name nothing are rejected.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("unknown scenario: {0:?}")]
    UnknownScenario(String),

    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    #[error("field {0:?} must be a string, a number or null")]
    InvalidFieldValue(String),

    #[error("malformed assessment form: {0}")]
    MalformedForm(#[from] serde_json::Error),
}
