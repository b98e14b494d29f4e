// Copyright (c) 2025 - Cowboy AI, Inc.
//! Desired-State Invariants
//!
//! A facet's desired state must have every required field populated before a
//! replace call is issued, either by the owner or by late initialization.
//! The checks are pure and run without touching the remote API.

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error with context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is unset
    #[error("required field {field} is not set")]
    MissingField { field: String },
}
