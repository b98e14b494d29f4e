// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for facet operations

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::client::RemoteError;
use crate::domain::ValidationError;

/// The four operations every facet controller supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetOperation {
    LateInitialize,
    Observe,
    CreateOrUpdate,
    Delete,
}

impl fmt::Display for FacetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacetOperation::LateInitialize => "LateInitialize",
            FacetOperation::Observe => "Observe",
            FacetOperation::CreateOrUpdate => "CreateOrUpdate",
            FacetOperation::Delete => "Delete",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in facet operations
///
/// Every variant names the facet it came from; remote failures also carry
/// the facet's fixed message for the failed call.
#[derive(Debug, Error)]
pub enum FacetError {
    /// Reading the remote configuration failed
    #[error("{message}: {source}")]
    ReadFailed {
        facet: &'static str,
        message: &'static str,
        #[source]
        source: RemoteError,
    },

    /// Replacing or deleting the remote configuration failed
    #[error("{message}: {source}")]
    WriteFailed {
        facet: &'static str,
        operation: FacetOperation,
        message: &'static str,
        #[source]
        source: RemoteError,
    },

    /// The desired state is missing a required field
    #[error("invalid {facet} desired state: {source}")]
    InvalidDesiredState {
        facet: &'static str,
        #[source]
        source: ValidationError,
    },

    /// The caller's deadline expired before the remote call completed
    #[error("{facet} {operation} timed out")]
    Timeout {
        facet: &'static str,
        operation: FacetOperation,
    },
}

impl FacetError {
    /// Facet the error came from
    pub fn facet(&self) -> &'static str {
        match self {
            FacetError::ReadFailed { facet, .. }
            | FacetError::WriteFailed { facet, .. }
            | FacetError::InvalidDesiredState { facet, .. }
            | FacetError::Timeout { facet, .. } => *facet,
        }
    }

    /// Remote error behind this failure, if any
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            FacetError::ReadFailed { source, .. } | FacetError::WriteFailed { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Result type for facet operations
pub type FacetResult<T> = Result<T, FacetError>;

/// Errors loading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting has a value that cannot be parsed
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
