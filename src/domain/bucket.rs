// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bucket resource and its facet parameters

use serde::{Deserialize, Serialize};

use super::encryption::ServerSideEncryptionConfiguration;
use super::logging::LoggingConfiguration;

/// A storage bucket as declared by its owner
///
/// The bucket is looked up remotely by its external name, which defaults to
/// the object name unless explicitly overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Object name
    pub name: String,

    /// Remote name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,

    /// Desired configuration of every managed facet
    #[serde(default)]
    pub spec: BucketParameters,
}

impl Bucket {
    /// Create a bucket with no managed facets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_name: None,
            spec: BucketParameters::default(),
        }
    }

    /// Override the remote name
    pub fn with_external_name(mut self, external_name: impl Into<String>) -> Self {
        self.external_name = Some(external_name.into());
        self
    }

    /// Set the desired logging configuration
    pub fn with_logging(mut self, config: LoggingConfiguration) -> Self {
        self.spec.logging_configuration = Some(config);
        self
    }

    /// Set the desired server-side encryption configuration
    pub fn with_encryption(mut self, config: ServerSideEncryptionConfiguration) -> Self {
        self.spec.server_side_encryption_configuration = Some(config);
        self
    }

    /// Name used as the remote lookup key
    pub fn external_name(&self) -> &str {
        self.external_name.as_deref().unwrap_or(&self.name)
    }
}

/// Per-facet desired state of a bucket
///
/// Every field is optional; `None` means the facet is not managed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketParameters {
    /// Server access logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_configuration: Option<LoggingConfiguration>,

    /// Default server-side encryption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}
