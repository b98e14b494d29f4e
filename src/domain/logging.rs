// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server access logging desired state

use serde::{Deserialize, Serialize};

use super::invariants::{ValidationError, ValidationResult};
use super::reference::{Reference, Selector};

/// Where and how server access logs for a bucket are delivered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfiguration {
    /// Bucket receiving the log objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_bucket: Option<String>,

    /// Resolves `target_bucket` from another bucket object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_bucket_ref: Option<Reference>,

    /// Resolves `target_bucket` by label selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_bucket_selector: Option<Selector>,

    /// Key prefix for every log object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_prefix: Option<String>,

    /// Permissions granted on the delivered log objects, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_grants: Vec<TargetGrant>,
}

impl LoggingConfiguration {
    /// Logging into `target_bucket` with no prefix and no grants
    pub fn to_bucket(target_bucket: impl Into<String>) -> Self {
        Self {
            target_bucket: Some(target_bucket.into()),
            ..Self::default()
        }
    }

    /// Set the key prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = Some(prefix.into());
        self
    }

    /// Append a grant
    pub fn with_grant(mut self, grant: TargetGrant) -> Self {
        self.target_grants.push(grant);
        self
    }

    /// Check that everything a replace call needs is populated
    pub fn validate(&self) -> ValidationResult {
        if self.target_bucket.is_none() {
            return Err(ValidationError::MissingField {
                field: "targetBucket".to_string(),
            });
        }
        for (index, grant) in self.target_grants.iter().enumerate() {
            if grant.grantee.grantee_type.is_empty() {
                return Err(ValidationError::MissingField {
                    field: format!("targetGrants[{index}].grantee.type"),
                });
            }
            if grant.permission.is_empty() {
                return Err(ValidationError::MissingField {
                    field: format!("targetGrants[{index}].permission"),
                });
            }
        }
        Ok(())
    }
}

/// A permission on delivered log objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGrant {
    /// Who receives the permission
    pub grantee: TargetGrantee,

    /// `FULL_CONTROL`, `READ` or `WRITE`
    pub permission: String,
}

/// The receiver of a logging grant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGrantee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(default, rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `CanonicalUser`, `AmazonCustomerByEmail` or `Group`
    #[serde(rename = "type")]
    pub grantee_type: String,

    #[serde(default, rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
