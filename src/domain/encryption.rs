// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server-side encryption desired state

use serde::{Deserialize, Serialize};

use super::invariants::{ValidationError, ValidationResult};
use super::reference::{Reference, Selector};

/// Default encryption applied to objects written to a bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionConfiguration {
    /// Encryption rules, in order
    #[serde(default)]
    pub rules: Vec<ServerSideEncryptionRule>,
}

impl ServerSideEncryptionConfiguration {
    /// A single-rule configuration
    pub fn single(rule: ServerSideEncryptionRule) -> Self {
        Self { rules: vec![rule] }
    }

    /// Check that every rule names an algorithm
    pub fn validate(&self) -> ValidationResult {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.apply_server_side_encryption_by_default.sse_algorithm.is_empty() {
                let field =
                    format!("rules[{index}].applyServerSideEncryptionByDefault.sseAlgorithm");
                return Err(ValidationError::MissingField { field });
            }
        }
        Ok(())
    }
}

/// One default-encryption rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideEncryptionRule {
    pub apply_server_side_encryption_by_default: ServerSideEncryptionByDefault,
}

impl ServerSideEncryptionRule {
    /// Encrypt with service-managed keys
    pub fn aes256() -> Self {
        Self {
            apply_server_side_encryption_by_default: ServerSideEncryptionByDefault {
                sse_algorithm: "AES256".to_string(),
                ..ServerSideEncryptionByDefault::default()
            },
        }
    }

    /// Encrypt with the given KMS key
    pub fn kms(key_id: impl Into<String>) -> Self {
        Self {
            apply_server_side_encryption_by_default: ServerSideEncryptionByDefault {
                sse_algorithm: "aws:kms".to_string(),
                kms_master_key_id: Some(key_id.into()),
                ..ServerSideEncryptionByDefault::default()
            },
        }
    }
}

/// Algorithm and key used when a request carries no encryption header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideEncryptionByDefault {
    /// Only meaningful with `aws:kms`
    #[serde(default, rename = "kmsMasterKeyID", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<String>,

    #[serde(default, rename = "kmsMasterKeyIDRef", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id_ref: Option<Reference>,

    #[serde(default, rename = "kmsMasterKeyIDSelector", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id_selector: Option<Selector>,

    /// `AES256` or `aws:kms`
    #[serde(rename = "sseAlgorithm")]
    pub sse_algorithm: String,
}
