// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote API shapes
//!
//! Request and response bodies of the bucket configuration API. These mirror
//! the remote wire format (PascalCase keys, enumerated string values) and are
//! what the comparator sees when deciding drift.

use serde::{Deserialize, Serialize};

/// Declares a closed set of wire strings with a catch-all that preserves
/// values this crate does not know about.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this crate, kept verbatim
            Unknown(String),
        }

        impl $name {
            /// Wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of principal receiving a grant
    pub enum GranteeType {
        CanonicalUser => "CanonicalUser",
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        Group => "Group",
    }
}

wire_enum! {
    /// Permission granted on delivered log objects
    pub enum BucketLogsPermission {
        FullControl => "FULL_CONTROL",
        Read => "READ",
        Write => "WRITE",
    }
}

wire_enum! {
    /// Default encryption algorithm
    pub enum ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
    }
}

/// Logging target as reported and accepted by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingEnabled {
    pub target_bucket: Option<String>,
    #[serde(default)]
    pub target_grants: Vec<TargetGrant>,
    pub target_prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetGrant {
    pub grantee: Option<Grantee>,
    pub permission: BucketLogsPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Grantee {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub grantee_type: GranteeType,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

/// Body of a logging replace call; `None` disables logging
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketLoggingStatus {
    pub logging_enabled: Option<LoggingEnabled>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketLoggingInput {
    pub bucket: String,
    pub bucket_logging_status: BucketLoggingStatus,
}

/// Default encryption as reported and accepted by the remote API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionConfiguration {
    #[serde(default)]
    pub rules: Vec<ServerSideEncryptionRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionRule {
    pub apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSideEncryptionByDefault {
    #[serde(rename = "KMSMasterKeyID")]
    pub kms_master_key_id: Option<String>,
    #[serde(rename = "SSEAlgorithm")]
    pub sse_algorithm: ServerSideEncryption,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutBucketEncryptionInput {
    pub bucket: String,
    pub server_side_encryption_configuration: ServerSideEncryptionConfiguration,
}
