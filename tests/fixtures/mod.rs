// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-bucket-facets
//!
//! Deterministic remote and desired bucket state shared by the integration
//! tests. Remote shapes are built here so tests read as scenarios rather than
//! as struct literals.

#![allow(dead_code)]

use std::sync::Arc;

use cim_bucket_facets::client::types::{
    BucketLogsPermission, Grantee, GranteeType, LoggingEnabled, ServerSideEncryption,
    ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration, ServerSideEncryptionRule,
    TargetGrant,
};
use cim_bucket_facets::client::InMemoryBucketClient;
use cim_bucket_facets::domain::TargetGrant as DesiredGrant;
use cim_bucket_facets::domain::{Bucket, LoggingConfiguration, TargetGrantee};

pub const BUCKET: &str = "assets";
pub const EXTERNAL_NAME: &str = "assets-prod-eu";
pub const LOG_BUCKET: &str = "logs";
pub const OTHER_LOG_BUCKET: &str = "other";
pub const KMS_KEY: &str = "arn:aws:kms:eu-west-1:000000000000:key/fixture";

pub const OWNER_ID: &str = "79a59df900b949e55d96a1e698fbacedfd6e09d98eacf8f8d5218e7cd47ef2be";
pub const LOG_DELIVERY_URI: &str = "http://acs.amazonaws.com/groups/s3/LogDelivery";

/// A fresh client with nothing configured
pub fn empty_client() -> Arc<InMemoryBucketClient> {
    Arc::new(InMemoryBucketClient::new())
}

/// Remote grant to a canonical user
pub fn user_grant(id: &str, permission: BucketLogsPermission) -> TargetGrant {
    TargetGrant {
        grantee: Some(Grantee {
            display_name: Some("owner".to_string()),
            email_address: None,
            id: Some(id.to_string()),
            grantee_type: GranteeType::CanonicalUser,
            uri: None,
        }),
        permission,
    }
}

/// Remote grant to a predefined group
pub fn group_grant(uri: &str, permission: BucketLogsPermission) -> TargetGrant {
    TargetGrant {
        grantee: Some(Grantee {
            display_name: None,
            email_address: None,
            id: None,
            grantee_type: GranteeType::Group,
            uri: Some(uri.to_string()),
        }),
        permission,
    }
}

/// The two-grant remote configuration used by late-initialization scenarios
pub fn two_grants() -> Vec<TargetGrant> {
    vec![
        user_grant(OWNER_ID, BucketLogsPermission::FullControl),
        group_grant(LOG_DELIVERY_URI, BucketLogsPermission::Write),
    ]
}

/// Remote logging into `target` with `prefix`
pub fn remote_logging(target: &str, prefix: &str, grants: Vec<TargetGrant>) -> LoggingEnabled {
    LoggingEnabled {
        target_bucket: Some(target.to_string()),
        target_grants: grants,
        target_prefix: Some(prefix.to_string()),
    }
}

/// Desired counterpart of [`user_grant`]
pub fn desired_user_grant(id: &str, permission: &str) -> DesiredGrant {
    DesiredGrant {
        grantee: TargetGrantee {
            display_name: Some("owner".to_string()),
            email_address: None,
            id: Some(id.to_string()),
            grantee_type: "CanonicalUser".to_string(),
            uri: None,
        },
        permission: permission.to_string(),
    }
}

/// Remote default encryption with one rule per algorithm given
pub fn remote_encryption(algorithms: &[ServerSideEncryption]) -> ServerSideEncryptionConfiguration {
    ServerSideEncryptionConfiguration {
        rules: algorithms
            .iter()
            .map(|algorithm| ServerSideEncryptionRule {
                apply_server_side_encryption_by_default: Some(ServerSideEncryptionByDefault {
                    kms_master_key_id: (*algorithm == ServerSideEncryption::AwsKms)
                        .then(|| KMS_KEY.to_string()),
                    sse_algorithm: algorithm.clone(),
                }),
            })
            .collect(),
    }
}

/// Bucket declaring logging into [`LOG_BUCKET`] with an explicit empty prefix
pub fn logging_bucket() -> Bucket {
    Bucket::new(BUCKET).with_logging(LoggingConfiguration::to_bucket(LOG_BUCKET).with_prefix(""))
}
