// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared proptest strategies for desired facet state

use cim_bucket_facets::domain::{
    LoggingConfiguration, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, TargetGrant, TargetGrantee,
};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

fn optional_name() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(name())
}

/// Known and unknown wire values are both preserved verbatim
fn grantee_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CanonicalUser".to_string()),
        Just("AmazonCustomerByEmail".to_string()),
        Just("Group".to_string()),
        "[A-Z][A-Za-z]{2,10}",
    ]
}

fn permission() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("FULL_CONTROL".to_string()),
        Just("READ".to_string()),
        Just("WRITE".to_string()),
        "[A-Z_]{3,10}",
    ]
}

pub fn grant() -> impl Strategy<Value = TargetGrant> {
    (
        optional_name(),
        optional_name(),
        optional_name(),
        grantee_type(),
        optional_name(),
        permission(),
    )
        .prop_map(|(display_name, email_address, id, grantee_type, uri, permission)| TargetGrant {
            grantee: TargetGrantee {
                display_name,
                email_address,
                id,
                grantee_type,
                uri,
            },
            permission,
        })
}

pub fn grants(max: usize) -> impl Strategy<Value = Vec<TargetGrant>> {
    proptest::collection::vec(grant(), 0..=max)
}

/// Logging state as the remote API would report it: every field rendered
pub fn complete_logging() -> impl Strategy<Value = LoggingConfiguration> {
    (name(), "[a-z/]{0,8}", grants(4)).prop_map(|(bucket, prefix, target_grants)| {
        LoggingConfiguration {
            target_bucket: Some(bucket),
            target_bucket_ref: None,
            target_bucket_selector: None,
            target_prefix: Some(prefix),
            target_grants,
        }
    })
}

/// Logging state as a user might declare it: any field may be unset
pub fn partial_logging() -> impl Strategy<Value = LoggingConfiguration> {
    (optional_name(), proptest::option::of("[a-z/]{0,8}"), grants(3)).prop_map(
        |(target_bucket, target_prefix, target_grants)| LoggingConfiguration {
            target_bucket,
            target_bucket_ref: None,
            target_bucket_selector: None,
            target_prefix,
            target_grants,
        },
    )
}

pub fn rule() -> impl Strategy<Value = ServerSideEncryptionRule> {
    prop_oneof![
        Just(ServerSideEncryptionRule::aes256()),
        name().prop_map(ServerSideEncryptionRule::kms),
        ("[a-z:0-9]{1,10}", optional_name()).prop_map(|(sse_algorithm, kms_master_key_id)| {
            ServerSideEncryptionRule {
                apply_server_side_encryption_by_default: ServerSideEncryptionByDefault {
                    kms_master_key_id,
                    sse_algorithm,
                    ..ServerSideEncryptionByDefault::default()
                },
            }
        }),
    ]
}

pub fn encryption(max: usize) -> impl Strategy<Value = ServerSideEncryptionConfiguration> {
    proptest::collection::vec(rule(), 0..=max)
        .prop_map(|rules| ServerSideEncryptionConfiguration { rules })
}
