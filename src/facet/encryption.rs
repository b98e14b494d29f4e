// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server-side encryption facet
//!
//! Default encryption has an explicit delete call. An unset encryption
//! configuration is reported by the remote API as "not configured", which
//! this facet treats as absence rather than failure.
//!
//! Remote rules without an algorithm cannot be declared, so they are never
//! adopted by late initialization; they show up as drift instead.

use async_trait::async_trait;

use super::Facet;
use crate::client::types::{self as api, PutBucketEncryptionInput, ServerSideEncryption};
use crate::client::{BucketClient, RemoteResult};
use crate::domain::late_init::fill_if_empty;
use crate::domain::{
    BucketParameters, ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration,
    ServerSideEncryptionRule, ValidationResult,
};

/// Default server-side encryption of a bucket
#[derive(Debug, Clone, Copy, Default)]
pub struct EncryptionFacet;

fn rule_to_remote(rule: &ServerSideEncryptionRule) -> api::ServerSideEncryptionRule {
    let by_default = &rule.apply_server_side_encryption_by_default;
    api::ServerSideEncryptionRule {
        apply_server_side_encryption_by_default: Some(api::ServerSideEncryptionByDefault {
            kms_master_key_id: by_default.kms_master_key_id.clone(),
            sse_algorithm: ServerSideEncryption::from(by_default.sse_algorithm.as_str()),
        }),
    }
}

/// `None` for a rule without a usable algorithm
fn rule_to_local(rule: &api::ServerSideEncryptionRule) -> Option<ServerSideEncryptionRule> {
    let by_default = rule.apply_server_side_encryption_by_default.as_ref()?;
    if by_default.sse_algorithm.as_str().is_empty() {
        return None;
    }
    Some(ServerSideEncryptionRule {
        apply_server_side_encryption_by_default: ServerSideEncryptionByDefault {
            kms_master_key_id: by_default.kms_master_key_id.clone(),
            kms_master_key_id_ref: None,
            kms_master_key_id_selector: None,
            sse_algorithm: by_default.sse_algorithm.as_str().to_string(),
        },
    })
}

#[async_trait]
impl Facet for EncryptionFacet {
    type Desired = ServerSideEncryptionConfiguration;
    type Remote = api::ServerSideEncryptionConfiguration;

    const NAME: &'static str = "encryption";
    const GET_FAILED: &'static str = "cannot get Bucket encryption configuration";
    const PUT_FAILED: &'static str = "cannot put Bucket encryption configuration";
    const DELETE_FAILED: &'static str = "cannot delete Bucket encryption configuration";
    const SUPPORTS_DELETE: bool = true;
    const IGNORED_FIELDS: &'static [&'static str] =
        &["KMSMasterKeyIDRef", "KMSMasterKeyIDSelector"];

    fn desired(params: &BucketParameters) -> Option<&ServerSideEncryptionConfiguration> {
        params.server_side_encryption_configuration.as_ref()
    }

    fn desired_mut(
        params: &mut BucketParameters,
    ) -> &mut Option<ServerSideEncryptionConfiguration> {
        &mut params.server_side_encryption_configuration
    }

    fn validate(desired: &ServerSideEncryptionConfiguration) -> ValidationResult {
        desired.validate()
    }

    fn to_remote(
        desired: &ServerSideEncryptionConfiguration,
    ) -> api::ServerSideEncryptionConfiguration {
        api::ServerSideEncryptionConfiguration {
            rules: desired.rules.iter().map(rule_to_remote).collect(),
        }
    }

    /// Rules without an algorithm are dropped
    fn to_local(
        remote: &api::ServerSideEncryptionConfiguration,
    ) -> ServerSideEncryptionConfiguration {
        ServerSideEncryptionConfiguration {
            rules: remote.rules.iter().filter_map(rule_to_local).collect(),
        }
    }

    /// Rules are adopted wholesale, and only when none are declared
    fn late_initialize(
        desired: &mut ServerSideEncryptionConfiguration,
        observed: &api::ServerSideEncryptionConfiguration,
    ) -> bool {
        fill_if_empty(&mut desired.rules, || {
            observed.rules.iter().filter_map(rule_to_local)
        })
    }

    async fn get(
        client: &dyn BucketClient,
        bucket: &str,
    ) -> RemoteResult<Option<api::ServerSideEncryptionConfiguration>> {
        client.get_bucket_encryption(bucket).await
    }

    async fn replace(
        client: &dyn BucketClient,
        bucket: &str,
        request: api::ServerSideEncryptionConfiguration,
    ) -> RemoteResult<()> {
        client
            .put_bucket_encryption(PutBucketEncryptionInput {
                bucket: bucket.to_string(),
                server_side_encryption_configuration: request,
            })
            .await
    }

    async fn delete(client: &dyn BucketClient, bucket: &str) -> RemoteResult<()> {
        client.delete_bucket_encryption(bucket).await
    }
}
