// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logging facet
//!
//! Server access logging has no delete call: the remote API only offers a
//! full replace. An unmanaged but enabled remote logging target is therefore
//! reported as `NeedsUpdate`, and Delete does nothing.
//!
//! Remote grants missing their grantee type or permission cannot be declared
//! and are never adopted by late initialization.

use async_trait::async_trait;

use super::Facet;
use crate::client::types::{
    self as api, BucketLoggingStatus, BucketLogsPermission, GranteeType, LoggingEnabled,
    PutBucketLoggingInput,
};
use crate::client::{BucketClient, RemoteResult};
use crate::domain::late_init::{fill_if_empty, fill_if_unset};
use crate::domain::{
    BucketParameters, LoggingConfiguration, TargetGrant, TargetGrantee, ValidationResult,
};

/// Server access logging of a bucket
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFacet;

fn grant_to_remote(grant: &TargetGrant) -> api::TargetGrant {
    api::TargetGrant {
        grantee: Some(api::Grantee {
            display_name: grant.grantee.display_name.clone(),
            email_address: grant.grantee.email_address.clone(),
            id: grant.grantee.id.clone(),
            grantee_type: GranteeType::from(grant.grantee.grantee_type.as_str()),
            uri: grant.grantee.uri.clone(),
        }),
        permission: BucketLogsPermission::from(grant.permission.as_str()),
    }
}

/// `None` for a grant without a grantee type or permission
fn grant_to_local(grant: &api::TargetGrant) -> Option<TargetGrant> {
    let grantee = grant.grantee.as_ref()?;
    if grantee.grantee_type.as_str().is_empty() || grant.permission.as_str().is_empty() {
        return None;
    }
    Some(TargetGrant {
        grantee: TargetGrantee {
            display_name: grantee.display_name.clone(),
            email_address: grantee.email_address.clone(),
            id: grantee.id.clone(),
            grantee_type: grantee.grantee_type.as_str().to_string(),
            uri: grantee.uri.clone(),
        },
        permission: grant.permission.as_str().to_string(),
    })
}

#[async_trait]
impl Facet for LoggingFacet {
    type Desired = LoggingConfiguration;
    type Remote = LoggingEnabled;

    const NAME: &'static str = "logging";
    const GET_FAILED: &'static str = "cannot get Bucket logging configuration";
    const PUT_FAILED: &'static str = "cannot put Bucket logging configuration";
    const DELETE_FAILED: &'static str = "cannot delete Bucket logging configuration";
    const SUPPORTS_DELETE: bool = false;
    const IGNORED_FIELDS: &'static [&'static str] = &["TargetBucketRef", "TargetBucketSelector"];

    fn desired(params: &BucketParameters) -> Option<&LoggingConfiguration> {
        params.logging_configuration.as_ref()
    }

    fn desired_mut(params: &mut BucketParameters) -> &mut Option<LoggingConfiguration> {
        &mut params.logging_configuration
    }

    fn validate(desired: &LoggingConfiguration) -> ValidationResult {
        desired.validate()
    }

    /// The prefix is always rendered; an unset prefix is sent as empty
    fn to_remote(desired: &LoggingConfiguration) -> LoggingEnabled {
        LoggingEnabled {
            target_bucket: desired.target_bucket.clone(),
            target_grants: desired.target_grants.iter().map(grant_to_remote).collect(),
            target_prefix: Some(desired.target_prefix.clone().unwrap_or_default()),
        }
    }

    /// Grants without a grantee type or permission are dropped
    fn to_local(remote: &LoggingEnabled) -> LoggingConfiguration {
        LoggingConfiguration {
            target_bucket: remote.target_bucket.clone(),
            target_bucket_ref: None,
            target_bucket_selector: None,
            target_prefix: remote.target_prefix.clone(),
            target_grants: remote.target_grants.iter().filter_map(grant_to_local).collect(),
        }
    }

    fn late_initialize(desired: &mut LoggingConfiguration, observed: &LoggingEnabled) -> bool {
        let observed = Self::to_local(observed);
        let bucket = fill_if_unset(&mut desired.target_bucket, observed.target_bucket.as_ref());
        let prefix = fill_if_unset(&mut desired.target_prefix, observed.target_prefix.as_ref());
        let grants = fill_if_empty(&mut desired.target_grants, || observed.target_grants);
        bucket || prefix || grants
    }

    async fn get(client: &dyn BucketClient, bucket: &str) -> RemoteResult<Option<LoggingEnabled>> {
        client.get_bucket_logging(bucket).await
    }

    async fn replace(
        client: &dyn BucketClient,
        bucket: &str,
        request: LoggingEnabled,
    ) -> RemoteResult<()> {
        client
            .put_bucket_logging(PutBucketLoggingInput {
                bucket: bucket.to_string(),
                bucket_logging_status: BucketLoggingStatus {
                    logging_enabled: Some(request),
                },
            })
            .await
    }

    async fn delete(_client: &dyn BucketClient, _bucket: &str) -> RemoteResult<()> {
        Ok(())
    }
}
