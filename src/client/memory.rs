// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory bucket client
//!
//! Keeps bucket configuration in process memory and behaves like the remote
//! API where it matters to the facet controllers:
//!
//! - Unknown buckets behave as buckets with nothing configured
//! - Logging reads report `Ok(None)` when logging is disabled
//! - Encryption reads report [`RemoteError::NotConfigured`] when unset
//! - Deleting absent encryption succeeds
//!
//! Every call is recorded, and faults can be queued per operation.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;
use tracing::debug;

use super::types::{
    LoggingEnabled, PutBucketEncryptionInput, PutBucketLoggingInput,
    ServerSideEncryptionConfiguration,
};
use super::{BucketClient, RemoteError, RemoteResult};

/// Remote operations exposed by [`BucketClient`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    GetLogging,
    PutLogging,
    GetEncryption,
    PutEncryption,
    DeleteEncryption,
}

/// One recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCall {
    pub operation: RemoteOperation,
    pub bucket: String,
}

#[derive(Debug, Default)]
struct StoredBucket {
    logging: Option<LoggingEnabled>,
    encryption: Option<ServerSideEncryptionConfiguration>,
}

#[derive(Debug, Default)]
struct State {
    buckets: HashMap<String, StoredBucket>,
    calls: Vec<RemoteCall>,
    faults: HashMap<RemoteOperation, VecDeque<RemoteError>>,
}

impl State {
    /// Record the call and pop a queued fault for it, if any
    fn enter(&mut self, operation: RemoteOperation, bucket: &str) -> RemoteResult<()> {
        debug!("in-memory {:?} for bucket {}", operation, bucket);
        self.calls.push(RemoteCall {
            operation,
            bucket: bucket.to_string(),
        });
        match self.faults.get_mut(&operation).and_then(VecDeque::pop_front) {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn bucket(&mut self, bucket: &str) -> &mut StoredBucket {
        self.buckets.entry(bucket.to_string()).or_default()
    }
}

/// Process-local [`BucketClient`]
#[derive(Debug, Default)]
pub struct InMemoryBucketClient {
    state: Mutex<State>,
}

impl InMemoryBucketClient {
    /// Create an empty client
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logging configuration without recording a call
    pub async fn seed_logging(&self, bucket: &str, logging: Option<LoggingEnabled>) {
        self.state.lock().await.bucket(bucket).logging = logging;
    }

    /// Set the encryption configuration without recording a call
    pub async fn seed_encryption(
        &self,
        bucket: &str,
        encryption: Option<ServerSideEncryptionConfiguration>,
    ) {
        self.state.lock().await.bucket(bucket).encryption = encryption;
    }

    /// Stored logging configuration
    pub async fn logging(&self, bucket: &str) -> Option<LoggingEnabled> {
        let state = self.state.lock().await;
        state.buckets.get(bucket).and_then(|b| b.logging.clone())
    }

    /// Stored encryption configuration
    pub async fn encryption(&self, bucket: &str) -> Option<ServerSideEncryptionConfiguration> {
        let state = self.state.lock().await;
        state.buckets.get(bucket).and_then(|b| b.encryption.clone())
    }

    /// Fail the next call of `operation` with `error`
    ///
    /// Faults queue up; each one is consumed by exactly one call.
    pub async fn inject_fault(&self, operation: RemoteOperation, error: RemoteError) {
        self.state
            .lock()
            .await
            .faults
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// All calls made so far, in order
    pub async fn calls(&self) -> Vec<RemoteCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of calls made for `operation`
    pub async fn call_count(&self, operation: RemoteOperation) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Forget recorded calls
    pub async fn clear_calls(&self) {
        self.state.lock().await.calls.clear();
    }
}

#[async_trait]
impl BucketClient for InMemoryBucketClient {
    async fn get_bucket_logging(&self, bucket: &str) -> RemoteResult<Option<LoggingEnabled>> {
        let mut state = self.state.lock().await;
        state.enter(RemoteOperation::GetLogging, bucket)?;
        Ok(state.bucket(bucket).logging.clone())
    }

    async fn put_bucket_logging(&self, input: PutBucketLoggingInput) -> RemoteResult<()> {
        let mut state = self.state.lock().await;
        state.enter(RemoteOperation::PutLogging, &input.bucket)?;
        state.bucket(&input.bucket).logging = input.bucket_logging_status.logging_enabled;
        Ok(())
    }

    async fn get_bucket_encryption(
        &self,
        bucket: &str,
    ) -> RemoteResult<Option<ServerSideEncryptionConfiguration>> {
        let mut state = self.state.lock().await;
        state.enter(RemoteOperation::GetEncryption, bucket)?;
        match &state.bucket(bucket).encryption {
            Some(config) => Ok(Some(config.clone())),
            None => Err(RemoteError::NotConfigured),
        }
    }

    async fn put_bucket_encryption(&self, input: PutBucketEncryptionInput) -> RemoteResult<()> {
        let mut state = self.state.lock().await;
        state.enter(RemoteOperation::PutEncryption, &input.bucket)?;
        state.bucket(&input.bucket).encryption = Some(input.server_side_encryption_configuration);
        Ok(())
    }

    async fn delete_bucket_encryption(&self, bucket: &str) -> RemoteResult<()> {
        let mut state = self.state.lock().await;
        state.enter(RemoteOperation::DeleteEncryption, bucket)?;
        state.bucket(bucket).encryption = None;
        Ok(())
    }
}
