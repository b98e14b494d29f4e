// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote Bucket Client
//!
//! The capability surface facet controllers consume to read, replace and
//! delete one named sub-configuration of one bucket. The transport behind it
//! is opaque; every call is keyed by the bucket's external name.
//!
//! # Absence
//!
//! A facet that has never been configured remotely is reported either as
//! `Ok(None)` or as [`RemoteError::NotConfigured`], depending on what the
//! remote API does for that facet. Both mean "absent" and must never be
//! conflated with a transport or authorization failure.
//!
//! # Implementations
//!
//! - [`InMemoryBucketClient`] - process-local store with call recording and
//!   fault injection
//! - `HttpBucketClient` - REST client (feature `http`)

pub mod memory;
pub mod types;

#[cfg(feature = "http")]
pub mod http;

pub use memory::{InMemoryBucketClient, RemoteCall, RemoteOperation};

#[cfg(feature = "http")]
pub use http::{HttpBucketClient, HttpClientConfig};

use async_trait::async_trait;

use types::{
    LoggingEnabled, PutBucketEncryptionInput, PutBucketLoggingInput,
    ServerSideEncryptionConfiguration,
};

/// Result type for remote calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors reported by a remote bucket client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The sub-configuration does not exist remotely
    #[error("configuration not found")]
    NotConfigured,

    /// The remote endpoint could not be reached
    #[error("remote unavailable: {0}")]
    Unavailable(String),

    /// The remote endpoint refused the request
    #[error("remote rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The remote response could not be decoded
    #[error("malformed remote response: {0}")]
    Malformed(String),
}

impl RemoteError {
    /// Whether this is the recognized "not configured" condition
    pub fn is_not_configured(&self) -> bool {
        matches!(self, RemoteError::NotConfigured)
    }
}

/// Remote API for the configurable facets of a bucket
#[async_trait]
pub trait BucketClient: Send + Sync {
    /// Current logging target; `None` when logging is disabled
    async fn get_bucket_logging(&self, bucket: &str) -> RemoteResult<Option<LoggingEnabled>>;

    /// Replace the logging configuration
    async fn put_bucket_logging(&self, input: PutBucketLoggingInput) -> RemoteResult<()>;

    /// Current default encryption
    async fn get_bucket_encryption(
        &self,
        bucket: &str,
    ) -> RemoteResult<Option<ServerSideEncryptionConfiguration>>;

    /// Replace the default encryption
    async fn put_bucket_encryption(&self, input: PutBucketEncryptionInput) -> RemoteResult<()>;

    /// Remove the default encryption
    async fn delete_bucket_encryption(&self, bucket: &str) -> RemoteResult<()>;
}
