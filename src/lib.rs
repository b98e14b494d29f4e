// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bucket facet controllers for the Composable Information Machine
//!
//! Converges the independently configurable facets of a storage bucket
//! (server access logging, default server-side encryption) toward the state
//! declared by the bucket's owner.
//!
//! # Modules
//!
//! - [`domain`] - declared bucket state and its facet value objects
//! - [`client`] - remote bucket API surface, in-memory and REST implementations
//! - [`facet`] - per-facet projection, drift detection and the generic controller
//! - [`reconciler`] - composes every facet of a bucket into one pass
//! - [`errors`] - facet and configuration errors

pub mod client;
pub mod domain;
pub mod errors;
pub mod facet;
pub mod reconciler;

// Re-export commonly used types
pub use client::{BucketClient, InMemoryBucketClient, RemoteError, RemoteResult};
pub use domain::{Bucket, BucketParameters, LoggingConfiguration, ServerSideEncryptionConfiguration};
pub use errors::{ConfigError, FacetError, FacetOperation, FacetResult};
pub use facet::{FacetController, ResourceStatus, SubresourceClient};
pub use reconciler::{BucketReconciler, ReconcileReport, ReconcilerConfig};

#[cfg(feature = "http")]
pub use client::{HttpBucketClient, HttpClientConfig};
