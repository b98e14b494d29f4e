// Copyright (c) 2025 - Cowboy AI, Inc.
//! Facet Controllers
//!
//! A facet is one independently manageable configuration aspect of a bucket
//! (logging, server-side encryption, ...). Every facet is driven toward its
//! desired state by the same four-operation contract:
//!
//! ```text
//! LateInitialize ──> Observe ──┬── Updated ────────> (nothing)
//!   (fill unset                ├── NeedsUpdate ────> CreateOrUpdate (full replace)
//!    desired fields)           └── NeedsDeletion ──> Delete
//! ```
//!
//! # Architecture
//!
//! - [`Facet`] - static description of one facet: its desired and remote
//!   shapes, the projector between them, the late-initialization merge and
//!   the remote calls
//! - [`FacetController`] - the shared state machine, generic over a [`Facet`]
//! - [`SubresourceClient`] - object-safe surface the composer holds a
//!   homogeneous list of
//!
//! # Invariants
//!
//! - Observe never mutates the bucket
//! - LateInitialize only fills unset fields, never overwrites
//! - CreateOrUpdate with an absent desired state is a no-op
//! - Each operation makes at most one remote call and never retries
//!
//! Operations on different facets of the same bucket touch disjoint slices of
//! both the bucket and the remote configuration. Two operations on the same
//! facet of the same bucket must not run concurrently; no lock is taken here.

pub mod compare;
pub mod controller;
pub mod encryption;
pub mod logging;
pub mod status;

pub use compare::Comparator;
pub use controller::FacetController;
pub use encryption::EncryptionFacet;
pub use logging::LoggingFacet;
pub use status::{derive_status, FacetAction, ResourceStatus, Verdict};

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;

use crate::client::{BucketClient, RemoteResult};
use crate::domain::{Bucket, BucketParameters, ValidationResult};
use crate::errors::FacetResult;

/// Static description of one facet
///
/// Implementations are zero-sized markers; all behavior lives in associated
/// functions so [`FacetController`] can be generic over them.
#[async_trait]
pub trait Facet: Send + Sync + 'static {
    /// Desired-state representation, nested in [`BucketParameters`]
    type Desired: Clone + Debug + Default + Send + Sync;

    /// Remote request/response representation
    type Remote: Clone + Debug + Serialize + Send + Sync;

    /// Label used in logs, reports and errors
    const NAME: &'static str;

    /// Message attached to read failures
    const GET_FAILED: &'static str;

    /// Message attached to replace failures
    const PUT_FAILED: &'static str;

    /// Message attached to delete failures
    const DELETE_FAILED: &'static str;

    /// Whether the remote API has a delete primitive for this facet
    ///
    /// Without one, an unmanaged remote configuration is reported as drift
    /// and Delete is a no-op.
    const SUPPORTS_DELETE: bool;

    /// Remote-shape keys owned by reference resolution, never compared
    ///
    /// The projectors of this crate already drop references, so these keys
    /// only matter for remote shapes that carry them through.
    const IGNORED_FIELDS: &'static [&'static str];

    /// Render a remote response as desired state
    ///
    /// Entries missing a required field are dropped, so the result always
    /// validates when the remote configuration is usable at all.
    fn to_local(remote: &Self::Remote) -> Self::Desired;

    /// Desired state of this facet, if managed
    fn desired(params: &BucketParameters) -> Option<&Self::Desired>;

    /// Slot holding the desired state of this facet
    fn desired_mut(params: &mut BucketParameters) -> &mut Option<Self::Desired>;

    /// Check required fields before a replace call
    fn validate(desired: &Self::Desired) -> ValidationResult;

    /// Render the full desired state as a remote request
    fn to_remote(desired: &Self::Desired) -> Self::Remote;

    /// Fill unset fields of `desired` from `observed`; `true` if anything changed
    fn late_initialize(desired: &mut Self::Desired, observed: &Self::Remote) -> bool;

    /// Read the remote configuration
    async fn get(client: &dyn BucketClient, bucket: &str) -> RemoteResult<Option<Self::Remote>>;

    /// Replace the remote configuration
    async fn replace(client: &dyn BucketClient, bucket: &str, request: Self::Remote)
        -> RemoteResult<()>;

    /// Delete the remote configuration; only called when `SUPPORTS_DELETE`
    async fn delete(client: &dyn BucketClient, bucket: &str) -> RemoteResult<()>;
}

/// Four-operation contract consumed by the composer
#[async_trait]
pub trait SubresourceClient: Send + Sync {
    /// Facet label
    fn name(&self) -> &'static str;

    /// Backfill unset desired fields from the remote state
    async fn late_initialize(&self, bucket: &mut Bucket) -> FacetResult<()>;

    /// Compare desired and remote state
    async fn observe(&self, bucket: &Bucket) -> FacetResult<ResourceStatus>;

    /// Replace the remote state with the desired state
    async fn create_or_update(&self, bucket: &Bucket) -> FacetResult<()>;

    /// Remove the remote state
    async fn delete(&self, bucket: &Bucket) -> FacetResult<()>;
}

/// Controllers for every facet this crate knows, in reconciliation order
pub fn subresource_clients(client: Arc<dyn BucketClient>) -> Vec<Box<dyn SubresourceClient>> {
    vec![
        Box::new(FacetController::<LoggingFacet>::new(client.clone())),
        Box::new(FacetController::<EncryptionFacet>::new(client)),
    ]
}
