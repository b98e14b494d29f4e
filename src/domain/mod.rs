// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bucket Domain Model
//!
//! The caller-owned desired state of a storage bucket. Each facet of the
//! bucket (logging, server-side encryption, ...) lives in its own optional
//! field of [`BucketParameters`]; an absent field means the facet is not
//! managed.
//!
//! # Ownership
//!
//! - The composer (or whatever persists the bucket) owns these values
//! - Facet controllers only read them, except during late initialization,
//!   where unset fields are backfilled in place from the remote state
//!
//! # Value Objects
//!
//! - [`LoggingConfiguration`] - server access logging target and grants
//! - [`ServerSideEncryptionConfiguration`] - default encryption rules
//! - [`Reference`] / [`Selector`] - cross-object references resolved by the
//!   platform, never compared during drift detection

pub mod bucket;
pub mod encryption;
pub mod invariants;
pub mod late_init;
pub mod logging;
pub mod reference;

pub use bucket::{Bucket, BucketParameters};
pub use encryption::{
    ServerSideEncryptionByDefault, ServerSideEncryptionConfiguration, ServerSideEncryptionRule,
};
pub use invariants::{ValidationError, ValidationResult};
pub use logging::{LoggingConfiguration, TargetGrant, TargetGrantee};
pub use reference::{Reference, Selector};
