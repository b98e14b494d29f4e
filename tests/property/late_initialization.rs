// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Late Initialization
//!
//! Late initialization only ever fills unset fields: whatever the user
//! declared survives, and running it twice changes nothing the second time.

use cim_bucket_facets::facet::{EncryptionFacet, Facet, LoggingFacet};
use proptest::prelude::*;

use super::strategies::{complete_logging, encryption, partial_logging};

proptest! {
    #[test]
    fn declared_logging_fields_survive(
        declared in partial_logging(),
        remote in complete_logging()
    ) {
        let observed = LoggingFacet::to_remote(&remote);
        let mut desired = declared.clone();

        LoggingFacet::late_initialize(&mut desired, &observed);

        if declared.target_bucket.is_some() {
            prop_assert_eq!(&desired.target_bucket, &declared.target_bucket);
        } else {
            prop_assert_eq!(&desired.target_bucket, &remote.target_bucket);
        }
        if declared.target_prefix.is_some() {
            prop_assert_eq!(&desired.target_prefix, &declared.target_prefix);
        } else {
            prop_assert_eq!(&desired.target_prefix, &remote.target_prefix);
        }
        if declared.target_grants.is_empty() {
            prop_assert_eq!(&desired.target_grants, &remote.target_grants);
        } else {
            prop_assert_eq!(&desired.target_grants, &declared.target_grants);
        }
    }

    #[test]
    fn logging_late_initialization_is_idempotent(
        declared in partial_logging(),
        remote in complete_logging()
    ) {
        let observed = LoggingFacet::to_remote(&remote);
        let mut desired = declared;

        LoggingFacet::late_initialize(&mut desired, &observed);
        let once = desired.clone();

        prop_assert!(!LoggingFacet::late_initialize(&mut desired, &observed));
        prop_assert_eq!(desired, once);
    }

    #[test]
    fn declared_rules_survive(declared in encryption(3), remote in encryption(3)) {
        let observed = EncryptionFacet::to_remote(&remote);
        let mut desired = declared.clone();

        let changed = EncryptionFacet::late_initialize(&mut desired, &observed);

        if declared.rules.is_empty() {
            prop_assert_eq!(changed, !remote.rules.is_empty());
            prop_assert_eq!(desired, remote);
        } else {
            prop_assert!(!changed);
            prop_assert_eq!(desired, declared);
        }
    }
}
