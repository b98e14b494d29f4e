// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Projector
//!
//! Rendering desired state to the remote shape and back loses nothing, and a
//! rendered state is never reported as drift against itself.

use cim_bucket_facets::facet::{Comparator, EncryptionFacet, Facet, LoggingFacet};
use proptest::prelude::*;

use super::strategies::{complete_logging, encryption};

proptest! {
    #[test]
    fn logging_survives_projection(desired in complete_logging()) {
        let remote = LoggingFacet::to_remote(&desired);
        prop_assert_eq!(LoggingFacet::to_local(&remote), desired);
    }

    #[test]
    fn encryption_survives_projection(desired in encryption(4)) {
        let remote = EncryptionFacet::to_remote(&desired);
        prop_assert_eq!(EncryptionFacet::to_local(&remote), desired);
    }

    #[test]
    fn projection_preserves_order_and_cardinality(desired in complete_logging()) {
        let remote = LoggingFacet::to_remote(&desired);
        prop_assert_eq!(remote.target_grants.len(), desired.target_grants.len());
        for (sent, declared) in remote.target_grants.iter().zip(&desired.target_grants) {
            prop_assert_eq!(sent.permission.as_str(), declared.permission.as_str());
        }
    }

    #[test]
    fn rendered_state_is_never_drift(desired in complete_logging()) {
        let comparator = Comparator::ignoring(LoggingFacet::IGNORED_FIELDS);
        let remote = LoggingFacet::to_remote(&desired);
        prop_assert!(comparator.equal(&remote, &remote.clone()));
        prop_assert_eq!(comparator.first_difference(&remote, &remote), None);
    }
}
