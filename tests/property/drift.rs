// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Drift Detection
//!
//! Differing entry counts are always drift, whatever the shared prefix of the
//! two lists holds.

use cim_bucket_facets::facet::{
    derive_status, Comparator, EncryptionFacet, Facet, LoggingFacet, ResourceStatus,
};
use proptest::prelude::*;

use super::strategies::{complete_logging, encryption, grants, rule};

proptest! {
    #[test]
    fn extra_remote_grants_are_drift(
        desired in complete_logging(),
        extra in grants(3).prop_filter("non-empty", |g| !g.is_empty())
    ) {
        let comparator = Comparator::ignoring(LoggingFacet::IGNORED_FIELDS);
        let mut remote = desired.clone();
        remote.target_grants.extend(extra);

        let verdict = derive_status(
            Some(&LoggingFacet::to_remote(&desired)),
            Some(&LoggingFacet::to_remote(&remote)),
            LoggingFacet::SUPPORTS_DELETE,
            &comparator,
        );

        prop_assert_eq!(verdict.status, ResourceStatus::NeedsUpdate);
        prop_assert_eq!(verdict.difference.as_deref(), Some("$.TargetGrants.length"));
    }

    #[test]
    fn missing_remote_rules_are_drift(desired in encryption(3), missing in rule()) {
        let comparator = Comparator::ignoring(EncryptionFacet::IGNORED_FIELDS);
        let mut declared = desired.clone();
        declared.rules.push(missing);

        let verdict = derive_status(
            Some(&EncryptionFacet::to_remote(&declared)),
            Some(&EncryptionFacet::to_remote(&desired)),
            EncryptionFacet::SUPPORTS_DELETE,
            &comparator,
        );

        prop_assert_eq!(verdict.status, ResourceStatus::NeedsUpdate);
    }

    #[test]
    fn identical_state_is_updated(desired in complete_logging()) {
        let comparator = Comparator::ignoring(LoggingFacet::IGNORED_FIELDS);
        let remote = LoggingFacet::to_remote(&desired);

        let verdict = derive_status(Some(&remote), Some(&remote), false, &comparator);

        prop_assert_eq!(verdict.status, ResourceStatus::Updated);
        prop_assert_eq!(verdict.difference, None);
    }
}
