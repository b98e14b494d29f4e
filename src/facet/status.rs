// Copyright (c) 2025 - Cowboy AI, Inc.
//! Observation Outcome
//!
//! Pure derivation of a facet's outcome from the projected desired state and
//! the observed remote state. Nothing is remembered between calls; every
//! observation starts from scratch.
//!
//! # Outcomes
//!
//! ```text
//! desired   observed   delete-capable   outcome
//! ───────   ────────   ──────────────   ─────────────
//! absent    absent     any              Updated
//! absent    present    yes              NeedsDeletion
//! absent    present    no               NeedsUpdate
//! present   absent     any              NeedsUpdate
//! present   present    any              Updated | NeedsUpdate (comparator)
//! ```
//!
//! A remote read that reports "not configured" counts as observed-absent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::compare::Comparator;

/// Outcome of observing one facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceStatus {
    /// Remote matches desired (or both are absent)
    Updated,
    /// Remote must be replaced with the desired state
    NeedsUpdate,
    /// Remote must be deleted; the desired state is absent
    NeedsDeletion,
}

impl ResourceStatus {
    /// What the composer does for this outcome
    pub fn action(self) -> FacetAction {
        match self {
            ResourceStatus::Updated => FacetAction::None,
            ResourceStatus::NeedsUpdate => FacetAction::CreateOrUpdate,
            ResourceStatus::NeedsDeletion => FacetAction::Delete,
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceStatus::Updated => write!(f, "Updated"),
            ResourceStatus::NeedsUpdate => write!(f, "NeedsUpdate"),
            ResourceStatus::NeedsDeletion => write!(f, "NeedsDeletion"),
        }
    }
}

/// Remote mutation chosen for an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetAction {
    None,
    CreateOrUpdate,
    Delete,
}

/// Outcome plus the first differing field, when the comparator found one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: ResourceStatus,
    pub difference: Option<String>,
}

impl Verdict {
    fn of(status: ResourceStatus) -> Self {
        Self {
            status,
            difference: None,
        }
    }
}

/// Derive the outcome for one facet
pub fn derive_status<R: Serialize>(
    desired: Option<&R>,
    observed: Option<&R>,
    supports_delete: bool,
    comparator: &Comparator,
) -> Verdict {
    match (desired, observed) {
        (None, None) => Verdict::of(ResourceStatus::Updated),
        (None, Some(_)) if supports_delete => Verdict::of(ResourceStatus::NeedsDeletion),
        (Some(_), None) => Verdict::of(ResourceStatus::NeedsUpdate),
        _ => match comparator.first_difference(&desired, &observed) {
            None => Verdict::of(ResourceStatus::Updated),
            difference => Verdict {
                status: ResourceStatus::NeedsUpdate,
                difference,
            },
        },
    }
}
