// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reconciliation results

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::FacetResult;
use crate::facet::{FacetAction, ResourceStatus};

/// Outcome of observing one facet
#[derive(Debug)]
pub struct FacetObservation {
    pub facet: &'static str,
    pub result: FacetResult<ResourceStatus>,
}

/// Outcome of observing every facet of a bucket, in facet order
#[derive(Debug, Default)]
pub struct BucketObservation {
    pub facets: Vec<FacetObservation>,
}

impl BucketObservation {
    /// True only when every facet observed `Updated`
    pub fn is_up_to_date(&self) -> bool {
        self.facets
            .iter()
            .all(|facet| matches!(facet.result, Ok(ResourceStatus::Updated)))
    }

    /// Outcome of the named facet, if it was observed without error
    pub fn status(&self, facet: &str) -> Option<ResourceStatus> {
        self.facets
            .iter()
            .find(|observation| observation.facet == facet)
            .and_then(|observation| observation.result.as_ref().ok().copied())
    }
}

/// What happened to one facet during a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetReport {
    pub facet: &'static str,

    /// Observed outcome; `None` when observation failed
    pub status: Option<ResourceStatus>,

    /// Remote mutation attempted
    pub action: FacetAction,

    /// Failure of observation or of the mutation
    pub error: Option<String>,
}

impl FacetReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Resource-level result of one reconciliation pass
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub pass_id: Uuid,
    pub bucket: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Whether late initialization changed the desired state
    pub late_initialized: bool,

    /// Failure that stopped the pass before any facet was observed
    pub error: Option<String>,

    pub facets: Vec<FacetReport>,
}

impl ReconcileReport {
    pub(crate) fn start(bucket: &str) -> Self {
        let now = Utc::now();
        Self {
            pass_id: Uuid::now_v7(),
            bucket: bucket.to_string(),
            started_at: now,
            finished_at: now,
            late_initialized: false,
            error: None,
            facets: Vec::new(),
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// No error anywhere in the pass
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.facets.iter().all(FacetReport::is_success)
    }

    /// Successful and no facet needed a mutation
    pub fn was_up_to_date(&self) -> bool {
        self.is_success() && self.facets.iter().all(|f| f.action == FacetAction::None)
    }

    /// Facets that reported an error
    pub fn failed_facets(&self) -> Vec<&'static str> {
        self.facets
            .iter()
            .filter(|f| !f.is_success())
            .map(|f| f.facet)
            .collect()
    }
}
