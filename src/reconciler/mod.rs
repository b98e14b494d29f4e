// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bucket Reconciler
//!
//! Composes the facet controllers of a bucket into one reconciliation pass:
//!
//! ```text
//! reconcile(bucket)
//!     ↓  per-bucket lock
//! LateInitialize  (every facet, sequentially; mutates the bucket)
//!     ↓
//! Observe         (every facet; sequential or concurrent)
//!     ↓
//! Apply           NeedsUpdate → CreateOrUpdate
//!                 NeedsDeletion → Delete
//!     ↓
//! ReconcileReport (per-facet status, action and error)
//! ```
//!
//! # Failure Policy
//!
//! - A late-initialization failure stops the pass before anything is observed
//!   and leaves the desired state as it was before the pass
//! - A failing facet never prevents the other facets from being applied
//! - Nothing is retried; the caller re-runs the pass on its own schedule
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cim_bucket_facets::client::InMemoryBucketClient;
//! use cim_bucket_facets::domain::{Bucket, LoggingConfiguration};
//! use cim_bucket_facets::reconciler::{BucketReconciler, ReconcilerConfig};
//!
//! # tokio_test::block_on(async {
//! let client = Arc::new(InMemoryBucketClient::new());
//! let reconciler = BucketReconciler::for_client(client, ReconcilerConfig::default());
//!
//! let mut bucket = Bucket::new("assets").with_logging(LoggingConfiguration::to_bucket("logs"));
//! let report = reconciler.reconcile(&mut bucket).await;
//! assert!(report.is_success());
//! # });
//! ```

pub mod config;
pub mod locks;
pub mod report;

pub use config::ReconcilerConfig;
pub use locks::BucketLocks;
pub use report::{BucketObservation, FacetObservation, FacetReport, ReconcileReport};

use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::BucketClient;
use crate::domain::Bucket;
use crate::errors::{FacetError, FacetOperation, FacetResult};
use crate::facet::{subresource_clients, FacetAction, SubresourceClient};

/// Runs every facet controller of a bucket
pub struct BucketReconciler {
    facets: Vec<Box<dyn SubresourceClient>>,
    config: ReconcilerConfig,
    locks: BucketLocks,
}

impl BucketReconciler {
    /// Reconciler over an explicit, ordered list of facets
    pub fn new(facets: Vec<Box<dyn SubresourceClient>>, config: ReconcilerConfig) -> Self {
        Self {
            facets,
            config,
            locks: BucketLocks::new(),
        }
    }

    /// Reconciler over every known facet, backed by `client`
    pub fn for_client(client: Arc<dyn BucketClient>, config: ReconcilerConfig) -> Self {
        Self::new(subresource_clients(client), config)
    }

    /// Facet names in reconciliation order
    pub fn facet_names(&self) -> Vec<&'static str> {
        self.facets.iter().map(|facet| facet.name()).collect()
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Bound `operation` by the configured deadline
    async fn bounded<T, Fut>(
        &self,
        facet: &'static str,
        operation: FacetOperation,
        fut: Fut,
    ) -> FacetResult<T>
    where
        Fut: Future<Output = FacetResult<T>>,
    {
        match self.config.operation_timeout() {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .unwrap_or_else(|_| Err(FacetError::Timeout { facet, operation })),
            None => fut.await,
        }
    }

    /// Run every facet's LateInitialize in order
    ///
    /// Returns whether the desired state changed. Stops at the first error,
    /// undoing whatever earlier facets filled in.
    pub async fn late_initialize(&self, bucket: &mut Bucket) -> FacetResult<bool> {
        let before = bucket.spec.clone();
        for facet in &self.facets {
            let result = self
                .bounded(
                    facet.name(),
                    FacetOperation::LateInitialize,
                    facet.late_initialize(bucket),
                )
                .await;
            if let Err(e) = result {
                bucket.spec = before;
                return Err(e);
            }
        }
        Ok(bucket.spec != before)
    }

    /// Observe every facet
    pub async fn observe(&self, bucket: &Bucket) -> BucketObservation {
        let observations = self.facets.iter().map(|facet| async move {
            let result = self
                .bounded(facet.name(), FacetOperation::Observe, facet.observe(bucket))
                .await;
            if let Err(e) = &result {
                warn!(
                    "Observing {} of bucket {} failed: {}",
                    facet.name(),
                    bucket.external_name(),
                    e
                );
            }
            FacetObservation {
                facet: facet.name(),
                result,
            }
        });

        let facets = if self.config.concurrent_facets {
            join_all(observations).await
        } else {
            let mut facets = Vec::with_capacity(self.facets.len());
            for observation in observations {
                facets.push(observation.await);
            }
            facets
        };
        BucketObservation { facets }
    }

    /// Act on an observation of `bucket`
    ///
    /// `observation` must come from [`Self::observe`] on this reconciler;
    /// entries are matched to facets by position.
    pub async fn apply(
        &self,
        bucket: &Bucket,
        observation: &BucketObservation,
    ) -> Vec<FacetReport> {
        let reports = self
            .facets
            .iter()
            .zip(&observation.facets)
            .map(|(facet, observed)| self.apply_one(facet.as_ref(), bucket, observed));

        if self.config.concurrent_facets {
            join_all(reports).await
        } else {
            let mut facets = Vec::with_capacity(self.facets.len());
            for report in reports {
                facets.push(report.await);
            }
            facets
        }
    }

    async fn apply_one(
        &self,
        facet: &dyn SubresourceClient,
        bucket: &Bucket,
        observed: &FacetObservation,
    ) -> FacetReport {
        let status = match &observed.result {
            Ok(status) => *status,
            Err(e) => {
                return FacetReport {
                    facet: facet.name(),
                    status: None,
                    action: FacetAction::None,
                    error: Some(e.to_string()),
                }
            }
        };

        let action = status.action();
        let result = match action {
            FacetAction::None => Ok(()),
            FacetAction::CreateOrUpdate => {
                self.bounded(
                    facet.name(),
                    FacetOperation::CreateOrUpdate,
                    facet.create_or_update(bucket),
                )
                .await
            }
            FacetAction::Delete => {
                self.bounded(facet.name(), FacetOperation::Delete, facet.delete(bucket))
                    .await
            }
        };
        if let Err(e) = &result {
            warn!(
                "{:?} of {} for bucket {} failed: {}",
                action,
                facet.name(),
                bucket.external_name(),
                e
            );
        }

        FacetReport {
            facet: facet.name(),
            status: Some(status),
            action,
            error: result.err().map(|e| e.to_string()),
        }
    }

    /// One full pass: LateInitialize, Observe, then apply
    ///
    /// Passes over the same bucket are serialized by external name.
    pub async fn reconcile(&self, bucket: &mut Bucket) -> ReconcileReport {
        let _guard = self.locks.acquire(bucket.external_name()).await;
        let mut report = ReconcileReport::start(bucket.external_name());

        if self.config.late_initialize {
            match self.late_initialize(bucket).await {
                Ok(changed) => report.late_initialized = changed,
                Err(e) => {
                    warn!(
                        "Late initialization of bucket {} failed: {}",
                        bucket.external_name(),
                        e
                    );
                    report.error = Some(e.to_string());
                    return report.finish();
                }
            }
        }

        let observation = self.observe(bucket).await;
        report.facets = self.apply(bucket, &observation).await;
        let report = report.finish();

        info!(
            "Reconciled bucket {} (pass {}): {} facet(s), {} failed",
            report.bucket,
            report.pass_id,
            report.facets.len(),
            report.failed_facets().len()
        );
        report
    }
}
