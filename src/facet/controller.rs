// Copyright (c) 2025 - Cowboy AI, Inc.
//! Generic facet controller
//!
//! Implements the four operations once for every [`Facet`]. The only state is
//! the remote client; everything else is re-derived on each call.

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

use super::compare::Comparator;
use super::status::{derive_status, ResourceStatus};
use super::{Facet, SubresourceClient};
use crate::client::{BucketClient, RemoteError};
use crate::domain::Bucket;
use crate::errors::{FacetError, FacetOperation, FacetResult};

/// Controller for facet `F`
pub struct FacetController<F: Facet> {
    client: Arc<dyn BucketClient>,
    comparator: Comparator,
    _facet: PhantomData<fn() -> F>,
}

impl<F: Facet> FacetController<F> {
    /// Create a controller using `client` for remote calls
    pub fn new(client: Arc<dyn BucketClient>) -> Self {
        Self {
            client,
            comparator: Comparator::ignoring(F::IGNORED_FIELDS),
            _facet: PhantomData,
        }
    }

    /// Read the remote state; "not configured" reads as absent
    async fn read(&self, bucket: &Bucket) -> FacetResult<Option<F::Remote>> {
        match F::get(self.client.as_ref(), bucket.external_name()).await {
            Ok(observed) => Ok(observed),
            Err(RemoteError::NotConfigured) => Ok(None),
            Err(source) => Err(FacetError::ReadFailed {
                facet: F::NAME,
                message: F::GET_FAILED,
                source,
            }),
        }
    }

    fn write_failed(
        operation: FacetOperation,
        message: &'static str,
        source: RemoteError,
    ) -> FacetError {
        FacetError::WriteFailed {
            facet: F::NAME,
            operation,
            message,
            source,
        }
    }
}

#[async_trait]
impl<F: Facet> SubresourceClient for FacetController<F> {
    fn name(&self) -> &'static str {
        F::NAME
    }

    async fn late_initialize(&self, bucket: &mut Bucket) -> FacetResult<()> {
        let Some(observed) = self.read(bucket).await? else {
            // Nothing remote to initialize from
            return Ok(());
        };

        debug!("called LateInitialize for {}", F::NAME);

        let slot = F::desired_mut(&mut bucket.spec);
        let was_unset = slot.is_none();
        let desired = slot.get_or_insert_with(Default::default);
        let changed = F::late_initialize(desired, &observed);
        if was_unset && !changed {
            // Nothing adoptable remotely; stay unmanaged
            *slot = None;
        }
        if changed {
            debug!("late-initialized {} of bucket {}", F::NAME, bucket.name);
        }
        Ok(())
    }

    async fn observe(&self, bucket: &Bucket) -> FacetResult<ResourceStatus> {
        let observed = self.read(bucket).await?;
        let projected = F::desired(&bucket.spec).map(F::to_remote);

        let verdict = derive_status(
            projected.as_ref(),
            observed.as_ref(),
            F::SUPPORTS_DELETE,
            &self.comparator,
        );
        if let Some(path) = &verdict.difference {
            debug!("{} of bucket {} drifted at {}", F::NAME, bucket.external_name(), path);
        }
        Ok(verdict.status)
    }

    async fn create_or_update(&self, bucket: &Bucket) -> FacetResult<()> {
        let Some(desired) = F::desired(&bucket.spec) else {
            return Ok(());
        };
        F::validate(desired).map_err(|source| FacetError::InvalidDesiredState {
            facet: F::NAME,
            source,
        })?;

        let name = bucket.external_name();
        F::replace(self.client.as_ref(), name, F::to_remote(desired))
            .await
            .map_err(|e| Self::write_failed(FacetOperation::CreateOrUpdate, F::PUT_FAILED, e))?;

        info!("Replaced {} configuration of bucket {}", F::NAME, name);
        Ok(())
    }

    async fn delete(&self, bucket: &Bucket) -> FacetResult<()> {
        if !F::SUPPORTS_DELETE {
            debug!("{} has no delete call; nothing to do", F::NAME);
            return Ok(());
        }

        let name = bucket.external_name();
        match F::delete(self.client.as_ref(), name).await {
            // Already gone
            Ok(()) | Err(RemoteError::NotConfigured) => {
                info!("Deleted {} configuration of bucket {}", F::NAME, name);
                Ok(())
            }
            Err(e) => Err(Self::write_failed(FacetOperation::Delete, F::DELETE_FAILED, e)),
        }
    }
}
