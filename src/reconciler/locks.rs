// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-bucket serialization
//!
//! Facet controllers take no locks; two passes over the same bucket must not
//! overlap. Passes over different buckets proceed independently.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async lock per bucket external name
#[derive(Debug, Default)]
pub struct BucketLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl BucketLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `bucket`
    ///
    /// Access is released when the guard is dropped.
    pub async fn acquire(&self, bucket: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Drop locks nobody holds or waits for
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(bucket.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of buckets currently tracked
    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
