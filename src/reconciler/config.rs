// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reconciler configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;

/// Environment variable enabling late initialization
pub const ENV_LATE_INITIALIZE: &str = "FACET_LATE_INITIALIZE";
/// Environment variable enabling concurrent facet execution
pub const ENV_CONCURRENT: &str = "FACET_CONCURRENT";
/// Environment variable bounding each facet operation, in seconds
pub const ENV_OPERATION_TIMEOUT_SECS: &str = "FACET_OPERATION_TIMEOUT_SECS";

/// How a reconciliation pass is run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Backfill unset desired fields from the remote state before observing
    #[serde(default = "default_late_initialize")]
    pub late_initialize: bool,

    /// Observe and apply all facets at once instead of one after another
    #[serde(default)]
    pub concurrent_facets: bool,

    /// Deadline for each single facet operation
    #[serde(default)]
    pub operation_timeout_secs: Option<u64>,
}

fn default_late_initialize() -> bool {
    true
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            late_initialize: default_late_initialize(),
            concurrent_facets: false,
            operation_timeout_secs: None,
        }
    }
}

impl ReconcilerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = parse(&lookup, ENV_LATE_INITIALIZE)? {
            config.late_initialize = value;
        }
        if let Some(value) = parse(&lookup, ENV_CONCURRENT)? {
            config.concurrent_facets = value;
        }
        config.operation_timeout_secs = parse(&lookup, ENV_OPERATION_TIMEOUT_SECS)?;
        Ok(config)
    }

    /// Per-operation deadline, if any
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout_secs.map(Duration::from_secs)
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}
