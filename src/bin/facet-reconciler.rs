// Copyright (c) 2025 - Cowboy AI, Inc.
//! Facet Reconciler Service
//!
//! Reads declared bucket state from a JSON file and converges every facet of
//! every bucket toward it through the REST bucket API:
//! - Bucket file → LateInitialize → Observe → CreateOrUpdate / Delete → Bucket API
//!
//! Run with: cargo run --bin facet-reconciler --features http -- buckets.json
//!
//! Prerequisites:
//! 1. Bucket API accessible (via BUCKET_API_URL environment variable)
//! 2. Bucket API token set (via BUCKET_API_TOKEN environment variable)
//! 3. Bucket file path given as the first argument or via BUCKET_FILE
//!
//! Late-initialized state is written back to the bucket file. With
//! FACET_INTERVAL_SECS set, passes repeat until interrupted.

use anyhow::{Context, Result};
use cim_bucket_facets::{
    domain::Bucket,
    reconciler::{BucketReconciler, ReconcilerConfig},
    HttpBucketClient, HttpClientConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Bucket file contents: one bucket or a list
///
/// Written back in the shape it was read in.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum BucketFile {
    Many(Vec<Bucket>),
    One(Bucket),
}

impl BucketFile {
    fn buckets_mut(&mut self) -> &mut [Bucket] {
        match self {
            BucketFile::Many(buckets) => buckets,
            BucketFile::One(bucket) => std::slice::from_mut(bucket),
        }
    }
}

/// Parse an optional number of seconds held in variable `name`
fn parse_secs(name: &str, value: Option<String>) -> Result<Option<u64>> {
    value
        .map(|s| s.parse::<u64>())
        .transpose()
        .with_context(|| format!("{name} must be a number of seconds"))
}

/// Configuration for the reconciler service
#[derive(Debug, Clone)]
struct ServiceConfig {
    /// Declared bucket state
    bucket_file: PathBuf,
    /// Pause between passes; a single pass when unset
    interval: Option<Duration>,
    /// REST API configuration
    api: HttpClientConfig,
    /// Pass configuration
    reconciler: ReconcilerConfig,
}

impl ServiceConfig {
    /// Load configuration from arguments and environment variables
    fn from_env() -> Result<Self> {
        let bucket_file = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("BUCKET_FILE").ok())
            .map(PathBuf::from)
            .context("No bucket file given. Pass a path or set BUCKET_FILE")?;

        let interval = parse_secs(
            "FACET_INTERVAL_SECS",
            std::env::var("FACET_INTERVAL_SECS").ok(),
        )?
        .map(Duration::from_secs);

        let defaults = HttpClientConfig::default();
        let api = HttpClientConfig {
            base_url: std::env::var("BUCKET_API_URL").unwrap_or(defaults.base_url),
            api_token: std::env::var("BUCKET_API_TOKEN").context("BUCKET_API_TOKEN not set")?,
            timeout_secs: parse_secs(
                "BUCKET_API_TIMEOUT_SECS",
                std::env::var("BUCKET_API_TIMEOUT_SECS").ok(),
            )?
            .unwrap_or(defaults.timeout_secs),
        };

        let reconciler =
            ReconcilerConfig::from_env().context("Invalid reconciler configuration")?;

        Ok(Self {
            bucket_file,
            interval,
            api,
            reconciler,
        })
    }
}

fn load_buckets(path: &Path) -> Result<BucketFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bucket file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse bucket file {}", path.display()))
}

fn save_buckets(path: &Path, file: &BucketFile) -> Result<()> {
    let raw = serde_json::to_string_pretty(file).context("Failed to serialize buckets")?;
    std::fs::write(path, raw)
        .with_context(|| format!("Failed to write bucket file {}", path.display()))
}

/// One pass over every bucket; returns the number of failed buckets
async fn run_pass(reconciler: &BucketReconciler, config: &ServiceConfig) -> Result<usize> {
    let mut file = load_buckets(&config.bucket_file)?;
    let buckets = file.buckets_mut();
    info!("📋 Reconciling {} bucket(s)", buckets.len());

    let mut failed = 0;
    let mut late_initialized = false;
    for bucket in buckets.iter_mut() {
        let report = reconciler.reconcile(bucket).await;
        late_initialized |= report.late_initialized;

        if report.is_success() {
            let outcome = if report.was_up_to_date() {
                "up to date"
            } else {
                "converged"
            };
            info!("✅ {}: {}", report.bucket, outcome);
        } else {
            failed += 1;
            error!("❌ {}: failed facets {:?}", report.bucket, report.failed_facets());
        }
        println!("{}", serde_json::to_string(&report).context("Failed to serialize report")?);
    }

    if late_initialized {
        info!("💾 Writing late-initialized state to {}", config.bucket_file.display());
        save_buckets(&config.bucket_file, &file)?;
    }
    Ok(failed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Starting Facet Reconciler");

    // Load configuration
    let config = ServiceConfig::from_env()?;
    info!("📋 Configuration loaded:");
    info!("  - Bucket file: {}", config.bucket_file.display());
    info!("  - Bucket API URL: {}", config.api.base_url);
    info!("  - Late initialization: {}", config.reconciler.late_initialize);
    info!("  - Concurrent facets: {}", config.reconciler.concurrent_facets);

    let client = HttpBucketClient::new(config.api.clone())
        .context("Failed to create bucket API client")?;
    let reconciler = BucketReconciler::for_client(Arc::new(client), config.reconciler.clone());
    info!("🔧 Facets: {:?}", reconciler.facet_names());

    let Some(interval) = config.interval else {
        let failed = run_pass(&reconciler, &config).await?;
        if failed > 0 {
            anyhow::bail!("{} bucket(s) failed to reconcile", failed);
        }
        return Ok(());
    };

    loop {
        match run_pass(&reconciler, &config).await {
            Ok(0) => {}
            Ok(failed) => warn!("⚠️ {} bucket(s) failed; retrying next pass", failed),
            Err(e) => error!("❌ Pass failed: {:#}", e),
        }
        tokio::time::sleep(interval).await;
    }
}
