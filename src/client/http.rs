// Copyright (c) 2025 - Cowboy AI, Inc.

//! REST Bucket Client
//!
//! Talks to a bucket configuration service over HTTP:
//!
//! ```text
//! GET    {base}/buckets/{name}/logging      → LoggingEnabled | 204 | 404
//! PUT    {base}/buckets/{name}/logging      ← BucketLoggingStatus
//! GET    {base}/buckets/{name}/encryption   → ServerSideEncryptionConfiguration | 404
//! PUT    {base}/buckets/{name}/encryption   ← ServerSideEncryptionConfiguration
//! DELETE {base}/buckets/{name}/encryption
//! ```
//!
//! `404 Not Found` is the recognized "not configured" condition. `204 No
//! Content` on a read means the facet is absent (logging disabled) and reads
//! as `Ok(None)`.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_bucket_facets::client::{BucketClient, HttpBucketClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpBucketClient::new(HttpClientConfig {
//!         base_url: "http://localhost:9000".to_string(),
//!         api_token: "your-token-here".to_string(),
//!         timeout_secs: 10,
//!     })?;
//!
//!     let logging = client.get_bucket_logging("assets").await?;
//!     println!("{logging:?}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::types::{
    LoggingEnabled, PutBucketEncryptionInput, PutBucketLoggingInput,
    ServerSideEncryptionConfiguration,
};
use super::{BucketClient, RemoteError, RemoteResult};

/// Configuration for the REST bucket API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Service base URL (e.g., "http://localhost:9000")
    pub base_url: String,

    /// Bearer token sent with every request
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            api_token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// [`BucketClient`] over HTTP
pub struct HttpBucketClient {
    config: HttpClientConfig,
    client: Client,
}

impl HttpBucketClient {
    /// Create a client; no request is sent
    pub fn new(config: HttpClientConfig) -> RemoteResult<Self> {
        info!("Using bucket API at {}", config.base_url);

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", config.api_token)
                .parse::<reqwest::header::HeaderValue>()
                .map_err(|e| RemoteError::Unavailable(format!("Invalid API token: {}", e)))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                RemoteError::Unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn url(&self, bucket: &str, facet: &str) -> String {
        format!(
            "{}/buckets/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(bucket),
            facet
        )
    }

    async fn read<T: DeserializeOwned>(&self, url: &str) -> RemoteResult<Option<T>> {
        let response = self.client.get(url).send().await.map_err(transport)?;
        if let Some(absent) = read_without_body(response.status()) {
            return absent.map(|()| None);
        }
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map(Some)
                .map_err(|e| RemoteError::Malformed(e.to_string())),
            _ => Err(rejected(response).await),
        }
    }

    async fn write<T: Serialize + Sync>(&self, url: &str, body: &T) -> RemoteResult<()> {
        let response = self.client.put(url).json(body).send().await.map_err(transport)?;
        if response.status().is_success() {
            debug!("PUT {} succeeded", url);
            Ok(())
        } else {
            Err(rejected(response).await)
        }
    }
}

fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Unavailable(err.to_string())
}

async fn rejected(response: Response) -> RemoteError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    RemoteError::Rejected { status, message }
}

#[async_trait]
impl BucketClient for HttpBucketClient {
    async fn get_bucket_logging(&self, bucket: &str) -> RemoteResult<Option<LoggingEnabled>> {
        self.read(&self.url(bucket, "logging")).await
    }

    async fn put_bucket_logging(&self, input: PutBucketLoggingInput) -> RemoteResult<()> {
        self.write(&self.url(&input.bucket, "logging"), &input.bucket_logging_status)
            .await
    }

    async fn get_bucket_encryption(
        &self,
        bucket: &str,
    ) -> RemoteResult<Option<ServerSideEncryptionConfiguration>> {
        self.read(&self.url(bucket, "encryption")).await
    }

    async fn put_bucket_encryption(&self, input: PutBucketEncryptionInput) -> RemoteResult<()> {
        self.write(
            &self.url(&input.bucket, "encryption"),
            &input.server_side_encryption_configuration,
        )
        .await
    }

    async fn delete_bucket_encryption(&self, bucket: &str) -> RemoteResult<()> {
        let url = self.url(bucket, "encryption");
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(RemoteError::NotConfigured),
            status if status.is_success() => Ok(()),
            _ => Err(rejected(response).await),
        }
    }
}

/// Outcome of a read whose status alone decides it; `Ok(())` means absent
fn read_without_body(status: StatusCode) -> Option<RemoteResult<()>> {
    match status {
        StatusCode::NOT_FOUND => Some(Err(RemoteError::NotConfigured)),
        StatusCode::NO_CONTENT => Some(Ok(())),
        _ => None,
    }
}
