use anyhow::Context;
use aws_config::{defaults, BehaviorVersion};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{Builder as S3ConfigBuilder, Region},
    presigning::PresigningConfig,
    Client,
};
use aws_smithy_types::byte_stream::ByteStream;
use axum::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::config::AppConfig;

/// Where uploaded idea documents live. Handlers only ever see this trait,
/// so tests can swap in a recording fake and the upload workflow never
/// needs a reachable object store.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Durably store `body` under `key`. The database reference to `key`
    /// must not be written before this returns Ok.
    async fn store(&self, key: &str, body: Bytes, content_type: &str) -> anyhow::Result<()>;

    /// Remove a stored object; the compensating action when the link step
    /// fails after the bytes were written.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;

    /// Short-lived presigned GET URL for a stored object.
    async fn download_url(&self, key: &str, expires_secs: u64) -> anyhow::Result<String>;
}

/// S3-compatible backend (MinIO in dev, any S3 endpoint in prod).
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
    bucket: String,
}

impl ObjectStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let creds = Credentials::new(
            &config.minio_access_key,
            &config.minio_secret_key,
            None,
            None,
            "static",
        );
        let shared = defaults(BehaviorVersion::latest())
            .region(Region::new("us-east-1".to_string()))
            .credentials_provider(creds)
            .endpoint_url(&config.minio_endpoint)
            .load()
            .await;

        // MinIO serves buckets path-style, not as subdomains.
        let s3_config = S3ConfigBuilder::from(&shared)
            .endpoint_url(&config.minio_endpoint)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.minio_bucket.clone(),
        })
    }
}

#[async_trait]
impl ArtifactStore for ObjectStore {
    async fn store(&self, key: &str, body: Bytes, content_type: &str) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .context("s3 put_object")?;
        debug!(key, "artifact stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .context("s3 delete_object")?;
        debug!(key, "artifact removed");
        Ok(())
    }

    async fn download_url(&self, key: &str, expires_secs: u64) -> anyhow::Result<String> {
        let presigning = PresigningConfig::expires_in(std::time::Duration::from_secs(expires_secs))
            .context("presigning config")?;
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .context("s3 presign get_object")?;
        Ok(presigned.uri().to_string())
    }
}
