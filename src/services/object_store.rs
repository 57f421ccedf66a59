use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::utils::error::ServiceError;

/// Write-only storage for enrolled profile images. The display name rides
/// along as object metadata; last write for a key wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn put_profile(
        &self,
        key: &str,
        image: Vec<u8>,
        full_name: &str,
    ) -> Result<(), ServiceError>;
}

pub struct S3ProfileStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ProfileStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ProfileStore for S3ProfileStore {
    async fn put_profile(
        &self,
        key: &str,
        image: Vec<u8>,
        full_name: &str,
    ) -> Result<(), ServiceError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(image))
            .metadata("full_name", full_name)
            .send()
            .await
            .map_err(|err| {
                let message = err
                    .as_service_error()
                    .and_then(|e| e.message())
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                ServiceError::Upstream(message)
            })?;

        debug!("Stored profile image {} in bucket {}", key, self.bucket);
        Ok(())
    }
}
