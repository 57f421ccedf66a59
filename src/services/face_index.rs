use async_trait::async_trait;
use aws_sdk_dynamodb::error::ProvideErrorMetadata;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::warn;

use crate::utils::error::ServiceError;

/// An entry in the face index table, populated by the external indexing
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFace {
    pub face_id: String,
    pub full_name: String,
}

/// Read-only point lookups from face id to display name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaceIndex: Send + Sync {
    async fn lookup(&self, face_id: &str) -> Result<Option<IndexedFace>, ServiceError>;
}

pub struct DynamoFaceIndex {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoFaceIndex {
    pub fn new(client: aws_sdk_dynamodb::Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl FaceIndex for DynamoFaceIndex {
    async fn lookup(&self, face_id: &str) -> Result<Option<IndexedFace>, ServiceError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("face_id", AttributeValue::S(face_id.to_string()))
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

        let Some(item) = output.item else {
            return Ok(None);
        };

        let full_name = item
            .get("full_name")
            .and_then(|attr| attr.as_s().ok())
            .cloned();
        match full_name {
            Some(full_name) => {
                let face_id = item
                    .get("face_id")
                    .and_then(|attr| attr.as_s().ok())
                    .cloned()
                    .unwrap_or_else(|| face_id.to_string());
                Ok(Some(IndexedFace { face_id, full_name }))
            }
            None => {
                // An item without a name is useless to callers; treat it
                // the same as a missing entry.
                warn!("Index entry for {} has no full_name attribute", face_id);
                Ok(None)
            }
        }
    }
}
