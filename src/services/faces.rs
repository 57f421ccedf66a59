use async_trait::async_trait;
use aws_sdk_rekognition::error::ProvideErrorMetadata;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;
use tracing::debug;

use crate::utils::error::ServiceError;

/// One face reported by the detection operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceObservation {
    pub confidence: Option<f32>,
}

/// One candidate returned by a collection search.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    pub face_id: String,
    pub similarity: Option<f32>,
}

/// Face detection and collection search, delegated to the managed
/// recognition service. The search is scoped to a single collection fixed
/// at construction time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaceEngine: Send + Sync {
    async fn detect_faces(&self, image: &[u8]) -> Result<Vec<FaceObservation>, ServiceError>;

    async fn search_faces(&self, image: &[u8]) -> Result<Vec<FaceMatch>, ServiceError>;
}

pub struct RekognitionEngine {
    client: aws_sdk_rekognition::Client,
    collection_id: String,
}

impl RekognitionEngine {
    pub fn new(client: aws_sdk_rekognition::Client, collection_id: impl Into<String>) -> Self {
        Self {
            client,
            collection_id: collection_id.into(),
        }
    }
}

#[async_trait]
impl FaceEngine for RekognitionEngine {
    async fn detect_faces(&self, image: &[u8]) -> Result<Vec<FaceObservation>, ServiceError> {
        let output = self
            .client
            .detect_faces()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                // InvalidParameterException is the service's "unsuitable
                // input" class for face operations.
                Some(e) if e.is_invalid_parameter_exception() => ServiceError::Validation,
                Some(e) => ServiceError::Upstream(
                    e.message().unwrap_or("face detection failed").to_string(),
                ),
                None => ServiceError::Upstream(err.to_string()),
            })?;

        let faces: Vec<FaceObservation> = output
            .face_details()
            .iter()
            .map(|detail| FaceObservation {
                confidence: detail.confidence(),
            })
            .collect();

        debug!("Detection reported {} face(s)", faces.len());
        Ok(faces)
    }

    async fn search_faces(&self, image: &[u8]) -> Result<Vec<FaceMatch>, ServiceError> {
        let output = self
            .client
            .search_faces_by_image()
            .collection_id(&self.collection_id)
            .image(Image::builder().bytes(Blob::new(image)).build())
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(e) if e.is_invalid_parameter_exception() => ServiceError::Validation,
                Some(e) => ServiceError::Upstream(
                    e.message().unwrap_or("face search failed").to_string(),
                ),
                None => ServiceError::Upstream(err.to_string()),
            })?;

        let matches: Vec<FaceMatch> = output
            .face_matches()
            .iter()
            .filter_map(|candidate| {
                let face_id = candidate.face()?.face_id()?.to_string();
                Some(FaceMatch {
                    face_id,
                    similarity: candidate.similarity(),
                })
            })
            .collect();

        debug!(
            "Search of collection {} returned {} match(es)",
            self.collection_id,
            matches.len()
        );
        Ok(matches)
    }
}
