use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{web::Data, HttpResponse};
use tracing::{error, info, warn};

use crate::{
    api::types::{ErrorBody, FaceMatchEntry, MatchOutcome, RecognitionResponse},
    services::{face_index::FaceIndex, faces::FaceEngine},
    utils::error::ServiceError,
};

use super::allowed_file;

const MISSING_IMAGE: &str = "Please supply an image! ";
const BAD_EXTENSION: &str = "File type not allowed. ";
const ONE_FACE_REQUIRED: &str = "There should be only 1 face in the image";
const LOOKUP_FAILED: &str = "Could not resolve face matches.";

#[derive(Debug, MultipartForm)]
pub struct RecognitionForm {
    pub image: Option<Bytes>,
}

/// POST /upload_for_recognition
///
/// Searches the configured face collection with the uploaded image and
/// resolves each candidate face id to a display name via the face index,
/// preserving the order the search returned.
pub async fn upload_for_recognition(
    engine: Data<dyn FaceEngine>,
    index: Data<dyn FaceIndex>,
    MultipartForm(form): MultipartForm<RecognitionForm>,
) -> HttpResponse {
    let image = match form.image {
        Some(image) => image,
        None => return HttpResponse::BadRequest().json(ErrorBody::new(MISSING_IMAGE)),
    };

    let filename = image.file_name.as_deref().unwrap_or("");
    if !allowed_file(filename) {
        return HttpResponse::BadRequest().json(ErrorBody::new(BAD_EXTENSION));
    }

    let candidates = match engine.search_faces(&image.data).await {
        Ok(candidates) => candidates,
        Err(ServiceError::Validation) => {
            return HttpResponse::BadRequest().json(ErrorBody::new(ONE_FACE_REQUIRED));
        }
        Err(ServiceError::Upstream(message)) => {
            warn!("Face search failed: {}", message);
            return HttpResponse::BadRequest().json(ErrorBody::new(message));
        }
    };

    let mut entries = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        match index.lookup(&candidate.face_id).await {
            Ok(Some(face)) => entries.push(FaceMatchEntry {
                face_id: face.face_id,
                full_name: face.full_name,
            }),
            // A matched face missing from the index points at a gap in the
            // external indexing pipeline; skip it rather than fail the
            // whole request.
            Ok(None) => {
                warn!("Face {} matched but has no index entry", candidate.face_id);
            }
            Err(e) => {
                error!("Face index lookup failed for {}: {}", candidate.face_id, e);
                return HttpResponse::InternalServerError().json(ErrorBody::new(LOOKUP_FAILED));
            }
        }
    }

    info!(
        "Recognition resolved {} of {} candidate match(es)",
        entries.len(),
        candidates.len()
    );
    HttpResponse::Created().json(RecognitionResponse::from(MatchOutcome::from_entries(entries)))
}
