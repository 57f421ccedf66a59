use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{web::Data, HttpResponse};
use tracing::{error, info, warn};

use crate::{
    api::types::{EnrollmentResponse, ErrorBody},
    services::{faces::FaceEngine, object_store::ProfileStore},
    utils::error::ServiceError,
};

use super::allowed_file;

const MISSING_FIELDS: &str = "Please supply a full name and an image. ";
const BAD_EXTENSION: &str = "File type not allowed. ";
const ONE_FACE_REQUIRED: &str = "There should be only 1 face in the image!";
const FACE_COUNT_MISMATCH: &str = "Image should have one face! ";
const STORE_FAILED: &str = "Could not store the uploaded image.";

#[derive(Debug, MultipartForm)]
pub struct EnrollmentForm {
    pub image: Option<Bytes>,
    pub full_name: Option<Text<String>>,
}

/// PUT /upload_new_profile
///
/// Validates the upload locally, confirms exactly one face with the face
/// engine, then writes the original bytes to the profile store keyed by
/// the uploaded filename.
pub async fn upload_new_profile(
    engine: Data<dyn FaceEngine>,
    store: Data<dyn ProfileStore>,
    MultipartForm(form): MultipartForm<EnrollmentForm>,
) -> HttpResponse {
    let (image, full_name) = match (form.image, form.full_name) {
        (Some(image), Some(full_name)) => (image, full_name.into_inner()),
        _ => return HttpResponse::BadRequest().json(ErrorBody::new(MISSING_FIELDS)),
    };

    let filename = image.file_name.as_deref().unwrap_or("");
    if !allowed_file(filename) {
        return HttpResponse::BadRequest().json(ErrorBody::new(BAD_EXTENSION));
    }

    let faces = match engine.detect_faces(&image.data).await {
        Ok(faces) => faces,
        Err(ServiceError::Validation) => {
            return HttpResponse::BadRequest().json(ErrorBody::new(ONE_FACE_REQUIRED));
        }
        Err(ServiceError::Upstream(message)) => {
            warn!("Face detection failed: {}", message);
            return HttpResponse::BadRequest().json(ErrorBody::new(message));
        }
    };

    if faces.len() != 1 {
        info!("Rejected enrollment image with {} face(s)", faces.len());
        return HttpResponse::BadRequest().json(ErrorBody::new(FACE_COUNT_MISMATCH));
    }

    if let Err(e) = store
        .put_profile(filename, image.data.to_vec(), &full_name)
        .await
    {
        error!("Failed to store profile image {}: {}", filename, e);
        return HttpResponse::InternalServerError().json(ErrorBody::new(STORE_FAILED));
    }

    info!("Enrolled profile image {} for {}", filename, full_name);
    HttpResponse::Created().json(EnrollmentResponse {
        message: format!("Image of {full_name} has been uploaded! "),
    })
}
