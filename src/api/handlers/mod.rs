pub mod enrollment;
pub mod recognition;

use actix_web::web;

const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/upload_new_profile")
            .route(web::put().to(enrollment::upload_new_profile)),
    )
    .service(
        web::resource("/upload_for_recognition")
            .route(web::post().to(recognition::upload_for_recognition)),
    );
}

/// The final extension must be one of the allowed image types,
/// case-insensitive.
pub(crate) fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
