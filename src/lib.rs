pub mod api;
pub mod services;
pub mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{web, App, HttpServer};
use aws_config::{BehaviorVersion, Region};
use tracing::info;

use crate::{
    services::{
        face_index::{DynamoFaceIndex, FaceIndex},
        faces::{FaceEngine, RekognitionEngine},
        object_store::{ProfileStore, S3ProfileStore},
    },
    utils::{
        config::Config,
        error::{AppError, Result},
    },
};

pub struct Application {
    config: Arc<Config>,
    faces: Arc<dyn FaceEngine>,
    profiles: Arc<dyn ProfileStore>,
    index: Arc<dyn FaceIndex>,
}

impl Application {
    /// Builds the application with real AWS-backed service clients.
    pub async fn new(config: Config) -> Result<Self> {
        info!("Initializing AWS clients for region {}", config.aws.region);
        let aws = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws.region.clone()))
            .load()
            .await;

        let faces: Arc<dyn FaceEngine> = Arc::new(RekognitionEngine::new(
            aws_sdk_rekognition::Client::new(&aws),
            config.recognition.collection_id.clone(),
        ));
        let profiles: Arc<dyn ProfileStore> = Arc::new(S3ProfileStore::new(
            aws_sdk_s3::Client::new(&aws),
            config.enrollment.bucket.clone(),
        ));
        let index: Arc<dyn FaceIndex> = Arc::new(DynamoFaceIndex::new(
            aws_sdk_dynamodb::Client::new(&aws),
            config.recognition.table.clone(),
        ));

        Ok(Self::with_services(config, faces, profiles, index))
    }

    /// Wires the application with explicitly constructed service clients;
    /// tests substitute doubles here.
    pub fn with_services(
        config: Config,
        faces: Arc<dyn FaceEngine>,
        profiles: Arc<dyn ProfileStore>,
        index: Arc<dyn FaceIndex>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            faces,
            profiles,
            index,
        }
    }

    /// Binds the HTTP listener and serves until shutdown.
    pub async fn run(self) -> Result<()> {
        let faces = web::Data::from(self.faces.clone());
        let profiles = web::Data::from(self.profiles.clone());
        let index = web::Data::from(self.index.clone());
        let max_upload = self.config.server.max_upload_bytes;

        info!(
            "Starting API server on {}:{}",
            self.config.server.host, self.config.server.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .app_data(faces.clone())
                .app_data(profiles.clone())
                .app_data(index.clone())
                .app_data(
                    MultipartFormConfig::default()
                        .total_limit(max_upload)
                        .memory_limit(max_upload),
                )
                .configure(api::handlers::routes)
        })
        .bind((self.config.server.host.as_str(), self.config.server.port))
        .map_err(|e| AppError::Init(format!("Failed to bind API server: {}", e)))?
        .run()
        .await
        .map_err(|e| AppError::Server(e.to_string()))
    }
}
