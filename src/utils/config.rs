use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub aws: AwsConfig,
    pub enrollment: EnrollmentConfig,
    pub recognition: RecognitionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentConfig {
    /// Bucket receiving enrolled profile images.
    pub bucket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    /// Face collection searched by the recognition endpoint.
    pub collection_id: String,
    /// Lookup table mapping face ids to display names.
    pub table: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        let config = ConfigLib::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_bytes", 10_485_760)? // 10MB
            .set_default("aws.region", "eu-west-2")?
            .set_default("enrollment.bucket", "facial-recognition-app-upload-bucket")?
            .set_default("recognition.collection_id", "facial-recognition-app")?
            .set_default("recognition.table", "faceprints")?
            // Load from config file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (e.g., APP_SERVER_PORT)
            .add_source(Environment::with_prefix("APP").separator("_"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("Invalid port number".into()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(AppError::Config("max_upload_bytes must be greater than 0".into()));
        }
        if self.enrollment.bucket.is_empty() {
            return Err(AppError::Config("enrollment.bucket must be set".into()));
        }
        if self.recognition.collection_id.is_empty() {
            return Err(AppError::Config("recognition.collection_id must be set".into()));
        }
        if self.recognition.table.is_empty() {
            return Err(AppError::Config("recognition.table must be set".into()));
        }

        Ok(())
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Config(error.to_string())
    }
}
