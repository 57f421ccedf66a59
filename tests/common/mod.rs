// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use facegate::services::face_index::{FaceIndex, IndexedFace};
use facegate::services::faces::{FaceEngine, FaceMatch, FaceObservation};
use facegate::services::object_store::ProfileStore;
use facegate::utils::error::ServiceError;

pub const CONTENT_TYPE: &str = "multipart/form-data; boundary=XBOUNDARY";

/// Each part is (field name, optional filename, body bytes).
pub fn encode_form(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(b"--XBOUNDARY\r\n");
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(b"--XBOUNDARY--\r\n");
    body
}

/// Face engine double with canned detection and search results.
pub struct StubFaceEngine {
    pub detect: Result<Vec<FaceObservation>, ServiceError>,
    pub search: Result<Vec<FaceMatch>, ServiceError>,
    pub detect_calls: Mutex<usize>,
    pub search_calls: Mutex<usize>,
}

impl StubFaceEngine {
    pub fn with_face_count(count: usize) -> Self {
        let faces = (0..count)
            .map(|_| FaceObservation {
                confidence: Some(99.0),
            })
            .collect();
        Self {
            detect: Ok(faces),
            search: Ok(vec![]),
            detect_calls: Mutex::new(0),
            search_calls: Mutex::new(0),
        }
    }

    pub fn with_matches(face_ids: &[&str]) -> Self {
        let matches = face_ids
            .iter()
            .map(|id| FaceMatch {
                face_id: id.to_string(),
                similarity: Some(97.5),
            })
            .collect();
        Self {
            detect: Ok(vec![]),
            search: Ok(matches),
            detect_calls: Mutex::new(0),
            search_calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl FaceEngine for StubFaceEngine {
    async fn detect_faces(&self, _image: &[u8]) -> Result<Vec<FaceObservation>, ServiceError> {
        *self.detect_calls.lock().unwrap() += 1;
        self.detect.clone()
    }

    async fn search_faces(&self, _image: &[u8]) -> Result<Vec<FaceMatch>, ServiceError> {
        *self.search_calls.lock().unwrap() += 1;
        self.search.clone()
    }
}

/// Profile store double recording every write as (key, bytes, full_name).
#[derive(Default)]
pub struct RecordingStore {
    pub writes: Mutex<Vec<(String, Vec<u8>, String)>>,
}

#[async_trait]
impl ProfileStore for RecordingStore {
    async fn put_profile(
        &self,
        key: &str,
        image: Vec<u8>,
        full_name: &str,
    ) -> Result<(), ServiceError> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), image, full_name.to_string()));
        Ok(())
    }
}

/// Face index double backed by a fixed id -> name map.
pub struct StaticIndex {
    entries: HashMap<String, String>,
}

impl StaticIndex {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

#[async_trait]
impl FaceIndex for StaticIndex {
    async fn lookup(&self, face_id: &str) -> Result<Option<IndexedFace>, ServiceError> {
        Ok(self.entries.get(face_id).map(|full_name| IndexedFace {
            face_id: face_id.to_string(),
            full_name: full_name.clone(),
        }))
    }
}
