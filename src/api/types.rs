// src/api/types.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceMatchEntry {
    pub face_id: String,
    pub full_name: String,
}

/// Outcome of a recognition search. Kept tri-state so that "no matches"
/// reaches the wire as `null`, never as an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    NoMatches,
    Matches(Vec<FaceMatchEntry>),
}

impl MatchOutcome {
    pub fn from_entries(entries: Vec<FaceMatchEntry>) -> Self {
        if entries.is_empty() {
            Self::NoMatches
        } else {
            Self::Matches(entries)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecognitionResponse {
    pub face_matches: Option<Vec<FaceMatchEntry>>,
}

impl From<MatchOutcome> for RecognitionResponse {
    fn from(outcome: MatchOutcome) -> Self {
        let face_matches = match outcome {
            MatchOutcome::NoMatches => None,
            MatchOutcome::Matches(entries) => Some(entries),
        };
        Self { face_matches }
    }
}
