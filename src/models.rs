//! Wire and store types for predictions and votes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Claimed authenticity of an audio clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled claim about one audio clip, with its accumulated vote count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: i32,
    pub audio_id: String,
    pub prediction: Label,
    pub votes: i32,
}

/// A single submitted vote. `prediction_id` is not checked against the
/// prediction map; a vote may reference an id that was never issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: i32,
    pub prediction_id: i32,
    pub vote_type: String,
}

/// Request body for `POST /api/predictions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPrediction {
    pub audio_id: String,
    pub prediction: Label,
}

/// Request body for `POST /api/votes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertVote {
    pub prediction_id: i32,
    pub vote_type: String,
}
