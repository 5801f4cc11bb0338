//! In-memory store for predictions and votes.
//!
//! State lives only in process memory; a restart reinitializes to the
//! seeded predictions. Ids are assigned from two independent counters,
//! both starting at 1, never reused.

use std::collections::BTreeMap;

use crate::models::{InsertPrediction, InsertVote, Label, Prediction, Vote};

pub struct MemStorage {
    predictions: BTreeMap<i32, Prediction>,
    votes: BTreeMap<i32, Vote>,
    next_prediction_id: i32,
    next_vote_id: i32,
}

impl MemStorage {
    /// Empty store with both id counters at 1.
    pub fn new() -> Self {
        Self {
            predictions: BTreeMap::new(),
            votes: BTreeMap::new(),
            next_prediction_id: 1,
            next_vote_id: 1,
        }
    }

    /// Store pre-populated with one "real" and one "fake" prediction per
    /// clip, all with zero votes.
    pub fn with_seed_clips(clip_ids: &[String]) -> Self {
        let mut storage = Self::new();
        for clip_id in clip_ids {
            for label in [Label::Real, Label::Fake] {
                storage.create_prediction(InsertPrediction {
                    audio_id: clip_id.clone(),
                    prediction: label,
                });
            }
        }
        storage
    }

    /// All prediction records in insertion (ascending id) order.
    pub fn predictions(&self) -> Vec<Prediction> {
        self.predictions.values().cloned().collect()
    }

    /// All vote records in insertion order.
    pub fn votes(&self) -> Vec<Vote> {
        self.votes.values().cloned().collect()
    }

    pub fn create_prediction(&mut self, insert: InsertPrediction) -> Prediction {
        let id = self.next_prediction_id;
        self.next_prediction_id += 1;

        let prediction = Prediction {
            id,
            audio_id: insert.audio_id,
            prediction: insert.prediction,
            votes: 0,
        };
        self.predictions.insert(id, prediction.clone());
        prediction
    }

    /// Records the vote unconditionally; the referenced prediction is not
    /// required to exist.
    pub fn create_vote(&mut self, insert: InsertVote) -> Vote {
        let id = self.next_vote_id;
        self.next_vote_id += 1;

        let vote = Vote {
            id,
            prediction_id: insert.prediction_id,
            vote_type: insert.vote_type,
        };
        self.votes.insert(id, vote.clone());
        vote
    }

    /// Increments the referenced prediction's vote counter by exactly 1.
    /// Returns whether an increment happened; a missing id leaves every
    /// record untouched.
    pub fn apply_vote(&mut self, prediction_id: i32) -> bool {
        match self.predictions.get_mut(&prediction_id) {
            Some(prediction) => {
                prediction.votes += 1;
                true
            }
            None => false,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}
