use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::storage::MemStorage;

/// Shared application state handed to every request handler.
///
/// The store sits behind one RwLock; handlers run on a multi-threaded
/// runtime, so vote application's read-modify-write must hold the write
/// lock for its whole duration.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<RwLock<MemStorage>>,
}

impl AppState {
    /// State for a fresh process: store seeded from the configured clips.
    pub fn new(config: &Config) -> Self {
        Self::with_storage(MemStorage::with_seed_clips(&config.seed.audio_clip_ids))
    }

    pub fn with_storage(storage: MemStorage) -> Self {
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }
}
