//! Configuration for the voting engine.
//! Supports environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub seed: SeedConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0)
    pub host: String,

    /// Listen port (default: 3001)
    pub port: u16,
}

/// Seed data created at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Audio clips to seed predictions for; each gets one "real" and one
    /// "fake" row (default: clip1, clip2).
    pub audio_clip_ids: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            audio_clip_ids: vec!["clip1".to_string(), "clip2".to_string()],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("SERVER_PORT") {
            config.server.port = port.parse().unwrap_or(config.server.port);
        }

        if let Ok(clip_ids) = env::var("AUDIO_CLIP_IDS") {
            config.seed.audio_clip_ids = clip_ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.validate();

        config
    }

    fn validate(&mut self) {
        if self.seed.audio_clip_ids.is_empty() {
            warn!("AUDIO_CLIP_IDS resolved to an empty list, using defaults");
            self.seed.audio_clip_ids = SeedConfig::default().audio_clip_ids;
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
