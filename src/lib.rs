//! Voting Engine Library
//!
//! Core functionality for the audio real/fake voting backend: an
//! in-memory prediction store with vote tallying, exposed over a small
//! JSON API.

// Re-export modules for use in binaries
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
