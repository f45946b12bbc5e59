//! GearTrack Equipment Tracker
//!
//! A Rust implementation of the GearTrack equipment check-in/check-out
//! server for event-production inventory, providing a REST JSON API for
//! equipment, events, checklists and the scan audit trail.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
