//! API handlers for GearTrack REST endpoints

pub mod categories;
pub mod equipment;
pub mod events;
pub mod health;
pub mod history;
pub mod openapi;
pub mod scan;
pub mod templates;
pub mod transfer;
