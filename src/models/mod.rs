//! Data models for GearTrack

pub mod category;
pub mod equipment;
pub mod event;
pub mod history;
pub mod scan;
pub mod template;

// Re-export commonly used types
pub use category::Category;
pub use equipment::{Equipment, EquipmentStatus};
pub use event::{ChecklistEntry, Event};
pub use history::{HistoryEntry, ScanAction};
pub use scan::{ScanRequest, ScanResponse};
pub use template::{Template, TemplateItem};
