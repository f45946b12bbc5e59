//! Business logic services

pub mod categories;
pub mod equipment;
pub mod events;
pub mod history;
pub mod photos;
pub mod scan;
pub mod templates;

use crate::{config::StorageConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub events: events::EventsService,
    pub templates: templates::TemplatesService,
    pub categories: categories::CategoriesService,
    pub history: history::HistoryService,
    pub scan: scan::ScanService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, storage: StorageConfig) -> Self {
        let photos = photos::PhotoStore::new(&storage.photo_dir);
        Self {
            equipment: equipment::EquipmentService::new(repository.clone(), photos),
            events: events::EventsService::new(repository.clone()),
            templates: templates::TemplatesService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            history: history::HistoryService::new(repository.clone()),
            scan: scan::ScanService::new(repository),
        }
    }
}
