//! Equipment service

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentTransfer, UpdateEquipment},
    repository::Repository,
};

use super::photos::PhotoStore;

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    photos: PhotoStore,
}

impl EquipmentService {
    pub fn new(repository: Repository, photos: PhotoStore) -> Self {
        Self { repository, photos }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.create(data).await
    }

    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.update(id, data).await
    }

    /// Delete equipment and its stored photo file, if any
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self.repository.equipment.delete(id).await?;
        if let Some(ref photo_url) = removed.photo_url {
            self.photos.remove(photo_url).await?;
        }
        Ok(())
    }

    /// Store an uploaded photo and record its URL on the equipment row
    pub async fn store_photo(
        &self,
        id: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> AppResult<Equipment> {
        // Reject unknown ids before touching the filesystem
        self.repository.equipment.get_by_id(id).await?;
        let photo_url = self.photos.save(id, original_name, bytes).await?;
        self.repository.equipment.set_photo_url(id, &photo_url).await
    }

    pub async fn export(&self) -> AppResult<Vec<EquipmentTransfer>> {
        self.repository.equipment.export().await
    }

    pub async fn import(&self, items: &[EquipmentTransfer]) -> AppResult<usize> {
        self.repository.equipment.import(items).await
    }
}
