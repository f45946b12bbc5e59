//! Categories service

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        self.repository.categories.create(data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.categories.delete(id).await
    }
}
