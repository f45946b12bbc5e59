//! Checklist templates service

use crate::{
    error::AppResult,
    models::template::{CreateTemplate, Template, TemplateDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct TemplatesService {
    repository: Repository,
}

impl TemplatesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Template>> {
        self.repository.templates.list().await
    }

    /// Template with its equipment lines
    pub async fn get_details(&self, id: &str) -> AppResult<TemplateDetails> {
        let template = self.repository.templates.get_by_id(id).await?;
        let items = self.repository.templates.items(id).await?;
        Ok(TemplateDetails { template, items })
    }

    pub async fn create(&self, data: &CreateTemplate) -> AppResult<Template> {
        self.repository.templates.create(data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.templates.delete(id).await
    }

    /// Apply a template to an event, returning how many checklist entries
    /// were added (already-present items are skipped)
    pub async fn apply_to_event(&self, template_id: &str, event_id: &str) -> AppResult<u64> {
        self.repository
            .templates
            .apply_to_event(template_id, event_id)
            .await
    }
}
