//! Events service

use crate::{
    error::AppResult,
    models::event::{
        AddChecklistEntry, ChecklistEntry, CreateEvent, Event, EventDetails, EventQuery,
        UpdateChecklistEntry, UpdateEvent,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &EventQuery) -> AppResult<(Vec<Event>, i64)> {
        self.repository.events.list(query).await
    }

    /// Event with its full checklist
    pub async fn get_details(&self, id: &str) -> AppResult<EventDetails> {
        let event = self.repository.events.get_by_id(id).await?;
        let checklist = self.repository.events.checklist(id).await?;
        Ok(EventDetails { event, checklist })
    }

    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        self.repository.events.create(data).await
    }

    pub async fn update(&self, id: &str, data: &UpdateEvent) -> AppResult<Event> {
        self.repository.events.update(id, data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.events.delete(id).await
    }

    pub async fn add_checklist_entry(
        &self,
        event_id: &str,
        data: &AddChecklistEntry,
    ) -> AppResult<ChecklistEntry> {
        self.repository.events.add_checklist_entry(event_id, data).await
    }

    pub async fn update_checklist_entry(
        &self,
        event_id: &str,
        entry_id: i32,
        data: &UpdateChecklistEntry,
    ) -> AppResult<ChecklistEntry> {
        self.repository
            .events
            .update_checklist_entry(event_id, entry_id, data)
            .await
    }

    pub async fn remove_checklist_entry(&self, event_id: &str, entry_id: i32) -> AppResult<()> {
        self.repository
            .events
            .remove_checklist_entry(event_id, entry_id)
            .await
    }
}
