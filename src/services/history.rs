//! Scan history service

use crate::{
    error::AppResult,
    models::history::{HistoryEntry, HistoryQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct HistoryService {
    repository: Repository,
}

impl HistoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &HistoryQuery) -> AppResult<(Vec<HistoryEntry>, i64)> {
        self.repository.history.list(query).await
    }
}
