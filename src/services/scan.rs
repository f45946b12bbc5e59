//! Scan service

use crate::{
    error::AppResult,
    models::scan::{ScanRequest, ScanResponse},
    repository::Repository,
};

#[derive(Clone)]
pub struct ScanService {
    repository: Repository,
}

impl ScanService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Process an equipment scan (check in / check out)
    pub async fn process(&self, req: &ScanRequest) -> AppResult<ScanResponse> {
        let response = self.repository.scan.process(req).await?;
        tracing::info!(
            equipment = %response.equipment.id,
            status = %response.equipment.status,
            quantity_out = response.equipment.quantity_out,
            "scan processed"
        );
        Ok(response)
    }
}
