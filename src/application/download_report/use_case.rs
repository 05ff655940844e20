use super::dto::ReportFile;
use crate::{
    domain::mls_point::{errors::DomainError, repository::MlsPointRepository},
    infrastructure::report::{layout::report_filename, traits::ReportRenderer},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct DownloadReportUseCase {
    repository: Arc<dyn MlsPointRepository>,
    renderer: Arc<dyn ReportRenderer>,
}

impl DownloadReportUseCase {
    pub fn new(repository: Arc<dyn MlsPointRepository>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    /// Looks up one point and renders it off the async executor.
    #[instrument(skip(self))]
    pub async fn execute(&self, code: &str) -> Result<ReportFile, DomainError> {
        let point = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::NotFound("MLS point not found".into()))?;

        let filename = report_filename(&point);
        let renderer = self.renderer.clone();
        let content_type = renderer.content_type();
        let bytes = tokio::task::spawn_blocking(move || renderer.render(&point))
            .await
            .map_err(|e| DomainError::ReportFailed(format!("render task aborted: {}", e)))?
            .map_err(|e| DomainError::ReportFailed(e.to_string()))?;

        info!(%filename, size = bytes.len(), "Generated MLS point report");
        Ok(ReportFile {
            filename,
            content_type,
            bytes: Bytes::from(bytes),
        })
    }
}
