use super::entity::{AreaSummary, MlsPoint};
use super::errors::DomainError;
use async_trait::async_trait;

/// Read-only access to MLS point records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MlsPointRepository: Send + Sync {
    async fn list_districts(&self) -> Result<Vec<AreaSummary>, DomainError>;
    async fn list_mandals(&self, district_code: &str) -> Result<Vec<AreaSummary>, DomainError>;
    async fn list_points(
        &self,
        district_code: &str,
        mandal_code: &str,
    ) -> Result<Vec<MlsPoint>, DomainError>;
    /// Trimmed, case-insensitive lookup. `Err(NoData)` when nothing was loaded.
    async fn find_by_code(&self, code: &str) -> Result<Option<MlsPoint>, DomainError>;
    async fn list_codes(&self) -> Result<Vec<String>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}
