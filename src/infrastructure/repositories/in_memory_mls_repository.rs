use crate::domain::mls_point::{
    entity::{AreaSummary, MlsPoint},
    errors::DomainError,
    query,
    raw_row::MlsTable,
    repository::MlsPointRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Serves every lookup from the snapshot loaded at startup.
///
/// The snapshot is shared read-only, so clones are cheap and handlers never
/// contend on it.
#[derive(Debug, Clone)]
pub struct InMemoryMlsPointRepository {
    table: Arc<MlsTable>,
}

impl InMemoryMlsPointRepository {
    pub fn new(table: MlsTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

#[async_trait]
impl MlsPointRepository for InMemoryMlsPointRepository {
    async fn list_districts(&self) -> Result<Vec<AreaSummary>, DomainError> {
        Ok(query::list_districts(&self.table))
    }

    async fn list_mandals(&self, district_code: &str) -> Result<Vec<AreaSummary>, DomainError> {
        let mandals = query::list_mandals(&self.table, district_code);
        if mandals.is_empty() {
            debug!(district_code, "No mandals found for district");
        }
        Ok(mandals)
    }

    async fn list_points(
        &self,
        district_code: &str,
        mandal_code: &str,
    ) -> Result<Vec<MlsPoint>, DomainError> {
        Ok(query::list_points(&self.table, district_code, mandal_code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<MlsPoint>, DomainError> {
        if self.table.is_empty() {
            return Err(DomainError::NoData);
        }
        Ok(query::find_by_code(&self.table, code))
    }

    async fn list_codes(&self) -> Result<Vec<String>, DomainError> {
        Ok(query::list_codes(&self.table))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.len())
    }
}
