use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error, Serialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("No data available")]
    NoData,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Report rendering failed: {0}")]
    ReportFailed(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
