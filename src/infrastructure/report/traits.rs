use crate::domain::mls_point::entity::MlsPoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("font setup failed: {0}")]
    Font(String),
    #[error("pdf encoding failed: {0}")]
    Encoding(String),
}

pub trait ReportRenderer: Send + Sync {
    /// Renders one record into a complete document.
    fn render(&self, point: &MlsPoint) -> Result<Vec<u8>, ReportError>;

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}
