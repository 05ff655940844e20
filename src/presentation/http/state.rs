use crate::{
    config::Config, domain::mls_point::repository::MlsPointRepository,
    infrastructure::report::traits::ReportRenderer,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared, read-only context handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub mls_repo: Arc<dyn MlsPointRepository>,
    pub report_renderer: Arc<dyn ReportRenderer>,
}
