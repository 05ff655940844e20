use crate::presentation::http::{state::AppState, timestamp::utc_timestamp};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    records_count: usize,
    timestamp: String,
    user: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Check Database Connectivity
    let db_error = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => None,
        Err(e) => {
            tracing::error!("Health check failed: Database unreachable: {}", e);
            Some(e.to_string())
        }
    };

    let records_count = state.mls_repo.count().await.unwrap_or(0);

    let (code, status, database) = match db_error {
        None => (StatusCode::OK, "healthy", "connected"),
        Some(_) => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected"),
    };

    let response = HealthResponse {
        status,
        database,
        records_count,
        timestamp: utc_timestamp(),
        user: state.config.operator_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        error: db_error,
    };

    (code, Json(response))
}
