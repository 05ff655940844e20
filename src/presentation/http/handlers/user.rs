use crate::presentation::http::{state::AppState, timestamp::utc_timestamp};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Serialize)]
pub struct OperatorResponse {
    pub user: String,
    pub timestamp: String,
}

pub async fn current_user(State(state): State<AppState>) -> Json<OperatorResponse> {
    Json(OperatorResponse {
        user: state.config.operator_name.clone(),
        timestamp: utc_timestamp(),
    })
}
