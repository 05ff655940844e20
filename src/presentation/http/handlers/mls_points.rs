use crate::{
    domain::mls_point::entity::{AreaSummary, MlsPoint},
    presentation::http::{errors::AppError, state::AppState, timestamp::utc_timestamp},
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MlsPointResponse {
    pub success: bool,
    pub mls_point: MlsPoint,
}

pub async fn list_districts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AreaSummary>>, AppError> {
    let districts = state
        .mls_repo
        .list_districts()
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch districts"))?;

    Ok(Json(districts))
}

pub async fn list_mandals(
    State(state): State<AppState>,
    Path(district_code): Path<String>,
) -> Result<Json<Vec<AreaSummary>>, AppError> {
    let mandals = state
        .mls_repo
        .list_mandals(&district_code)
        .await
        .map_err(|e| {
            AppError::from_domain(e, "Failed to fetch mandals")
                .with_detail("district_code", district_code.as_str())
                .with_detail("timestamp", utc_timestamp())
                .with_detail("user", state.config.operator_name.as_str())
        })?;

    Ok(Json(mandals))
}

pub async fn list_points(
    State(state): State<AppState>,
    Path((district_code, mandal_code)): Path<(String, String)>,
) -> Result<Json<Vec<MlsPoint>>, AppError> {
    let points = state
        .mls_repo
        .list_points(&district_code, &mandal_code)
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch MLS points"))?;

    tracing::debug!(
        district_code = %district_code,
        mandal_code = %mandal_code,
        count = points.len(),
        "Listed MLS points"
    );
    Ok(Json(points))
}

async fn lookup_point(
    state: &AppState,
    code: &str,
    context: &'static str,
) -> Result<Json<MlsPointResponse>, AppError> {
    let point = state
        .mls_repo
        .find_by_code(code)
        .await
        .map_err(|e| AppError::from_domain(e, context))?
        .ok_or_else(|| AppError::NotFound("MLS point not found".into()))?;

    Ok(Json(MlsPointResponse {
        success: true,
        mls_point: point,
    }))
}

pub async fn get_mls_details(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MlsPointResponse>, AppError> {
    lookup_point(&state, &code, "Failed to fetch MLS details").await
}

pub async fn search_mls_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MlsPointResponse>, AppError> {
    lookup_point(&state, &code, "Failed to search MLS code").await
}

pub async fn list_codes(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let codes = state
        .mls_repo
        .list_codes()
        .await
        .map_err(|e| AppError::from_domain(e, "Failed to fetch MLS codes"))?;

    Ok(Json(codes))
}
