use crate::{
    application::download_report::use_case::DownloadReportUseCase,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    extract::{Path, State},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

/// Replaces characters that cannot appear in a quoted header parameter.
fn header_safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}

pub async fn download_report(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let use_case =
        DownloadReportUseCase::new(state.mls_repo.clone(), state.report_renderer.clone());
    let file = use_case
        .execute(&code)
        .await
        .map_err(|e| AppError::from_domain(e, "PDF generation failed"))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_filename(&file.filename)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Report(format!("invalid filename header: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(file.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}
