use super::helpers::{
    FailingRepository, OPERATOR, PanickingRepository, expect_status, get, read_json, send, spawn_app,
    spawn_app_with_repo, spawn_app_with_table,
};
use axum::http::StatusCode;
use mls_api::domain::mls_point::raw_row::{MlsTable, RawRow};
use serde_json::Value;
use std::sync::Arc;

#[tokio::test]
async fn districts_are_distinct_and_sorted_by_name() {
    let app = spawn_app_with_table(MlsTable::new(vec![
        RawRow::new()
            .with("District Code", 7)
            .with("District Name", "Prakasam"),
        RawRow::new()
            .with("District Code", 5)
            .with("District Name", "Guntur"),
        RawRow::new()
            .with("District Code", 7)
            .with("District Name", "Prakasam"),
    ]));

    let res = expect_status(send(&app, get("/api/districts")).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;

    assert_eq!(
        body,
        serde_json::json!([
            { "code": "5", "name": "Guntur" },
            { "code": "7", "name": "Prakasam" },
        ])
    );
}

#[tokio::test]
async fn mandals_for_unknown_district_are_empty() {
    let app = spawn_app();

    let res = expect_status(send(&app, get("/api/mandals/D9")).await, StatusCode::OK).await;
    let body: Vec<Value> = read_json(res).await;
    assert!(body.is_empty());

    let res = expect_status(send(&app, get("/api/mandals/D1")).await, StatusCode::OK).await;
    let body: Vec<Value> = read_json(res).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["code"], "M1");
    assert_eq!(body[0]["name"], "Mandal M1");
}

#[tokio::test]
async fn points_for_mandal_skip_unknown_locations() {
    let app = spawn_app();

    let res = expect_status(
        send(&app, get("/api/mls_points/D1/M1")).await,
        StatusCode::OK,
    )
    .await;
    let points: Vec<Value> = read_json(res).await;

    let codes: Vec<&str> = points
        .iter()
        .map(|p| p["mls_point_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["AB12", "AB13"]);

    let first = &points[0];
    assert_eq!(first["latitude"], 16.31);
    assert_eq!(first["longitude"], 80.44);
    assert_eq!(first["storage_capacity_mt"], "500");
    assert_eq!(first["weighbridge_available"], "Yes");
    assert_eq!(first["deo_name"], "");
    assert_eq!(first.as_object().unwrap().len(), 37);
}

#[tokio::test]
async fn sentinel_point_is_still_found_by_code() {
    let app = spawn_app();

    let res = expect_status(
        send(&app, get("/api/mls_details/AB14")).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["mls_point"]["mls_point_code"], "AB14");
    assert_eq!(body["mls_point"]["latitude"], 0.0);
}

#[tokio::test]
async fn code_lookup_ignores_case_and_whitespace() {
    let app = spawn_app();

    for uri in [
        "/api/mls_details/%20ab12%20",
        "/api/mls_details/AB12",
        "/api/search_mls_code/ab12",
    ] {
        let res = expect_status(send(&app, get(uri)).await, StatusCode::OK).await;
        let body: Value = read_json(res).await;
        assert_eq!(body["mls_point"]["mls_point_code"], "AB12", "uri {}", uri);
    }
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let app = spawn_app();

    let res = expect_status(
        send(&app, get("/api/search_mls_code/ZZ99")).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "MLS point not found");
}

#[tokio::test]
async fn empty_table_serves_empty_lists() {
    let app = spawn_app_with_table(MlsTable::empty());

    for uri in [
        "/api/districts",
        "/api/mandals/D1",
        "/api/mls_points/D1/M1",
        "/api/all_mls_codes",
    ] {
        let res = expect_status(send(&app, get(uri)).await, StatusCode::OK).await;
        let body: Vec<Value> = read_json(res).await;
        assert!(body.is_empty(), "uri {}", uri);
    }

    let res = expect_status(
        send(&app, get("/api/mls_details/AB12")).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "No data available");
}

#[tokio::test]
async fn all_codes_are_sorted_and_unique() {
    let app = spawn_app_with_table(MlsTable::new(vec![
        RawRow::new().with("MLS Point Code", "CD01"),
        RawRow::new().with("MLS Point Code", " AB12 "),
        RawRow::new().with("MLS Point Code", "AB12"),
        RawRow::new().with("MLS Point Code", "NaN"),
    ]));

    let res = expect_status(send(&app, get("/api/all_mls_codes")).await, StatusCode::OK).await;
    let codes: Vec<String> = read_json(res).await;
    assert_eq!(codes, vec!["AB12", "CD01"]);
}

#[tokio::test]
async fn failures_return_structured_errors() {
    let app = spawn_app_with_repo(Arc::new(FailingRepository));

    let res = expect_status(
        send(&app, get("/api/districts")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Failed to fetch districts");
    assert_eq!(body["message"], "snapshot unavailable");

    let res = expect_status(
        send(&app, get("/api/mandals/D1")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Failed to fetch mandals");
    assert_eq!(body["district_code"], "D1");
    assert_eq!(body["user"], OPERATOR);
    assert!(body["timestamp"].is_string());

    let res = expect_status(
        send(&app, get("/api/mls_details/AB12")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Failed to fetch MLS details");

    let res = expect_status(
        send(&app, get("/api/all_mls_codes")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Failed to fetch MLS codes");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app();
    let res = send(&app, get("/api/districts")).await;
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn panics_return_generic_error_and_message() {
    let app = spawn_app_with_repo(Arc::new(PanickingRepository));

    let res = expect_status(
        send(&app, get("/api/districts")).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    let body: Value = read_json(res).await;

    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "Unexpected failure");
    assert!(!body.to_string().contains("corrupted"));
}
