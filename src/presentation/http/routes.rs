use super::{
    errors::handle_panic,
    handlers::{health, mls_points, reports, user},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/api/health", get(health::health_check))
        .route("/api/user", get(user::current_user))
        // Area filters
        .route("/api/districts", get(mls_points::list_districts))
        .route(
            "/api/mandals/{district_code}",
            get(mls_points::list_mandals),
        )
        // MLS points
        .route(
            "/api/mls_points/{district_code}/{mandal_code}",
            get(mls_points::list_points),
        )
        .route(
            "/api/mls_details/{mls_code}",
            get(mls_points::get_mls_details),
        )
        .route(
            "/api/search_mls_code/{mls_code}",
            get(mls_points::search_mls_code),
        )
        .route("/api/all_mls_codes", get(mls_points::list_codes))
        // Reports
        .route(
            "/api/download_pdf/{mls_code}",
            get(reports::download_report),
        );

    // Front-end assets, when a directory is configured
    let router = match state.config.static_dir.as_deref() {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
