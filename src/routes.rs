use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{AppState, admin, dashboard, pages, upload};

/// One route per user action. Uploads have no size limit unless
/// `max_upload_bytes` is set.
pub fn router(state: AppState, max_upload_bytes: Option<usize>) -> Router {
    let body_limit = match max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(pages::upload_form))
        .route("/health", get(pages::health))
        .route("/upload", post(upload::upload_file).layer(body_limit))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/admin/truncate", post(admin::truncate_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
