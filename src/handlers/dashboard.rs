use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{error::Result, handlers::AppState};

/// Metrics plus the pie and bar chart series
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let dashboard = state.aggregator.dashboard().await?;
    Ok((StatusCode::OK, Json(dashboard)))
}
