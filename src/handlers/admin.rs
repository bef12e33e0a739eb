use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Serialize, Deserialize)]
pub struct TruncateResponse {
    pub table: String,
    pub removed: u64,
}

/// Delete every row of the transactions table. Irreversible.
pub async fn truncate_table(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    if let Some(expected) = state.admin_api_key.as_deref() {
        let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
        if provided != Some(expected) {
            return Err(AppError::Auth("Invalid API key".into()));
        }
    }

    let removed = state.loader.truncate().await?;
    state.aggregator.invalidate().await;

    Ok((
        StatusCode::OK,
        Json(TruncateResponse {
            table: state.loader.table().to_string(),
            removed,
        }),
    ))
}
