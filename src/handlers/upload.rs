use axum::{
    extract::{Json, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::{FileKind, LoadOutcome},
    parser,
};

/// Multipart field carrying the spreadsheet
pub const FILE_FIELD: &str = "file";

/// Upload response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub upload_id: Uuid,
    pub file_name: String,
    pub kind: FileKind,
    pub table: String,
    #[serde(flatten)]
    pub outcome: LoadOutcome,
    /// Rows in the table after this upload
    pub table_rows: i64,
}

/// Validate an uploaded spreadsheet and append it to the transactions table
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let upload_id = Uuid::new_v4();
        let file_name = field.file_name().unwrap_or_default().to_string();
        tracing::info!(%upload_id, file = %file_name, "upload received");

        // Checked before the field body is read
        let kind = state.validator.check_file_type(&file_name)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let buffer = parser::parse(kind, &bytes)?;
        let records = state.validator.validate(&buffer)?;

        // Partial loads change the table too
        let loaded = state.loader.load(&records).await;
        state.aggregator.invalidate().await;
        let outcome = loaded?;

        let table_rows = state.loader.row_count().await?;
        tracing::info!(%upload_id, %kind, rows = outcome.rows, table_rows, "upload loaded");

        return Ok((
            StatusCode::OK,
            Json(UploadResponse {
                upload_id,
                file_name,
                kind,
                table: state.loader.table().to_string(),
                outcome,
                table_rows,
            }),
        ));
    }

    Err(AppError::BadRequest(format!(
        "multipart field '{}' is missing",
        FILE_FIELD
    )))
}
