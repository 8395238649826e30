use axum::extract::{Multipart, State};
use axum::{Json, Router, routing::post};
use txguard_core::application::{Upload, validate_upload};
use txguard_core::ValidationReport;

use crate::http::{ApiError, AppState};

/// POST /validate
///
/// Takes a multipart upload with a `file` part and returns the validation
/// report. Structural problems (extension, encoding, no rows) are a 400.
async fn validate_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidationReport>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some(Upload::new(file_name, data.to_vec()));
        break;
    }

    let upload = upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    // Rules are CPU-bound; keep them off the async workers
    let AppState { engine, settings } = state;
    let report = tokio::task::spawn_blocking(move || validate_upload(&upload, &engine, &settings))
        .await
        .map_err(|e| ApiError::internal(format!("Validation task failed: {}", e)))??;

    Ok(Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_csv))
}
