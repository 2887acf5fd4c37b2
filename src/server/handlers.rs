use super::error::{
    ApiError, CSV_CONTENT_REQUIRED, GENERATION_FAILED, PACKAGE_FAILED, QUERY_REQUIRED,
};
use super::types::{DownloadPackageRequest, ErrorResponse, GenerateCsvRequest, GenerateCsvResponse};
use crate::{csv_format, llm::LlmClient, package, prompt};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

pub async fn generate_csv(
    State(state): State<AppState>,
    payload: Result<Json<GenerateCsvRequest>, JsonRejection>,
) -> Result<Json<GenerateCsvResponse>, ApiError> {
    let Json(request) = payload?;

    let query = request.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::InvalidInput(QUERY_REQUIRED));
    }

    info!("Received CSV generation request for query: {}", query);

    let reply = state
        .llm
        .complete(&prompt::build_prompt(query))
        .await
        .map_err(|e| ApiError::classify(e, GENERATION_FAILED))?;

    debug!("Completion reply is {} bytes", reply.len());

    let csv_content =
        csv_format::reformat(&reply).map_err(|e| ApiError::classify(e, GENERATION_FAILED))?;

    Ok(Json(GenerateCsvResponse { csv_content }))
}

pub async fn download_scorm(
    payload: Result<Json<DownloadPackageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    let csv_content = request.csv_content.unwrap_or_default();
    if csv_content.is_empty() {
        return Err(ApiError::InvalidInput(CSV_CONTENT_REQUIRED));
    }

    info!("Building download package for {} bytes of CSV", csv_content.len());

    let archive = package::build_package(&csv_content)
        .map_err(|e| ApiError::classify(e, PACKAGE_FAILED))?;

    Ok((
        [
            (header::CONTENT_TYPE, package::PACKAGE_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", package::PACKAGE_FILE_NAME),
            ),
        ],
        archive,
    )
        .into_response())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
