use axum::{extract::State, Json};
use service_core::error::AppError;

use super::generation_failed;
use crate::dtos::{
    GenerateModuleTitlesRequest, ModuleTitlesResponse, RefineModuleTitlesRequest,
    TitlePatchResponse,
};
use crate::services::metrics::record_generation;
use crate::services::Operation;
use crate::startup::AppState;
use crate::utils::RequiredJson;

#[tracing::instrument(skip_all, fields(course_title = %request.course_title))]
pub async fn generate_module_titles(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<GenerateModuleTitlesRequest>,
) -> Result<Json<ModuleTitlesResponse>, AppError> {
    let operation = Operation::GenerateModuleTitles;

    let module_titles = state
        .generator
        .module_titles(&request)
        .await
        .map_err(|e| generation_failed::<GenerateModuleTitlesRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(count = module_titles.len(), "Generated module titles");

    Ok(Json(ModuleTitlesResponse { module_titles }))
}

#[tracing::instrument(skip_all, fields(course_title = %request.course_title))]
pub async fn refine_module_titles(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<RefineModuleTitlesRequest>,
) -> Result<Json<TitlePatchResponse>, AppError> {
    let operation = Operation::RefineModuleTitles;

    let patch = state
        .generator
        .refine_module_titles(&request)
        .await
        .map_err(|e| generation_failed::<RefineModuleTitlesRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(
        current = request.module_titles.len(),
        removed = patch.remove.len(),
        added = patch.insert.len(),
        "Refined module titles"
    );

    Ok(Json(patch.into()))
}
