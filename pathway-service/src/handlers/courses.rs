use axum::{extract::State, Json};
use service_core::error::AppError;

use super::generation_failed;
use crate::dtos::{
    CourseTitlesResponse, GenerateCourseTitlesRequest, RefineCourseTitlesRequest,
    TitlePatchResponse,
};
use crate::services::metrics::record_generation;
use crate::services::Operation;
use crate::startup::AppState;
use crate::utils::RequiredJson;

#[tracing::instrument(skip_all, fields(job_title = %request.job_title))]
pub async fn generate_course_titles(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<GenerateCourseTitlesRequest>,
) -> Result<Json<CourseTitlesResponse>, AppError> {
    let operation = Operation::GenerateCourseTitles;

    let course_titles = state
        .generator
        .course_titles(&request)
        .await
        .map_err(|e| generation_failed::<GenerateCourseTitlesRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(count = course_titles.lines().count(), "Generated course titles");

    Ok(Json(CourseTitlesResponse { course_titles }))
}

#[tracing::instrument(skip_all, fields(job_title = %request.job_title))]
pub async fn refine_course_titles(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<RefineCourseTitlesRequest>,
) -> Result<Json<TitlePatchResponse>, AppError> {
    let operation = Operation::RefineCourseTitles;

    let patch = state
        .generator
        .refine_course_titles(&request)
        .await
        .map_err(|e| generation_failed::<RefineCourseTitlesRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(
        current = request.course_titles.len(),
        removed = patch.remove.len(),
        added = patch.insert.len(),
        "Refined course titles"
    );

    Ok(Json(patch.into()))
}
