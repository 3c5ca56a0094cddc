use axum::{extract::State, Json};
use service_core::error::AppError;

use super::generation_failed;
use crate::dtos::{
    GenerateSegmentContentRequest, GenerateSegmentOverviewRequest, RefineSegmentContentRequest,
    RefineSegmentOverviewRequest, SegmentContentResponse, SegmentOverviewResponse,
    SegmentPatchResponse,
};
use crate::services::metrics::record_generation;
use crate::services::Operation;
use crate::startup::AppState;
use crate::utils::RequiredJson;

#[tracing::instrument(skip_all, fields(module_title = %request.module_title))]
pub async fn generate_segment_overview(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<GenerateSegmentOverviewRequest>,
) -> Result<Json<SegmentOverviewResponse>, AppError> {
    let operation = Operation::GenerateSegmentOverview;

    let segments = state
        .generator
        .segment_overview(&request)
        .await
        .map_err(|e| generation_failed::<GenerateSegmentOverviewRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(count = segments.len(), "Generated segment overview");

    Ok(Json(SegmentOverviewResponse { segments }))
}

#[tracing::instrument(skip_all, fields(module_title = %request.module_title))]
pub async fn refine_segment_overview(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<RefineSegmentOverviewRequest>,
) -> Result<Json<SegmentPatchResponse>, AppError> {
    let operation = Operation::RefineSegmentOverview;

    let patch = state
        .generator
        .refine_segment_overview(&request)
        .await
        .map_err(|e| generation_failed::<RefineSegmentOverviewRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(
        current = request.segments.len(),
        removed = patch.remove.len(),
        added = patch.insert.len(),
        "Refined segment overview"
    );

    Ok(Json(patch.into()))
}

#[tracing::instrument(
    skip_all,
    fields(segment_title = %request.segment_title, segment_type = %request.segment_type)
)]
pub async fn generate_segment_content(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<GenerateSegmentContentRequest>,
) -> Result<Json<SegmentContentResponse>, AppError> {
    let operation = Operation::GenerateSegmentContent;

    let content = state
        .generator
        .segment_content(&request)
        .await
        .map_err(|e| generation_failed::<GenerateSegmentContentRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(bytes = content.len(), "Generated segment content");

    Ok(Json(SegmentContentResponse { content }))
}

#[tracing::instrument(
    skip_all,
    fields(segment_title = %request.segment_title, segment_type = %request.segment_type)
)]
pub async fn refine_segment_content(
    State(state): State<AppState>,
    RequiredJson(request): RequiredJson<RefineSegmentContentRequest>,
) -> Result<Json<SegmentContentResponse>, AppError> {
    let operation = Operation::RefineSegmentContent;

    let content = state
        .generator
        .refine_segment_content(&request)
        .await
        .map_err(|e| generation_failed::<RefineSegmentContentRequest>(operation, e))?;

    record_generation(operation, "success");
    tracing::info!(bytes = content.len(), "Refined segment content");

    Ok(Json(SegmentContentResponse { content }))
}
