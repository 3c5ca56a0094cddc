//! Curriculum generator abstraction.
//!
//! Handlers talk to a `CurriculumGenerator` so the templated mock can be
//! replaced by a model-backed implementation without touching the HTTP
//! contract.

pub mod mock;
pub mod templates;

use async_trait::async_trait;
use thiserror::Error;

use crate::dtos::{
    GenerateCourseTitlesRequest, GenerateModuleTitlesRequest, GenerateSegmentContentRequest,
    GenerateSegmentOverviewRequest, RefineCourseTitlesRequest, RefineModuleTitlesRequest,
    RefineSegmentContentRequest, RefineSegmentOverviewRequest,
};
use crate::models::{ListPatch, Segment};

pub use mock::MockCurriculumGenerator;

/// Error type for generator operations.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator not configured: {0}")]
    NotConfigured(String),
}

#[async_trait]
pub trait CurriculumGenerator: Send + Sync {
    /// Course titles for a role, newline-joined.
    async fn course_titles(
        &self,
        request: &GenerateCourseTitlesRequest,
    ) -> Result<String, GenerationError>;

    async fn refine_course_titles(
        &self,
        request: &RefineCourseTitlesRequest,
    ) -> Result<ListPatch<String>, GenerationError>;

    async fn module_titles(
        &self,
        request: &GenerateModuleTitlesRequest,
    ) -> Result<Vec<String>, GenerationError>;

    async fn refine_module_titles(
        &self,
        request: &RefineModuleTitlesRequest,
    ) -> Result<ListPatch<String>, GenerationError>;

    async fn segment_overview(
        &self,
        request: &GenerateSegmentOverviewRequest,
    ) -> Result<Vec<Segment>, GenerationError>;

    async fn refine_segment_overview(
        &self,
        request: &RefineSegmentOverviewRequest,
    ) -> Result<ListPatch<Segment>, GenerationError>;

    async fn segment_content(
        &self,
        request: &GenerateSegmentContentRequest,
    ) -> Result<String, GenerationError>;

    /// Refined content for a segment, given the client's current text.
    async fn refine_segment_content(
        &self,
        request: &RefineSegmentContentRequest,
    ) -> Result<String, GenerationError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), GenerationError>;
}
