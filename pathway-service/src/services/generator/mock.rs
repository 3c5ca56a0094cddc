//! Template-backed generator with simulated latency.

use async_trait::async_trait;
use rand::Rng;

use super::templates::{
    append_insights, content_for_segment, course_titles_for_job, module_titles_for_course,
    segments_for_module, value_text, CASE_STUDY_SEGMENT, CASE_STUDY_SEGMENT_IDX, ETHICS_COURSE,
    TRENDS_COURSE, WORKSHOP_MODULE, WORKSHOP_MODULE_IDX,
};
use super::{CurriculumGenerator, GenerationError};
use crate::dtos::{
    GenerateCourseTitlesRequest, GenerateModuleTitlesRequest, GenerateSegmentContentRequest,
    GenerateSegmentOverviewRequest, RefineCourseTitlesRequest, RefineModuleTitlesRequest,
    RefineSegmentContentRequest, RefineSegmentOverviewRequest,
};
use crate::models::{ListPatch, Segment, SegmentType};
use crate::services::latency::{LatencyProfile, Operation};

/// Mock generator answering from fixed templates.
pub struct MockCurriculumGenerator {
    latency: LatencyProfile,
    enabled: bool,
}

impl MockCurriculumGenerator {
    pub fn new(latency: LatencyProfile) -> Self {
        Self {
            latency,
            enabled: true,
        }
    }

    /// A disabled generator fails every call with `NotConfigured`.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn ensure_enabled(&self) -> Result<(), GenerationError> {
        if self.enabled {
            Ok(())
        } else {
            Err(GenerationError::NotConfigured(
                "Mock curriculum generator not enabled".to_string(),
            ))
        }
    }
}

/// Pure refinement rules, separated from latency for testing.
fn course_titles_patch(course_titles: &[String], pick: usize) -> ListPatch<String> {
    let len = course_titles.len();
    let mut patch = ListPatch::new();

    if len > 3 {
        patch = patch.remove(course_titles[pick % len].clone());
    }

    patch
        .insert(ETHICS_COURSE.to_string(), len / 2)
        .insert(TRENDS_COURSE.to_string(), len)
}

fn module_titles_patch(module_titles: &[String]) -> ListPatch<String> {
    let mut patch = ListPatch::new();

    if module_titles.len() > 4 {
        patch = patch.remove(module_titles[0].clone());
    }

    patch.insert(WORKSHOP_MODULE.to_string(), WORKSHOP_MODULE_IDX)
}

fn segments_patch(segments: &[Segment]) -> ListPatch<Segment> {
    let mut patch = ListPatch::new();

    if segments.len() > 4 {
        patch = patch.remove(segments[1].title.clone());
    }

    patch.insert(
        Segment::new(CASE_STUDY_SEGMENT, SegmentType::Research),
        CASE_STUDY_SEGMENT_IDX,
    )
}

#[async_trait]
impl CurriculumGenerator for MockCurriculumGenerator {
    async fn course_titles(
        &self,
        request: &GenerateCourseTitlesRequest,
    ) -> Result<String, GenerationError> {
        self.ensure_enabled()?;

        let titles = course_titles_for_job(&request.job_title).join("\n");

        self.latency.simulate(Operation::GenerateCourseTitles).await;
        Ok(titles)
    }

    async fn refine_course_titles(
        &self,
        request: &RefineCourseTitlesRequest,
    ) -> Result<ListPatch<String>, GenerationError> {
        self.ensure_enabled()?;

        let pick = rand::thread_rng().gen_range(0..request.course_titles.len().max(1));
        let patch = course_titles_patch(&request.course_titles, pick);

        self.latency.simulate(Operation::RefineCourseTitles).await;
        Ok(patch)
    }

    async fn module_titles(
        &self,
        request: &GenerateModuleTitlesRequest,
    ) -> Result<Vec<String>, GenerationError> {
        self.ensure_enabled()?;

        let titles = module_titles_for_course(&request.course_title);

        self.latency.simulate(Operation::GenerateModuleTitles).await;
        Ok(titles)
    }

    async fn refine_module_titles(
        &self,
        request: &RefineModuleTitlesRequest,
    ) -> Result<ListPatch<String>, GenerationError> {
        self.ensure_enabled()?;

        let patch = module_titles_patch(&request.module_titles);

        self.latency.simulate(Operation::RefineModuleTitles).await;
        Ok(patch)
    }

    async fn segment_overview(
        &self,
        request: &GenerateSegmentOverviewRequest,
    ) -> Result<Vec<Segment>, GenerationError> {
        self.ensure_enabled()?;

        let segments = segments_for_module(&request.module_title);

        self.latency
            .simulate(Operation::GenerateSegmentOverview)
            .await;
        Ok(segments)
    }

    async fn refine_segment_overview(
        &self,
        request: &RefineSegmentOverviewRequest,
    ) -> Result<ListPatch<Segment>, GenerationError> {
        self.ensure_enabled()?;

        let patch = segments_patch(&request.segments);

        self.latency.simulate(Operation::RefineSegmentOverview).await;
        Ok(patch)
    }

    async fn segment_content(
        &self,
        request: &GenerateSegmentContentRequest,
    ) -> Result<String, GenerationError> {
        self.ensure_enabled()?;

        let content = content_for_segment(&request.segment_title, request.segment_type);

        self.latency.simulate(Operation::GenerateSegmentContent).await;
        Ok(content)
    }

    async fn refine_segment_content(
        &self,
        request: &RefineSegmentContentRequest,
    ) -> Result<String, GenerationError> {
        self.ensure_enabled()?;

        let content = append_insights(
            &value_text(&request.segment_content),
            &value_text(&request.additional_context),
        );

        self.latency.simulate(Operation::RefineSegmentContent).await;
        Ok(content)
    }

    async fn health_check(&self) -> Result<(), GenerationError> {
        self.ensure_enabled()
    }
}
