use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Segment, SegmentType};
use crate::utils::GenerationRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSegmentOverviewRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub module_title: String,
    pub sibling_module_titles: Option<Value>,
    pub additional_context: Option<Value>,
}

impl GenerationRequest for GenerateSegmentOverviewRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["jobTitle", "courseTitle", "moduleTitle"];
    const FAILURE_MESSAGE: &'static str = "Failed to generate segment overview";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentOverviewResponse {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineSegmentOverviewRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub module_title: String,
    pub sibling_module_titles: Option<Value>,
    pub segments: Vec<Segment>,
    pub additional_context: Value,
}

impl GenerationRequest for RefineSegmentOverviewRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "jobTitle",
        "courseTitle",
        "moduleTitle",
        "segments",
        "additionalContext",
    ];
    const FAILURE_MESSAGE: &'static str = "Failed to refine segment overview";
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSegmentContentRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub module_title: String,
    pub sibling_module_titles: Option<Value>,
    pub segment_title: String,
    pub segment_type: SegmentType,
    pub sibling_segments: Option<Value>,
    pub additional_context: Option<Value>,
}

impl GenerationRequest for GenerateSegmentContentRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "jobTitle",
        "courseTitle",
        "moduleTitle",
        "segmentTitle",
        "segmentType",
    ];
    const FAILURE_MESSAGE: &'static str = "Failed to generate segment content";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentContentResponse {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineSegmentContentRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub module_title: String,
    pub sibling_module_titles: Option<Value>,
    pub segment_title: String,
    pub segment_type: SegmentType,
    pub sibling_segments: Option<Value>,
    pub segment_content: Value,
    pub additional_context: Value,
}

impl GenerationRequest for RefineSegmentContentRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "jobTitle",
        "courseTitle",
        "moduleTitle",
        "segmentTitle",
        "segmentType",
        "segmentContent",
        "additionalContext",
    ];
    const FAILURE_MESSAGE: &'static str = "Failed to refine segment content";
}
