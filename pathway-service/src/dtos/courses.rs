use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::GenerationRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCourseTitlesRequest {
    pub job_title: String,
    pub additional_context: Option<Value>,
}

impl GenerationRequest for GenerateCourseTitlesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["jobTitle"];
    const FAILURE_MESSAGE: &'static str = "Failed to generate course titles";
}

/// Course titles joined by `\n`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitlesResponse {
    pub course_titles: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineCourseTitlesRequest {
    pub job_title: String,
    pub course_titles: Vec<String>,
    pub additional_context: Value,
}

impl GenerationRequest for RefineCourseTitlesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["jobTitle", "courseTitles", "additionalContext"];
    const FAILURE_MESSAGE: &'static str = "Failed to refine course titles";
}
