use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::GenerationRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateModuleTitlesRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub additional_context: Option<Value>,
}

impl GenerationRequest for GenerateModuleTitlesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["jobTitle", "courseTitle"];
    const FAILURE_MESSAGE: &'static str = "Failed to generate module titles";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTitlesResponse {
    pub module_titles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineModuleTitlesRequest {
    pub job_title: String,
    pub course_title: String,
    pub sibling_course_titles: Option<Value>,
    pub module_titles: Vec<String>,
    pub additional_context: Value,
}

impl GenerationRequest for RefineModuleTitlesRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "jobTitle",
        "courseTitle",
        "moduleTitles",
        "additionalContext",
    ];
    const FAILURE_MESSAGE: &'static str = "Failed to refine module titles";
}
