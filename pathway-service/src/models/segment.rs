//! Segment model: the leaf level of a curriculum module.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of learning activity a segment represents.
///
/// Deserializes leniently: any value other than a known type name becomes
/// `Info`, which is also the content template used for unknown types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum SegmentType {
    #[default]
    Info,
    Research,
    Exercise,
    Discussion,
    Project,
}

impl SegmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Info => "Info",
            SegmentType::Research => "Research",
            SegmentType::Exercise => "Exercise",
            SegmentType::Discussion => "Discussion",
            SegmentType::Project => "Project",
        }
    }
}

impl From<&str> for SegmentType {
    fn from(value: &str) -> Self {
        match value {
            "Research" => SegmentType::Research,
            "Exercise" => SegmentType::Exercise,
            "Discussion" => SegmentType::Discussion,
            "Project" => SegmentType::Project,
            _ => SegmentType::Info,
        }
    }
}

impl From<Value> for SegmentType {
    fn from(value: Value) -> Self {
        value.as_str().map(SegmentType::from).unwrap_or_default()
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled segment within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub title: String,

    #[serde(rename = "type", default)]
    pub segment_type: SegmentType,
}

impl Segment {
    pub fn new(title: impl Into<String>, segment_type: SegmentType) -> Self {
        Self {
            title: title.into(),
            segment_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_type_field_by_name() {
        let segment = Segment::new("Capstone Project", SegmentType::Project);
        assert_eq!(
            serde_json::to_value(&segment).unwrap(),
            json!({"title": "Capstone Project", "type": "Project"})
        );
    }

    #[test]
    fn unknown_type_falls_back_to_info() {
        let segment: Segment =
            serde_json::from_value(json!({"title": "Lab", "type": "Workshop"})).unwrap();
        assert_eq!(segment.segment_type, SegmentType::Info);
    }

    #[test]
    fn non_string_type_falls_back_to_info() {
        for raw in [json!(3), json!(null), json!(["Exercise"]), json!({"name": "Project"})] {
            let segment: Segment =
                serde_json::from_value(json!({"title": "Lab", "type": raw})).unwrap();
            assert_eq!(segment.segment_type, SegmentType::Info);
        }
    }

    #[test]
    fn missing_type_defaults_to_info() {
        let segment: Segment = serde_json::from_value(json!({"title": "Lab"})).unwrap();
        assert_eq!(segment.segment_type, SegmentType::Info);
    }

    #[test]
    fn type_matching_is_case_sensitive() {
        assert_eq!(SegmentType::from("exercise"), SegmentType::Info);
        assert_eq!(SegmentType::from("Exercise"), SegmentType::Exercise);
    }
}
