//! Request and response bodies. Field names are camelCase on the wire.
//!
//! Context fields the generator never inspects are kept as raw JSON, so a
//! client may send them in any shape.

pub mod courses;
pub mod modules;
pub mod segments;

pub use courses::*;
pub use modules::*;
pub use segments::*;

use serde::{Deserialize, Serialize};

use crate::models::{ListPatch, Segment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleInsertion {
    pub title: String,
    pub idx: usize,
}

/// Wire form of a `ListPatch<String>` for course and module titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePatchResponse {
    pub titles_to_delete: Vec<String>,
    pub titles_to_add: Vec<TitleInsertion>,
}

impl From<ListPatch<String>> for TitlePatchResponse {
    fn from(patch: ListPatch<String>) -> Self {
        Self {
            titles_to_delete: patch.remove,
            titles_to_add: patch
                .insert
                .into_iter()
                .map(|insertion| TitleInsertion {
                    title: insertion.item,
                    idx: insertion.idx,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInsertion {
    pub segment: Segment,
    pub idx: usize,
}

/// Wire form of a `ListPatch<Segment>`. Insertions keep the `titlesToAdd`
/// key the client already reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPatchResponse {
    pub segments_to_delete: Vec<String>,
    pub titles_to_add: Vec<SegmentInsertion>,
}

impl From<ListPatch<Segment>> for SegmentPatchResponse {
    fn from(patch: ListPatch<Segment>) -> Self {
        Self {
            segments_to_delete: patch.remove,
            titles_to_add: patch
                .insert
                .into_iter()
                .map(|insertion| SegmentInsertion {
                    segment: insertion.item,
                    idx: insertion.idx,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentType;
    use serde_json::json;

    #[test]
    fn title_patch_uses_client_field_names() {
        let patch = ListPatch::new()
            .remove("Old Course")
            .insert("New Course".to_string(), 2);

        let value = serde_json::to_value(TitlePatchResponse::from(patch)).unwrap();
        assert_eq!(
            value,
            json!({
                "titlesToDelete": ["Old Course"],
                "titlesToAdd": [{"title": "New Course", "idx": 2}],
            })
        );
    }

    #[test]
    fn segment_patch_uses_client_field_names() {
        let patch = ListPatch::new().insert(Segment::new("Case", SegmentType::Research), 3);

        let value = serde_json::to_value(SegmentPatchResponse::from(patch)).unwrap();
        assert_eq!(
            value,
            json!({
                "segmentsToDelete": [],
                "titlesToAdd": [{"segment": {"title": "Case", "type": "Research"}, "idx": 3}],
            })
        );
    }
}
