//! Refinement endpoint tests: the list patches returned for client-held lists.

mod common;

use axum::http::StatusCode;
use common::{post_json, router};
use pathway_service::dtos::{SegmentPatchResponse, TitlePatchResponse};
use serde_json::json;

#[tokio::test]
async fn long_course_list_gets_one_deletion_and_two_insertions() {
    let titles = ["A", "B", "C", "D", "E", "F"];

    let response = post_json(
        router(),
        "/refineCourseTitles",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitles": titles,
            "additionalContext": "More security focus",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let patch: TitlePatchResponse = serde_json::from_value(response.body).unwrap();

    assert_eq!(patch.titles_to_delete.len(), 1);
    assert!(titles.contains(&patch.titles_to_delete[0].as_str()));

    assert_eq!(patch.titles_to_add.len(), 2);
    assert_eq!(patch.titles_to_add[0].title, "Professional Ethics and Standards");
    assert_eq!(patch.titles_to_add[0].idx, 3);
    assert_eq!(patch.titles_to_add[1].title, "Industry Trends and Future Outlook");
    assert_eq!(patch.titles_to_add[1].idx, 6);
}

#[tokio::test]
async fn short_course_list_gets_no_deletion() {
    let response = post_json(
        router(),
        "/refineCourseTitles",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitles": ["A", "B", "C"],
            "additionalContext": "Keep it short",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "titlesToDelete": [],
            "titlesToAdd": [
                {"title": "Professional Ethics and Standards", "idx": 1},
                {"title": "Industry Trends and Future Outlook", "idx": 3},
            ],
        })
    );
}

#[tokio::test]
async fn empty_course_list_is_accepted() {
    let response = post_json(
        router(),
        "/refineCourseTitles",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitles": [],
            "additionalContext": "Start over",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["titlesToAdd"][0]["idx"], 0);
    assert_eq!(response.body["titlesToAdd"][1]["idx"], 0);
}

#[tokio::test]
async fn module_refinement_drops_first_of_long_list() {
    let response = post_json(
        router(),
        "/refineModuleTitles",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitles": ["M1", "M2", "M3", "M4", "M5"],
            "additionalContext": "More practice",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "titlesToDelete": ["M1"],
            "titlesToAdd": [{"title": "Hands-on Workshop Session", "idx": 2}],
        })
    );
}

#[tokio::test]
async fn module_refinement_keeps_short_list() {
    let response = post_json(
        router(),
        "/refineModuleTitles",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitles": ["M1", "M2", "M3", "M4"],
            "additionalContext": "More practice",
        }),
    )
    .await;

    let patch: TitlePatchResponse = serde_json::from_value(response.body).unwrap();
    assert!(patch.titles_to_delete.is_empty());
    assert_eq!(patch.titles_to_add.len(), 1);
}

#[tokio::test]
async fn segment_refinement_drops_second_segment_title() {
    let response = post_json(
        router(),
        "/refineSegmentOverview",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
            "segments": [
                {"title": "S1", "type": "Info"},
                {"title": "S2", "type": "Info"},
                {"title": "S3", "type": "Research"},
                {"title": "S4", "type": "Exercise"},
                {"title": "S5", "type": "Project"},
            ],
            "additionalContext": "Add a case study",
        }),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "segmentsToDelete": ["S2"],
            "titlesToAdd": [{
                "segment": {"title": "Real-world Case Study Analysis", "type": "Research"},
                "idx": 3,
            }],
        })
    );
}

#[tokio::test]
async fn segment_refinement_keeps_short_overview() {
    let response = post_json(
        router(),
        "/refineSegmentOverview",
        json!({
            "jobTitle": "Software Engineer",
            "courseTitle": "Fundamentals of Programming",
            "moduleTitle": "Variables and Data Types",
            "segments": [
                {"title": "S1", "type": "Info"},
                {"title": "S2", "type": "Info"},
                {"title": "S3", "type": "Research"},
                {"title": "S4", "type": "Exercise"},
            ],
            "additionalContext": "Add a case study",
        }),
    )
    .await;

    let patch: SegmentPatchResponse = serde_json::from_value(response.body).unwrap();
    assert!(patch.segments_to_delete.is_empty());
    assert_eq!(patch.titles_to_add[0].idx, 3);
}
