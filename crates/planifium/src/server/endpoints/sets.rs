//! API endpoints for course sets: creation, lookup, assembled schedules and
//! conflict queries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::schedule::{detect_conflicts, format_minute};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Request body for POST /sets.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetRequest {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub course_codes: Vec<String>,
}

/// POST /sets
///
/// Creates an immutable course set. Validation failures report the first
/// violated rule.
pub async fn post_create_set(
    State(s): State<Arc<AppState>>,
    Json(body): Json<CreateSetRequest>,
) -> Response {
    info!("POST /sets (term={}, {} codes)", body.term, body.course_codes.len());

    match s.sets.create(&body.term, &body.course_codes) {
        Ok(set) => (StatusCode::CREATED, Json(set)).into_response(),
        Err(e) => ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Invalid course set",
            Some(e.to_string()),
        ))
        .into_response(),
    }
}

/// GET /sets/:id
pub async fn get_set(Path(id): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("GET /sets/{}", id);

    match s.sets.get(&id) {
        Some(set) => (StatusCode::OK, Json(set)).into_response(),
        None => set_not_found(&id),
    }
}

/// GET /sets/:id/schedule
///
/// Returns the flattened activity slots of every course in the set for the
/// set's term. Courses the catalog has nothing for are absent and counted in
/// `excludedCount`.
pub async fn get_set_schedule(Path(id): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("GET /sets/{}/schedule", id);

    let Some(set) = s.sets.get(&id) else {
        return set_not_found(&id);
    };

    let assembled = s.assembler.assemble(&set).await;

    let courses: Vec<_> = assembled
        .courses
        .iter()
        .map(|course| {
            json!({
                "courseCode": course.course_code,
                "slots": course.slots.iter().map(|slot| {
                    json!({
                        "section": slot.section_name,
                        "activityType": slot.activity_type,
                        "day": slot.day,
                        "start": format_minute(slot.start_minute),
                        "end": format_minute(slot.end_minute),
                    })
                }).collect::<Vec<_>>(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "term": set.term,
            "courses": courses,
            "excludedCount": assembled.excluded_count,
            "skippedActivities": assembled.skipped_activities,
        })),
    )
        .into_response()
}

/// GET /sets/:id/conflicts
///
/// Computes cross-course time overlaps for the set. An empty list means the
/// set has no conflicts; an unknown id is a 404, never an empty list.
pub async fn get_set_conflicts(Path(id): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("GET /sets/{}/conflicts", id);

    let Some(set) = s.sets.get(&id) else {
        return set_not_found(&id);
    };

    let assembled = s.assembler.assemble(&set).await;
    let conflicts = detect_conflicts(&assembled.all_slots());

    info!(
        set_id = %set.id,
        conflicts = conflicts.len(),
        excluded = assembled.excluded_count,
        "Conflict detection completed"
    );

    (
        StatusCode::OK,
        Json(json!({
            "conflicts": conflicts,
            "excludedCount": assembled.excluded_count,
        })),
    )
        .into_response()
}

fn set_not_found(id: &str) -> Response {
    ApiErrorType::from((
        StatusCode::NOT_FOUND,
        "Course set not found",
        Some(format!("No course set with ID: {}", id)),
    ))
    .into_response()
}
