//! Best-effort assembly of a course set's term schedule.
//!
//! Each course in the set is fetched from the catalog independently; a
//! course whose lookup fails or that has no schedule for the term is
//! excluded rather than failing the request. The exclusion is explicit in
//! the per-course `Result` and surfaced to callers as a count, so the
//! degradation is observable instead of silent.

use crate::catalog::{CatalogClient, CatalogError};
use crate::schedule::slots::{extract_slots, ActivitySlot};
use crate::sets::CourseSet;
use futures::future::join_all;
use tracing::warn;

/// Why a course was left out of an assembled schedule.
#[derive(Debug)]
pub enum ExclusionReason {
    /// The catalog has no entry or no schedule for the term
    NoScheduleForTerm,
    /// The catalog lookup failed for this course
    Upstream(CatalogError),
}

/// One included course with its flattened slots.
#[derive(Debug, Clone)]
pub struct CourseSlots {
    pub course_code: String,
    pub slots: Vec<ActivitySlot>,
}

/// The assembled schedule for a course set.
#[derive(Debug, Clone, Default)]
pub struct AssembledSchedule {
    /// Included courses, in the set's course-code order
    pub courses: Vec<CourseSlots>,
    /// Courses excluded because the catalog had nothing usable for them
    pub excluded_count: usize,
    /// Total activities skipped during slot extraction, across all courses
    pub skipped_activities: usize,
}

impl AssembledSchedule {
    /// Flattens the union of all included courses' slots, preserving
    /// per-course order.
    pub fn all_slots(&self) -> Vec<ActivitySlot> {
        self.courses
            .iter()
            .flat_map(|course| course.slots.iter().cloned())
            .collect()
    }
}

/// Fetches and flattens per-course schedules for stored sets.
pub struct ScheduleAssembler {
    catalog: CatalogClient,
}

impl ScheduleAssembler {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    /// Assembles the schedule for every course in the set, for the set's
    /// term. Fetches run concurrently; the result keeps the set's order.
    pub async fn assemble(&self, set: &CourseSet) -> AssembledSchedule {
        let fetches = set.course_codes.iter().map(|code| async move {
            (code.as_str(), self.fetch_one(code, &set.term).await)
        });

        let mut assembled = AssembledSchedule::default();
        for (code, outcome) in join_all(fetches).await {
            match outcome {
                Ok((course, skipped)) => {
                    assembled.skipped_activities += skipped;
                    assembled.courses.push(course);
                }
                Err(ExclusionReason::NoScheduleForTerm) => {
                    warn!(
                        course = %code,
                        term = %set.term,
                        "No schedule for term, excluding course from set schedule"
                    );
                    assembled.excluded_count += 1;
                }
                Err(ExclusionReason::Upstream(e)) => {
                    warn!(
                        course = %code,
                        term = %set.term,
                        error = %e,
                        "Catalog lookup failed, excluding course from set schedule"
                    );
                    assembled.excluded_count += 1;
                }
            }
        }

        assembled
    }

    async fn fetch_one(
        &self,
        course_code: &str,
        term: &str,
    ) -> Result<(CourseSlots, usize), ExclusionReason> {
        let schedule = self
            .catalog
            .fetch_course_schedule(course_code, term)
            .await
            .map_err(ExclusionReason::Upstream)?
            .ok_or(ExclusionReason::NoScheduleForTerm)?;

        let extracted = extract_slots(&schedule);
        Ok((
            CourseSlots {
                course_code: course_code.to_string(),
                slots: extracted.slots,
            },
            extracted.skipped,
        ))
    }
}
