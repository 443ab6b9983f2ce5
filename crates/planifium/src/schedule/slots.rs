//! Flattens a course's nested schedule into comparable per-day slots.
//!
//! The catalog shape is course -> section -> activity group -> activity,
//! where one activity lists several weekdays. Conflict detection wants a
//! flat list of day-instances, so an activity on `["Lu", "Me"]` expands into
//! two slots carrying the same time range.

use crate::catalog::CourseSchedule;
use crate::schedule::time::parse_time;
use serde::Serialize;
use tracing::debug;

/// One day-instance of a recurring activity; the atomic unit compared for
/// overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySlot {
    pub course_code: String,
    pub section_name: String,
    /// Activity-group label (e.g. "TH", "TP"); may be empty, never absent.
    pub activity_type: String,
    /// Short weekday token, copied verbatim from the catalog (e.g. "Lu").
    pub day: String,
    pub start_minute: u16,
    pub end_minute: u16,
}

/// Result of flattening one course's schedule.
#[derive(Debug, Clone, Default)]
pub struct ExtractedSlots {
    /// Slots in input order (stable order keeps conflict output deterministic)
    pub slots: Vec<ActivitySlot>,
    /// Activities dropped for missing days, unparsable times, or an empty
    /// time range. A diagnostic, never an error.
    pub skipped: usize,
}

/// Walks one course's schedule and emits one slot per (activity, day) pair.
///
/// Activities with no day list, a missing or malformed start/end time, or a
/// start at/after their end are skipped and counted; nothing here ever fails.
pub fn extract_slots(course: &CourseSchedule) -> ExtractedSlots {
    let mut extracted = ExtractedSlots::default();

    for section in &course.sections {
        for group in &section.activity_groups {
            for activity in &group.activities {
                if activity.days.is_empty() {
                    skip(&mut extracted, course, &section.name, "no days listed");
                    continue;
                }

                let times = activity
                    .start_time
                    .as_deref()
                    .zip(activity.end_time.as_deref());
                let Some((start_raw, end_raw)) = times else {
                    skip(&mut extracted, course, &section.name, "missing time");
                    continue;
                };

                let (Ok(start), Ok(end)) = (parse_time(start_raw), parse_time(end_raw)) else {
                    skip(&mut extracted, course, &section.name, "unparsable time");
                    continue;
                };

                if start >= end {
                    skip(&mut extracted, course, &section.name, "empty time range");
                    continue;
                }

                for day in &activity.days {
                    extracted.slots.push(ActivitySlot {
                        course_code: course.course_code.clone(),
                        section_name: section.name.clone(),
                        activity_type: group.name.clone(),
                        day: day.clone(),
                        start_minute: start,
                        end_minute: end,
                    });
                }
            }
        }
    }

    extracted
}

fn skip(extracted: &mut ExtractedSlots, course: &CourseSchedule, section: &str, reason: &str) {
    extracted.skipped += 1;
    debug!(
        course = %course.course_code,
        section = %section,
        reason = %reason,
        "Skipping malformed activity"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Activity, ActivityGroup, Section};

    fn activity(days: &[&str], start: Option<&str>, end: Option<&str>) -> Activity {
        Activity {
            days: days.iter().map(|d| d.to_string()).collect(),
            start_time: start.map(String::from),
            end_time: end.map(String::from),
            room: None,
        }
    }

    fn course_with(activities: Vec<Activity>) -> CourseSchedule {
        CourseSchedule {
            course_code: "IFT2255".to_string(),
            sections: vec![Section {
                name: "A".to_string(),
                capacity: None,
                teachers: vec![],
                activity_groups: vec![ActivityGroup {
                    name: "TH".to_string(),
                    activities,
                }],
            }],
        }
    }

    #[test]
    fn test_multi_day_activity_expands_per_day() {
        let course = course_with(vec![activity(&["Lu", "Me"], Some("08:30"), Some("10:30"))]);

        let extracted = extract_slots(&course);

        assert_eq!(extracted.skipped, 0);
        assert_eq!(extracted.slots.len(), 2);
        assert_eq!(extracted.slots[0].day, "Lu");
        assert_eq!(extracted.slots[1].day, "Me");
        for slot in &extracted.slots {
            assert_eq!(slot.course_code, "IFT2255");
            assert_eq!(slot.section_name, "A");
            assert_eq!(slot.activity_type, "TH");
            assert_eq!(slot.start_minute, 8 * 60 + 30);
            assert_eq!(slot.end_minute, 10 * 60 + 30);
        }
    }

    #[test]
    fn test_activity_without_days_is_skipped() {
        let course = course_with(vec![
            activity(&[], Some("08:30"), Some("10:30")),
            activity(&["Ma"], Some("13:30"), Some("15:30")),
        ]);

        let extracted = extract_slots(&course);

        assert_eq!(extracted.skipped, 1);
        assert_eq!(extracted.slots.len(), 1);
        assert_eq!(extracted.slots[0].day, "Ma");
    }

    #[test]
    fn test_activity_with_bad_times_is_skipped() {
        let course = course_with(vec![
            activity(&["Lu"], None, Some("10:30")),
            activity(&["Lu"], Some("08:30"), None),
            activity(&["Lu"], Some("morning"), Some("10:30")),
            // Inverted and zero-length ranges are dropped too
            activity(&["Lu"], Some("11:00"), Some("10:00")),
            activity(&["Lu"], Some("10:00"), Some("10:00")),
        ]);

        let extracted = extract_slots(&course);

        assert_eq!(extracted.skipped, 5);
        assert!(extracted.slots.is_empty());
    }

    #[test]
    fn test_emission_order_is_input_order() {
        let mut course = course_with(vec![activity(&["Lu"], Some("08:30"), Some("10:30"))]);
        course.sections.push(Section {
            name: "B".to_string(),
            capacity: None,
            teachers: vec![],
            activity_groups: vec![ActivityGroup {
                name: String::new(),
                activities: vec![activity(&["Je", "Ve"], Some("09:00"), Some("11:00"))],
            }],
        });

        let extracted = extract_slots(&course);

        let order: Vec<_> = extracted
            .slots
            .iter()
            .map(|s| (s.section_name.as_str(), s.day.as_str()))
            .collect();
        assert_eq!(order, vec![("A", "Lu"), ("B", "Je"), ("B", "Ve")]);
        // Empty group labels are preserved as empty strings
        assert_eq!(extracted.slots[1].activity_type, "");
    }
}
