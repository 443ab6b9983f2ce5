//! Cross-course time-overlap detection over flattened activity slots.

use crate::schedule::slots::ActivitySlot;
use crate::schedule::time::{format_minute, overlaps};
use serde::Serialize;
use std::collections::HashSet;

/// A detected time overlap between two slots of different courses.
///
/// Times are rendered back to `"HH:MM"` for the wire; the pair is unordered,
/// so `(A, B)` and `(B, A)` are the same conflict and only one is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub course_a: String,
    pub section_a: String,
    pub activity_type_a: String,
    /// The shared weekday token, as spelled by the first-discovered slot.
    pub day: String,
    pub start_a: String,
    pub end_a: String,
    pub course_b: String,
    pub section_b: String,
    pub activity_type_b: String,
    pub start_b: String,
    pub end_b: String,
}

impl Conflict {
    fn new(a: &ActivitySlot, b: &ActivitySlot) -> Self {
        Self {
            course_a: a.course_code.clone(),
            section_a: a.section_name.clone(),
            activity_type_a: a.activity_type.clone(),
            day: a.day.clone(),
            start_a: format_minute(a.start_minute),
            end_a: format_minute(a.end_minute),
            course_b: b.course_code.clone(),
            section_b: b.section_name.clone(),
            activity_type_b: b.activity_type.clone(),
            start_b: format_minute(b.start_minute),
            end_b: format_minute(b.end_minute),
        }
    }
}

/// Identity of one slot for deduplication purposes.
///
/// A comparable tuple rather than a delimited string, so field values
/// containing separator characters cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct SlotKey {
    course: String,
    section: String,
    activity_type: String,
    day: String,
    start: u16,
}

impl SlotKey {
    fn of(slot: &ActivitySlot) -> Self {
        Self {
            course: slot.course_code.clone(),
            section: slot.section_name.clone(),
            activity_type: slot.activity_type.clone(),
            // Day comparison is case-insensitive, so the key must be too
            day: slot.day.to_lowercase(),
            start: slot.start_minute,
        }
    }
}

/// Finds all deduplicated cross-course overlaps in a flattened slot list.
///
/// Pairs are scanned in index order (outer `i`, inner `j > i`) and emitted
/// in first-discovered order, which keeps the output reproducible for a
/// given input. Slots of the same course never conflict with each other: a
/// student picks one section per course, so intra-course overlap carries no
/// signal.
pub fn detect_conflicts(slots: &[ActivitySlot]) -> Vec<Conflict> {
    let mut seen: HashSet<(SlotKey, SlotKey)> = HashSet::new();
    let mut conflicts = Vec::new();

    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            let (a, b) = (&slots[i], &slots[j]);

            if a.course_code == b.course_code {
                continue;
            }
            if !a.day.eq_ignore_ascii_case(&b.day) {
                continue;
            }
            if !overlaps(a.start_minute, a.end_minute, b.start_minute, b.end_minute) {
                continue;
            }

            let (key_a, key_b) = (SlotKey::of(a), SlotKey::of(b));
            let canonical = if key_a <= key_b {
                (key_a, key_b)
            } else {
                (key_b, key_a)
            };

            if seen.insert(canonical) {
                conflicts.push(Conflict::new(a, b));
            }
        }
    }

    conflicts
}
