//! Schedule engine: time model, slot extraction, conflict detection, and
//! best-effort assembly of a course set's term schedule.
//!
//! Everything in this module is computed fresh per query. Slots and
//! conflicts are views over whatever the catalog returns at call time, never
//! cached, because upstream schedule data can change between calls.

mod assembler;
mod conflicts;
mod slots;
mod time;

pub use assembler::{AssembledSchedule, CourseSlots, ExclusionReason, ScheduleAssembler};
pub use conflicts::{detect_conflicts, Conflict};
pub use slots::{extract_slots, ActivitySlot, ExtractedSlots};
pub use time::{format_minute, overlaps, parse_time, TimeParseError};
