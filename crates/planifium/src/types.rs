//! Shared application state.

use crate::schedule::ScheduleAssembler;
use crate::sets::CourseSetStore;

/// State shared by every request handler.
///
/// Constructed once at startup and passed around as an `Arc`; the store is
/// the only mutable piece and is internally concurrent-safe.
pub struct AppState {
    /// In-memory course set store (process lifetime)
    pub sets: CourseSetStore,
    /// Schedule assembler wrapping the catalog client
    pub assembler: ScheduleAssembler,
}
