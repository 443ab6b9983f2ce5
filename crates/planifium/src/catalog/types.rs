/// Types for the Planifium catalog payload.
///
/// The upstream JSON is loosely typed (sections carry their activity groups
/// under a generic "volets" list), so everything is parsed once here into
/// tagged structures and the rest of the crate never probes raw maps.
use serde::{Deserialize, Serialize};

/// A course entry as returned by `GET /courses/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCourse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Term schedules; already filtered by the `schedule_semester` query
    /// parameter on the catalog side.
    #[serde(default)]
    pub schedules: Vec<TermSchedule>,
}

/// One term's schedule for a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermSchedule {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "fetch_date")]
    pub fetch_date: Option<String>,

    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A section of a course (e.g. section "A"), grouping its activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub capacity: Option<String>,

    #[serde(default)]
    pub teachers: Vec<String>,

    /// Activity groups, "volets" in the catalog's vocabulary (lecture block,
    /// lab block, tutorial block).
    #[serde(default, rename = "volets")]
    pub activity_groups: Vec<ActivityGroup>,
}

/// A labeled group of recurring activities within a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGroup {
    /// Free-text label such as "TH" or "TP"; may be empty.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single recurring meeting pattern: a weekday list plus a time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Short weekday tokens, e.g. "Lu", "Ma", "Me".
    #[serde(default)]
    pub days: Vec<String>,

    #[serde(default, rename = "start_time")]
    pub start_time: Option<String>,

    #[serde(default, rename = "end_time")]
    pub end_time: Option<String>,

    #[serde(default)]
    pub room: Option<String>,
}

/// A course's schedule for one term, flattened across the catalog's
/// per-term schedule entries. This is the shape slot extraction consumes.
#[derive(Debug, Clone)]
pub struct CourseSchedule {
    pub course_code: String,
    pub sections: Vec<Section>,
}
