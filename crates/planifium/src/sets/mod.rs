//! In-memory store for course sets.
//!
//! Sets are write-once: created with a generated id, never updated or
//! deleted, and lost on restart. That lifetime is a stated limitation of the
//! service, not something this module tries to paper over.

use dashmap::DashMap;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of distinct courses in one set.
pub const MAX_COURSES: usize = 6;

/// A bounded collection of course codes a student is considering for one
/// term. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSet {
    pub id: String,
    /// Normalized term code, e.g. H25/A24/E24
    pub term: String,
    /// 1..=6 distinct normalized course codes, in submission order
    pub course_codes: Vec<String>,
}

/// Rejected set-creation input. The first violated rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid term '{0}': expected H, A or E followed by a two-digit year (e.g. H25)")]
    InvalidTerm(String),

    #[error("course list must contain at least one course code")]
    EmptyCourseList,

    #[error("a course set may contain at most {MAX_COURSES} distinct courses, got {0}")]
    TooManyCourses(usize),

    #[error("invalid course code '{0}': expected three letters and four digits (e.g. IFT2255)")]
    InvalidCourseCode(String),
}

/// Concurrent-safe keyed store for course sets.
pub struct CourseSetStore {
    sets: DashMap<String, CourseSet>,
    term_pattern: Regex,
    code_pattern: Regex,
}

impl CourseSetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sets: DashMap::new(),
            term_pattern: Regex::new(r"^[HAE]\d{2}$").expect("term pattern is valid"),
            code_pattern: Regex::new(r"^[A-Z]{3}\d{4}$").expect("course code pattern is valid"),
        }
    }

    /// Validates the input and, if acceptable, stores a new immutable set.
    ///
    /// Validation order (first failure wins): term format, non-empty course
    /// list, size cap, per-code format. Codes are trimmed and upper-cased,
    /// and duplicates are dropped before the size check, so six *distinct*
    /// codes is the real cap.
    pub fn create(
        &self,
        term: &str,
        course_codes: &[String],
    ) -> Result<CourseSet, ValidationError> {
        let term = term.trim().to_uppercase();
        if !self.term_pattern.is_match(&term) {
            return Err(ValidationError::InvalidTerm(term));
        }

        let mut cleaned: Vec<String> = Vec::new();
        for code in course_codes {
            let code = code.trim().to_uppercase();
            if !code.is_empty() && !cleaned.contains(&code) {
                cleaned.push(code);
            }
        }

        if cleaned.is_empty() {
            return Err(ValidationError::EmptyCourseList);
        }
        if cleaned.len() > MAX_COURSES {
            return Err(ValidationError::TooManyCourses(cleaned.len()));
        }
        for code in &cleaned {
            if !self.code_pattern.is_match(code) {
                return Err(ValidationError::InvalidCourseCode(code.clone()));
            }
        }

        let set = CourseSet {
            id: Uuid::new_v4().to_string(),
            term,
            course_codes: cleaned,
        };
        self.sets.insert(set.id.clone(), set.clone());

        Ok(set)
    }

    /// Looks up a set by id.
    pub fn get(&self, id: &str) -> Option<CourseSet> {
        self.sets.get(id).map(|entry| entry.value().clone())
    }

    /// Returns the number of stored sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if no sets have been created.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl Default for CourseSetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_create_valid_set() {
        let store = CourseSetStore::new();

        let set = store
            .create("H25", &codes(&["IFT1015", "IFT2255", "IFT2015"]))
            .unwrap();

        assert_eq!(set.term, "H25");
        assert_eq!(set.course_codes, vec!["IFT1015", "IFT2255", "IFT2015"]);
        assert!(!set.id.is_empty());
    }

    #[test]
    fn test_create_normalizes_term_and_codes() {
        let store = CourseSetStore::new();

        let set = store
            .create(" h25 ", &codes(&[" ift2255 ", "ift1015"]))
            .unwrap();

        assert_eq!(set.term, "H25");
        assert_eq!(set.course_codes, vec!["IFT2255", "IFT1015"]);
    }

    #[test]
    fn test_create_rejects_bad_term() {
        let store = CourseSetStore::new();
        let ids = codes(&["IFT2255"]);

        for term in ["", "INVALID", "X99", "H2025", "25H"] {
            assert!(
                matches!(store.create(term, &ids), Err(ValidationError::InvalidTerm(_))),
                "term '{term}' should be rejected"
            );
        }
    }

    #[test]
    fn test_create_rejects_empty_list() {
        let store = CourseSetStore::new();

        assert_eq!(store.create("H25", &[]), Err(ValidationError::EmptyCourseList));
        // Whitespace-only entries clean down to nothing
        assert_eq!(
            store.create("H25", &codes(&["  ", ""])),
            Err(ValidationError::EmptyCourseList)
        );
    }

    #[test]
    fn test_create_enforces_six_course_cap() {
        let store = CourseSetStore::new();

        let seven = codes(&[
            "IFT1015", "IFT1025", "IFT2015", "IFT2255", "IFT3150", "IFT3225", "IFT3245",
        ]);
        assert_eq!(
            store.create("H25", &seven),
            Err(ValidationError::TooManyCourses(7))
        );

        let six = codes(&[
            "IFT1015", "IFT1025", "IFT2015", "IFT2255", "IFT3150", "IFT3225",
        ]);
        assert!(store.create("H25", &six).is_ok());
    }

    #[test]
    fn test_duplicates_removed_before_size_check() {
        let store = CourseSetStore::new();

        // Seven raw entries, six distinct
        let set = store
            .create(
                "H25",
                &codes(&[
                    "IFT1015", "ift1015", "IFT1025", "IFT2015", "IFT2255", "IFT3150", "IFT3225",
                ]),
            )
            .unwrap();

        assert_eq!(set.course_codes.len(), 6);
    }

    #[test]
    fn test_create_rejects_bad_course_code() {
        let store = CourseSetStore::new();

        let result = store.create("H25", &codes(&["IFT1015", "INVALID", "IFT2255"]));

        assert_eq!(
            result,
            Err(ValidationError::InvalidCourseCode("INVALID".to_string()))
        );
    }

    #[test]
    fn test_term_checked_before_course_list() {
        let store = CourseSetStore::new();

        // Both the term and the list are bad; term rule wins.
        assert!(matches!(
            store.create("nope", &[]),
            Err(ValidationError::InvalidTerm(_))
        ));
    }

    #[test]
    fn test_get_returns_stored_set() {
        let store = CourseSetStore::new();
        let created = store.create("A24", &codes(&["IFT1015", "IFT2255"])).unwrap();

        let found = store.get(&created.id).expect("set should be stored");

        assert_eq!(found.id, created.id);
        assert_eq!(found.term, "A24");
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = CourseSetStore::new();

        assert!(store.get("no-such-id").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = CourseSetStore::new();
        let ids = codes(&["IFT2255"]);

        let a = store.create("H25", &ids).unwrap();
        let b = store.create("H25", &ids).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }
}
