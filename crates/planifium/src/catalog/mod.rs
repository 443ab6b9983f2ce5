//! HTTP client for the Planifium course catalog.
//!
//! The catalog is the only external collaborator of the engine. Its payload
//! is parsed once here into the typed shapes in [`types`]; "course not
//! found" and "no schedule for the term" are both represented as `Ok(None)`
//! so the schedule assembler can apply its best-effort exclusion policy.

mod error;
mod types;

pub use error::CatalogError;
pub use types::{Activity, ActivityGroup, CatalogCourse, CourseSchedule, Section, TermSchedule};

use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Base URL for the Planifium catalog API.
const CATALOG_BASE_URL: &str = "https://planifium-api.onrender.com/api/v1";

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    pub base_url: String,
    /// Connect timeout for catalog requests
    pub connect_timeout: Duration,
    /// Total per-request timeout; on expiry the course is excluded, not the
    /// whole request failed
    pub request_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: CATALOG_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("planifium-api-wrapper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client for fetching course schedules from the Planifium catalog.
pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a new catalog client with default configuration.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        // Fail fast on a bad base URL rather than on the first fetch
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Fetches one course's schedule for a specific term.
    ///
    /// # Arguments
    /// * `course_code` - Normalized course code (e.g. `IFT2255`)
    /// * `term` - Normalized term code (e.g. `H25`)
    ///
    /// # Returns
    /// * `Ok(Some(CourseSchedule))` - The course has schedule data for the term
    /// * `Ok(None)` - The course is unknown, or has no schedule for the term
    /// * `Err(CatalogError)` - Transport or payload failure for this course
    pub async fn fetch_course_schedule(
        &self,
        course_code: &str,
        term: &str,
    ) -> Result<Option<CourseSchedule>, CatalogError> {
        let correlation_id = generate_correlation_id();
        let url = Url::parse(&format!("{}/courses/{}", self.config.base_url, course_code))?;

        debug!(
            correlation_id = %correlation_id,
            course = %course_code,
            term = %term,
            "Fetching course schedule from catalog"
        );

        let semester = term.to_lowercase();
        let response = self
            .client
            .get(url)
            .query(&[
                ("include_schedule", "true"),
                ("schedule_semester", semester.as_str()),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            info!(
                correlation_id = %correlation_id,
                course = %course_code,
                "Course not found in catalog"
            );
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
            });
        }

        let course: CatalogCourse =
            response
                .json()
                .await
                .map_err(|e| CatalogError::Malformed {
                    message: e.to_string(),
                })?;

        if course.schedules.is_empty() {
            info!(
                correlation_id = %correlation_id,
                course = %course_code,
                term = %term,
                "Course has no schedule for term"
            );
            return Ok(None);
        }

        // The catalog already filtered schedules by semester; merge the
        // sections of whatever entries came back.
        let sections = course
            .schedules
            .into_iter()
            .flat_map(|schedule| schedule.sections)
            .collect();

        Ok(Some(CourseSchedule {
            course_code: course_code.to_string(),
            sections,
        }))
    }
}

/// Generates a short correlation ID for request tracing.
fn generate_correlation_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFFFFFF, random)
}
