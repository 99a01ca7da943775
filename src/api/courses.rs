//! Course search and course detail lookups

use super::{client::GhinClient, codec::get_and_decode};
use crate::{
    Result,
    transport::Transport,
    types::{CourseDetails, CourseOverview, GetCourseDetailsInput, SearchCoursesInput},
};
use serde::Deserialize;

/// Course detail endpoint
pub const COURSE_DETAILS_PATH: &str = "crsCourseMethods.asmx/GetCourseDetails.json";

/// Course search endpoint
pub const SEARCH_COURSES_PATH: &str = "crsCourseMethods.asmx/SearchCourses.json";

#[derive(Debug, Deserialize)]
struct SearchCoursesResponse {
    #[serde(default)]
    courses: Option<Vec<CourseOverview>>,
}

impl<T: Transport> GhinClient<T> {
    /// Fetches full detail for one course, including its tee sets.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidInput`] for an empty course id, before any
    /// request. Later failures carry the course id as context.
    pub async fn get_course_details(&self, input: GetCourseDetailsInput) -> Result<CourseDetails> {
        let query = input.to_query()?;

        get_and_decode(self.session(), COURSE_DETAILS_PATH, &query)
            .await
            .map_err(|e| e.context(format!("problem retrieving course \"{}\" details", input.course_id)))
    }

    /// Searches courses. Only the filters that are set are sent, and the
    /// service's result list is returned as-is.
    pub async fn search_courses(&self, input: SearchCoursesInput) -> Result<Vec<CourseOverview>> {
        let query = input.to_query();
        tracing::debug!("Searching courses with {} filters", query.len());

        let response: SearchCoursesResponse = get_and_decode(self.session(), SEARCH_COURSES_PATH, &query)
            .await
            .map_err(|e| e.context("problem searching for courses"))?;
        Ok(response.courses.unwrap_or_default())
    }
}
