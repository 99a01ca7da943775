//! Request type definitions
//!
//! Caller-facing inputs for each API operation. Optional fields are `None`
//! until set; each input knows how to resolve itself into the wire payload
//! or query string, so the defaulting rules are testable without a network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::course::{CourseStatus, FacilityStatus};
use super::score::{
    HoleScore, HolesPlayed, PlayerGender, ScoreStatus, ScoreSubmission, ScoringType, TeeSetSide,
};
use crate::utils::played_at_string;

/// Ordered query parameters; empty means no query string at all
pub type QueryParams = Vec<(&'static str, String)>;

/// Default page size for score history
pub const DEFAULT_SCORE_PAGE_SIZE: u32 = 25;

/// Largest page size the score history accepts
pub const MAX_SCORE_PAGE_SIZE: u32 = 100;

/// Input for posting a hole-by-hole score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitScoreInput {
    pub gender: PlayerGender,
    pub course_id: u64,
    pub tee_set_id: u64,
    /// Defaults to [`TeeSetSide::All18`]
    #[serde(default)]
    pub tee_set_side: Option<TeeSetSide>,
    /// Defaults to the current date
    #[serde(default)]
    pub played_at: Option<NaiveDate>,
    pub hole_details: Vec<HoleScore>,
    /// Defaults to [`HolesPlayed::Eighteen`]
    #[serde(default)]
    pub number_of_holes: Option<HolesPlayed>,
    /// Defaults to [`ScoringType::Away`]
    #[serde(default)]
    pub score_type: Option<ScoringType>,
    #[serde(default)]
    pub override_confirmation: Option<bool>,
    #[serde(default)]
    pub is_manual: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
}

impl SubmitScoreInput {
    /// Create an input with only the required fields set
    pub fn new(
        gender: PlayerGender,
        course_id: u64,
        tee_set_id: u64,
        hole_details: Vec<HoleScore>,
    ) -> Self {
        Self {
            gender,
            course_id,
            tee_set_id,
            tee_set_side: None,
            played_at: None,
            hole_details,
            number_of_holes: None,
            score_type: None,
            override_confirmation: None,
            is_manual: None,
            source: None,
        }
    }

    pub fn with_tee_set_side(mut self, side: TeeSetSide) -> Self {
        self.tee_set_side = Some(side);
        self
    }

    pub fn with_played_at(mut self, date: NaiveDate) -> Self {
        self.played_at = Some(date);
        self
    }

    pub fn with_number_of_holes(mut self, holes: HolesPlayed) -> Self {
        self.number_of_holes = Some(holes);
        self
    }

    pub fn with_score_type(mut self, score_type: ScoringType) -> Self {
        self.score_type = Some(score_type);
        self
    }

    pub fn with_override_confirmation(mut self, confirm: bool) -> Self {
        self.override_confirmation = Some(confirm);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Resolve every unset field to its default.
    ///
    /// `today` stands in for the played-at date when none was given.
    pub fn resolve(self, golfer_id: impl Into<String>, today: NaiveDate) -> ScoreSubmission {
        ScoreSubmission {
            golfer_id: golfer_id.into(),
            gender: self.gender,
            course_id: self.course_id,
            tee_set_id: self.tee_set_id,
            tee_set_side: self.tee_set_side.unwrap_or_default(),
            played_at: played_at_string(self.played_at.unwrap_or(today)),
            hole_details: self.hole_details,
            number_of_holes: self.number_of_holes.unwrap_or_default(),
            score_type: self.score_type.unwrap_or_default(),
            override_confirmation: self.override_confirmation,
            is_manual: self.is_manual,
            source: self.source,
        }
    }
}

/// Input for a course detail lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCourseDetailsInput {
    pub course_id: String,
    /// Defaults to `false`
    pub include_altered_tees: Option<bool>,
}

impl GetCourseDetailsInput {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            include_altered_tees: None,
        }
    }

    pub fn with_include_altered_tees(mut self, include: bool) -> Self {
        self.include_altered_tees = Some(include);
        self
    }

    /// Query parameters; the course id is required
    pub fn to_query(&self) -> crate::Result<QueryParams> {
        if self.course_id.trim().is_empty() {
            return Err(crate::Error::invalid_input("course id is required"));
        }

        Ok(vec![
            ("courseId", self.course_id.clone()),
            (
                "include_altered_tees",
                self.include_altered_tees.unwrap_or(false).to_string(),
            ),
        ])
    }
}

/// Filters for a course search. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCoursesInput {
    pub name: Option<String>,
    pub facility_id: Option<u64>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub course_status: Option<CourseStatus>,
    pub facility_status: Option<FacilityStatus>,
    pub include_tee_sets: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchCoursesInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_facility_id(mut self, facility_id: u64) -> Self {
        self.facility_id = Some(facility_id);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_course_status(mut self, status: CourseStatus) -> Self {
        self.course_status = Some(status);
        self
    }

    pub fn with_facility_status(mut self, status: FacilityStatus) -> Self {
        self.facility_status = Some(status);
        self
    }

    pub fn with_include_tee_sets(mut self, include: bool) -> Self {
        self.include_tee_sets = Some(include);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(facility_id) = self.facility_id {
            params.push(("facility_id", facility_id.to_string()));
        }
        if let Some(country) = &self.country {
            params.push(("country", country.clone()));
        }
        if let Some(state) = &self.state {
            params.push(("state", state.clone()));
        }
        if let Some(status) = &self.course_status {
            params.push(("course_status", status.as_str().to_string()));
        }
        if let Some(status) = &self.facility_status {
            params.push(("facility_status", status.as_str().to_string()));
        }
        if let Some(include) = self.include_tee_sets {
            params.push(("include_tee_sets", include.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// Paging and filtering for the logged-in golfer's score history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUserInfoInput {
    /// Number of scores to skip; defaults to 0
    pub offset: Option<u32>,
    /// Page size; defaults to [`DEFAULT_SCORE_PAGE_SIZE`], at most [`MAX_SCORE_PAGE_SIZE`]
    pub limit: Option<u32>,
    /// Only scores whose status is one of these; empty means all
    #[serde(default)]
    pub statuses: Vec<ScoreStatus>,
}

impl GetUserInfoInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_status(mut self, status: ScoreStatus) -> Self {
        self.statuses.push(status);
        self
    }

    /// Query parameters for the given golfer, after bounds checks
    pub fn to_query(&self, golfer_id: u64) -> crate::Result<QueryParams> {
        let limit = self.limit.unwrap_or(DEFAULT_SCORE_PAGE_SIZE);
        if !(1..=MAX_SCORE_PAGE_SIZE).contains(&limit) {
            return Err(crate::Error::invalid_input(format!(
                "limit must be between 1 and {}, got {}",
                MAX_SCORE_PAGE_SIZE, limit
            )));
        }

        let mut params = vec![
            ("golfer_id", golfer_id.to_string()),
            ("offset", self.offset.unwrap_or(0).to_string()),
            ("limit", limit.to_string()),
        ];
        if !self.statuses.is_empty() {
            let statuses: Vec<&str> = self.statuses.iter().map(ScoreStatus::as_str).collect();
            params.push(("statuses", statuses.join(",")));
        }
        Ok(params)
    }
}

/// Filters for a golfer search. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchGolfersInput {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    /// GHIN number
    pub golfer_id: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchGolfersInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_golfer_id(mut self, golfer_id: impl Into<String>) -> Self {
        self.golfer_id = Some(golfer_id.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        let text_fields = [
            ("last_name", &self.last_name),
            ("first_name", &self.first_name),
            ("golfer_id", &self.golfer_id),
            ("state", &self.state),
            ("country", &self.country),
            ("status", &self.status),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                params.push((key, value.clone()));
            }
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}
