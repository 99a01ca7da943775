//! Course and facility reference data
//!
//! The course endpoints use PascalCase field names, unlike the rest of the API.

use serde::{Deserialize, Serialize};

use super::score::HolesPlayed;
use super::serde_helpers::{Lenient, deserialize_null_default};

/// Listing status of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    Active,
    Inactive,
    #[serde(untagged)]
    Other(String),
}

impl CourseStatus {
    /// Wire representation, also used as the search filter value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Other(s) => s,
        }
    }
}

impl Default for CourseStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Listing status of a facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    Active,
    Inactive,
    #[serde(untagged)]
    Other(String),
}

impl FacilityStatus {
    /// Wire representation, also used as the search filter value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Other(s) => s,
        }
    }
}

impl Default for FacilityStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Gender a tee set is rated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeeSetGender {
    Male,
    Female,
    #[serde(untagged)]
    Other(String),
}

impl Default for TeeSetGender {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// Which part of the tee set a rating covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeeSetRatingType {
    Total,
    Front,
    Back,
    #[serde(untagged)]
    Other(String),
}

impl Default for TeeSetRatingType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Facility {
    pub facility_id: u64,
    pub facility_status: FacilityStatus,
    pub facility_name: String,
    pub facility_number: Option<String>,
    pub golf_association_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Season {
    pub season_name: Option<String>,
    pub season_start_date: Option<String>,
    pub season_end_date: Option<String>,
    pub is_all_year: bool,
}

/// A hole within a tee set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HoleDetails {
    pub number: u8,
    pub hole_id: u64,
    pub length: u32,
    pub par: u8,
    /// Stroke index
    pub allocation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeeSetRating {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rating_type: TeeSetRatingType,
    #[serde(default)]
    pub course_rating: f64,
    #[serde(default)]
    pub slope_rating: f64,
    #[serde(default)]
    pub bogey_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeeSetDetails {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub ratings: Vec<TeeSetRating>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub holes: Vec<HoleDetails>,
    pub tee_set_rating_id: u64,
    #[serde(default)]
    pub tee_set_rating_name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub gender: TeeSetGender,
    #[serde(default)]
    pub holes_number: Option<Lenient<HolesPlayed>>,
    #[serde(default)]
    pub total_yardage: u32,
    #[serde(default)]
    pub total_meters: u32,
    #[serde(rename = "LegacyCRPTeeId", default)]
    pub legacy_crp_tee_id: Option<u64>,
    #[serde(default)]
    pub stroke_allocation: bool,
    #[serde(default)]
    pub total_par: u32,
}

impl TeeSetDetails {
    /// The rating covering the given side, if the tee set is rated for it
    pub fn rating(&self, kind: TeeSetRatingType) -> Option<&TeeSetRating> {
        self.ratings.iter().find(|r| r.rating_type == kind)
    }
}

/// Full detail for a single course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CourseDetails {
    pub facility: Facility,
    pub season: Season,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub tee_sets: Vec<TeeSetDetails>,
    pub course_id: u64,
    pub course_name: String,
    pub course_status: CourseStatus,
    pub course_number: Option<String>,
    pub course_city: Option<String>,
    pub course_state: Option<String>,
}

/// Tee set summary inside a course search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CourseOverviewRating {
    pub tee_set_rating_id: u64,
    pub tee_set_rating_name: String,
    pub tee_set_status: Option<String>,
}

/// One course search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CourseOverview {
    #[serde(rename = "CourseID")]
    pub course_id: u64,
    pub course_status: CourseStatus,
    pub course_name: String,
    pub geo_location_latitude: Option<f64>,
    pub geo_location_longitude: Option<f64>,
    #[serde(rename = "FacilityID")]
    pub facility_id: u64,
    pub facility_status: FacilityStatus,
    pub facility_name: String,
    pub full_name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub ent_country_code: Option<u32>,
    pub ent_state_code: Option<u32>,
    #[serde(rename = "LegacyCRPCourseId")]
    pub legacy_crp_course_id: Option<u64>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub updated_on: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub ratings: Vec<CourseOverviewRating>,
}
