//! Type definitions for the GHIN API
//!
//! Wire DTOs for each endpoint plus the caller-facing request inputs.

pub mod course;
pub mod request;
pub mod score;
pub mod serde_helpers;
pub mod user;

pub use course::{
    CourseDetails, CourseOverview, CourseOverviewRating, CourseStatus, Facility, FacilityStatus,
    HoleDetails, Season, TeeSetDetails, TeeSetGender, TeeSetRating, TeeSetRatingType,
};
pub use request::{
    DEFAULT_SCORE_PAGE_SIZE, GetCourseDetailsInput, GetUserInfoInput, MAX_SCORE_PAGE_SIZE,
    QueryParams, SearchCoursesInput, SearchGolfersInput, SubmitScoreInput,
};
pub use score::{
    GolferScores, HoleScore, HolesPlayed, PlayerGender, RoundStatistics, Score, ScoreAdjustment,
    ScoreStatus, ScoreSubmission, ScoringType, ShotAccuracy, TeeSetSide,
};
pub use serde_helpers::Lenient;
pub use user::{Golfer, GolferSubscription, User};
