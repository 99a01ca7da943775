//! Domain operations for the GHIN API
//!
//! [`GhinClient`] is defined in `client`; each of the other modules adds the
//! operations for one group of endpoints.

pub mod client;
pub mod codec;
pub mod courses;
pub mod golfers;
pub mod scores;

pub use client::GhinClient;
pub use courses::{COURSE_DETAILS_PATH, SEARCH_COURSES_PATH};
pub use golfers::SEARCH_GOLFERS_PATH;
pub use scores::{SCORES_PATH, SUBMIT_SCORE_PATH};
