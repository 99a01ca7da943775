//! Command-line interface for the `ghin` binary
//!
//! Argument definitions live here so they can be unit tested; the binary only
//! parses, sets up logging and hands off to [`commands::run`].

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{CourseStatus, FacilityStatus, ScoreStatus};

/// Command-line client for the GHIN handicap service
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "ghin")]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/ghin/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search courses by name or location
    SearchCourses(SearchCoursesArgs),

    /// Show tee sets and ratings for one course
    CourseDetails {
        /// Course id
        course_id: String,

        /// Include tee sets that were altered from the rated layout
        #[arg(long)]
        include_altered_tees: bool,
    },

    /// List the logged-in golfer's scores
    Scores {
        #[arg(long)]
        offset: Option<u32>,

        /// Page size (1-100)
        #[arg(long)]
        limit: Option<u32>,

        /// Only scores with this status; repeatable
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,
    },

    /// Post a hole-by-hole score from a JSON file
    SubmitScore {
        /// Round description in JSON
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Search golfers by name or GHIN number
    SearchGolfers(SearchGolfersArgs),
}

#[derive(Debug, Args)]
pub struct SearchCoursesArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub facility_id: Option<u64>,

    #[arg(long)]
    pub country: Option<String>,

    /// State code, e.g. US-CA
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub course_status: Option<String>,

    #[arg(long)]
    pub facility_status: Option<String>,

    /// Ask for tee sets in the results; `--include-tee-sets false` asks to leave them out
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub include_tee_sets: Option<bool>,

    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Debug, Args)]
pub struct SearchGolfersArgs {
    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    /// GHIN number
    #[arg(long)]
    pub ghin: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long, requires = "page")]
    pub per_page: Option<u32>,
}

/// Parse a status filter the way the service spells it
pub(crate) fn parse_course_status(value: &str) -> CourseStatus {
    match value {
        "Active" => CourseStatus::Active,
        "Inactive" => CourseStatus::Inactive,
        other => CourseStatus::Other(other.to_string()),
    }
}

pub(crate) fn parse_facility_status(value: &str) -> FacilityStatus {
    match value {
        "Active" => FacilityStatus::Active,
        "Inactive" => FacilityStatus::Inactive,
        other => FacilityStatus::Other(other.to_string()),
    }
}

pub(crate) fn parse_score_status(value: &str) -> ScoreStatus {
    match value {
        "Validated" => ScoreStatus::Validated,
        "UnderReview" => ScoreStatus::UnderReview,
        other => ScoreStatus::Other(other.to_string()),
    }
}
