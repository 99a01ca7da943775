//! Command execution
//!
//! Every command talks to authenticated endpoints, so [`run`] logs in with the
//! configured credentials first and logs out afterwards.

use super::{
    Command, SearchCoursesArgs, SearchGolfersArgs, parse_course_status, parse_facility_status,
    parse_score_status,
};
use crate::{
    Error, GhinClient, Result,
    config::Settings,
    session::client::decode_body,
    transport::Transport,
    types::{
        GetCourseDetailsInput, GetUserInfoInput, SearchCoursesInput, SearchGolfersInput,
        SubmitScoreInput,
    },
};
use serde::Serialize;
use std::path::Path;

/// Log in, run `command`, log out, and return the result as pretty JSON.
pub async fn run<T: Transport>(
    client: &GhinClient<T>,
    settings: &Settings,
    command: Command,
) -> Result<String> {
    let (email, password) = settings.credentials.pair().ok_or_else(|| {
        Error::config("credentials required: set GHIN_EMAIL and GHIN_PASSWORD or the config file")
    })?;
    client.login(email, password).await?;

    let output = execute(client, command).await;

    if let Err(e) = client.logout().await {
        tracing::warn!("Logout failed: {}", e);
    }
    output
}

async fn execute<T: Transport>(client: &GhinClient<T>, command: Command) -> Result<String> {
    match command {
        Command::SearchCourses(args) => {
            to_pretty(&client.search_courses(search_courses_input(args)).await?)
        }
        Command::CourseDetails {
            course_id,
            include_altered_tees,
        } => {
            let input =
                GetCourseDetailsInput::new(course_id).with_include_altered_tees(include_altered_tees);
            to_pretty(&client.get_course_details(input).await?)
        }
        Command::Scores {
            offset,
            limit,
            statuses,
        } => {
            let mut input = GetUserInfoInput::new();
            input.offset = offset;
            input.limit = limit;
            input.statuses = statuses.iter().map(|s| parse_score_status(s)).collect();
            to_pretty(&client.get_user_info(input).await?)
        }
        Command::SubmitScore { file } => {
            let input = read_round(&file)?;
            to_pretty(&client.submit_score(input).await?)
        }
        Command::SearchGolfers(args) => {
            to_pretty(&client.search_golfers(search_golfers_input(args)).await?)
        }
    }
}

fn search_courses_input(args: SearchCoursesArgs) -> SearchCoursesInput {
    SearchCoursesInput {
        name: args.name,
        facility_id: args.facility_id,
        country: args.country,
        state: args.state,
        course_status: args.course_status.as_deref().map(parse_course_status),
        facility_status: args.facility_status.as_deref().map(parse_facility_status),
        include_tee_sets: args.include_tee_sets,
        limit: args.limit,
        offset: args.offset,
    }
}

fn search_golfers_input(args: SearchGolfersArgs) -> SearchGolfersInput {
    SearchGolfersInput {
        last_name: args.last_name,
        first_name: args.first_name,
        golfer_id: args.ghin,
        state: args.state,
        page: args.page,
        per_page: args.per_page,
        ..SearchGolfersInput::default()
    }
}

/// Read a [`SubmitScoreInput`] from a JSON file
pub fn read_round(path: &Path) -> Result<SubmitScoreInput> {
    let contents = std::fs::read(path)?;
    decode_body(&contents).map_err(|e| e.context(format!("invalid round file {}", path.display())))
}

fn to_pretty<V: Serialize>(value: &V) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::Serialization)
}
