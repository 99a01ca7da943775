//! Score posting and score history

use super::{
    client::GhinClient,
    codec::{get_and_decode, post_and_decode},
};
use crate::{
    Result,
    transport::Transport,
    types::{GetUserInfoInput, GolferScores, Score, SubmitScoreInput},
    utils,
};

/// Hole-by-hole score posting endpoint
pub const SUBMIT_SCORE_PATH: &str = "scores/hbh.json";

/// Score history endpoint
pub const SCORES_PATH: &str = "scores.json";

impl<T: Transport> GhinClient<T> {
    /// Posts a hole-by-hole score for the logged-in golfer.
    ///
    /// Unset optional fields resolve to their defaults (all 18 tees, 18
    /// holes, away round, played today). The golfer id always comes from the
    /// active identity.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UserNotLoggedIn`] before login, without a network
    /// call. Any later failure is wrapped in [`crate::Error::Context`].
    pub async fn submit_score(&self, input: SubmitScoreInput) -> Result<Score> {
        let user = self.require_user("submit score").await?;
        let course_id = input.course_id;
        let submission = input.resolve(user.golfer_id.to_string(), utils::today());

        tracing::info!(
            "Submitting {} hole score for course {}",
            submission.hole_details.len(),
            course_id
        );
        post_and_decode(self.session(), SUBMIT_SCORE_PATH, &submission)
            .await
            .map_err(|e| e.context(format!("problem submitting score for course {}", course_id)))
    }

    /// Fetches one page of the logged-in golfer's score history.
    pub async fn get_user_info(&self, input: GetUserInfoInput) -> Result<GolferScores> {
        let user = self.require_user("fetch scores").await?;
        let query = input.to_query(user.golfer_id)?;

        get_and_decode(self.session(), SCORES_PATH, &query)
            .await
            .map_err(|e| e.context(format!("problem retrieving scores for golfer {}", user.golfer_id)))
    }
}
