//! Golfer lookup

use super::{client::GhinClient, codec::get_and_decode};
use crate::{
    Result,
    transport::Transport,
    types::{Golfer, SearchGolfersInput},
};
use serde::Deserialize;

/// Golfer search endpoint
pub const SEARCH_GOLFERS_PATH: &str = "golfers/search.json";

#[derive(Debug, Deserialize)]
struct SearchGolfersResponse {
    #[serde(default)]
    golfers: Option<Vec<Golfer>>,
}

impl<T: Transport> GhinClient<T> {
    /// Searches golfers by name, GHIN number or location.
    pub async fn search_golfers(&self, input: SearchGolfersInput) -> Result<Vec<Golfer>> {
        let query = input.to_query();

        let response: SearchGolfersResponse = get_and_decode(self.session(), SEARCH_GOLFERS_PATH, &query)
            .await
            .map_err(|e| e.context("problem searching for golfers"))?;
        Ok(response.golfers.unwrap_or_default())
    }
}
