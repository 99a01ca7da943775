//! Golfer identity types returned by login and golfer search

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{deserialize_null_default, deserialize_string_from_number};

/// A golfer record as the service reports it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Golfer {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub ghin_number: String,
    pub prefix: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub player_name: String,
    pub gender: String,
    pub club_name: Option<String>,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub club_id: String,
    pub golf_association_name: Option<String>,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub golf_association_id: String,
    /// Handicap index as displayed (e.g. `"12.4"`, `"+1.2"`, `"NH"`)
    #[serde(deserialize_with = "deserialize_null_default")]
    pub display: String,
    pub date_of_birth: Option<String>,
    pub low_hi_display: Option<String>,
    pub email: Option<String>,
    pub primary_club_country: Option<String>,
    pub primary_club_state: Option<String>,
    pub primary_club_name: Option<String>,
    pub primary_club_id: Option<u64>,
    pub primary_golf_association_id: Option<u64>,
    pub primary_golf_association_name: Option<String>,
    pub rev_date: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    pub technology_provider: Option<String>,
    pub soft_cap: Option<String>,
    pub hard_cap: Option<String>,
    pub message_club_authorized: Option<String>,
}

/// Paid subscription attached to a golfer account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GolferSubscription {
    pub active: bool,
    pub subscription_app_type: Option<String>,
    pub subscription_type: Option<String>,
    pub initial_subscription_date: Option<String>,
    pub current_subscription_start_date: Option<String>,
    pub current_subscription_end_date: Option<String>,
    pub current_subscription_renewal_type: Option<String>,
}

/// The authenticated identity returned by login
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Session token; attached as `Authorization` on later calls
    pub golfer_user_token: String,
    pub golfer_id: u64,
    pub guardian_id: Option<u64>,
    pub golfer_user_accepted_terms: bool,
    pub golfer_creation_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub golfers: Vec<Golfer>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub minor_accounts: Vec<serde_json::Value>,
    pub subscription: Option<GolferSubscription>,
}

// The token is a credential; never print it.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("golfer_user_token", &"<redacted>")
            .field("golfer_id", &self.golfer_id)
            .field("guardian_id", &self.guardian_id)
            .field("golfer_user_accepted_terms", &self.golfer_user_accepted_terms)
            .field("golfer_creation_date", &self.golfer_creation_date)
            .field("golfers", &self.golfers)
            .field("minor_accounts", &self.minor_accounts)
            .field("subscription", &self.subscription)
            .finish()
    }
}

impl User {
    /// The golfer record matching this account's golfer id, if listed
    pub fn primary_golfer(&self) -> Option<&Golfer> {
        let id = self.golfer_id.to_string();
        self.golfers
            .iter()
            .find(|g| g.ghin_number == id)
            .or_else(|| self.golfers.first())
    }
}
