//! Score posting and score history types
//!
//! Enumerations here serialize to the service's short codes (`"ALL18"`,
//! `"A"`, `"M"`, ...). Hole counts and shot accuracy travel as JSON numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{Lenient, deserialize_null_default, deserialize_string_from_number};

/// Where a missed shot finished relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ShotAccuracy {
    MissedLeft = 0,
    MissedRight = 1,
    MissedLong = 2,
    MissedShort = 3,
}

impl TryFrom<u8> for ShotAccuracy {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::MissedLeft),
            1 => Ok(Self::MissedRight),
            2 => Ok(Self::MissedLong),
            3 => Ok(Self::MissedShort),
            other => Err(format!("invalid shot accuracy code: {}", other)),
        }
    }
}

impl From<ShotAccuracy> for u8 {
    fn from(value: ShotAccuracy) -> Self {
        value as u8
    }
}

/// Which holes of the tee set were played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeeSetSide {
    #[default]
    #[serde(rename = "ALL18")]
    All18,
    #[serde(rename = "F9")]
    Front9,
    #[serde(rename = "B9")]
    Back9,
}

/// The circumstances the round was played under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringType {
    #[serde(rename = "H")]
    Home,
    #[default]
    #[serde(rename = "A")]
    Away,
    #[serde(rename = "T")]
    Tournament,
}

impl ScoringType {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Away => "Away",
            Self::Tournament => "Tournament",
        }
    }
}

/// Gender of the player, as the score endpoints encode it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerGender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl PlayerGender {
    /// The non-abbreviated form (`"Male"` / `"Female"`)
    pub fn long_string(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Whether a round covers nine or eighteen holes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolesPlayed {
    Nine = 9,
    #[default]
    Eighteen = 18,
}

impl TryFrom<u8> for HolesPlayed {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(Self::Nine),
            18 => Ok(Self::Eighteen),
            other => Err(format!("invalid number of holes: {}", other)),
        }
    }
}

impl From<HolesPlayed> for u8 {
    fn from(value: HolesPlayed) -> Self {
        value as u8
    }
}

/// Review state of a posted score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    Validated,
    UnderReview,
    #[serde(untagged)]
    Other(String),
}

impl ScoreStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Validated => "Validated",
            Self::UnderReview => "UnderReview",
            Self::Other(s) => s,
        }
    }
}

/// Score and optional statistics for a single hole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoleScore {
    pub hole_number: u8,
    pub raw_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fairway_hit: Option<bool>,
    #[serde(rename = "gir_flag", default, skip_serializing_if = "Option::is_none")]
    pub green_in_regulation: Option<bool>,
    /// Only meaningful when `fairway_hit` is `Some(false)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_accuracy: Option<ShotAccuracy>,
    /// Only meaningful when `green_in_regulation` is `Some(false)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach_shot_accuracy: Option<ShotAccuracy>,
}

impl HoleScore {
    /// Score for a hole without statistics
    pub fn new(hole_number: u8, raw_score: u8, par: u8) -> Self {
        Self {
            hole_number,
            raw_score,
            par: Some(par),
            ..Default::default()
        }
    }

    pub fn with_putts(mut self, putts: u8) -> Self {
        self.putts = Some(putts);
        self
    }

    pub fn with_fairway(mut self, hit: bool, miss: Option<ShotAccuracy>) -> Self {
        self.fairway_hit = Some(hit);
        self.drive_accuracy = miss;
        self
    }

    pub fn with_green(mut self, hit: bool, miss: Option<ShotAccuracy>) -> Self {
        self.green_in_regulation = Some(hit);
        self.approach_shot_accuracy = miss;
        self
    }
}

/// Fully resolved payload for `scores/hbh.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub golfer_id: String,
    pub gender: PlayerGender,
    pub course_id: u64,
    pub tee_set_id: u64,
    pub tee_set_side: TeeSetSide,
    /// `YYYY-MM-DD`
    pub played_at: String,
    pub hole_details: Vec<HoleScore>,
    pub number_of_holes: HolesPlayed,
    pub score_type: ScoringType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_confirmation: Option<bool>,
    #[serde(default)]
    pub is_manual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One adjustment applied to a posted score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreAdjustment {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub display: String,
}

/// Aggregate statistics for a round with hole-by-hole data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundStatistics {
    pub gir_percent: f64,
    pub putts_total: u32,
    pub one_putt_or_better_percent: f64,
    pub two_putt_percent: f64,
    pub three_putt_or_worse_percent: f64,
    pub two_putt_or_better_percent: f64,
    pub up_and_downs_total: u32,
    pub pars_percent: f64,
    #[serde(rename = "par3s_average")]
    pub par3_average: f64,
    #[serde(rename = "par4s_average")]
    pub par4_average: f64,
    #[serde(rename = "par5s_average")]
    pub par5_average: f64,
    pub bogeys_percent: f64,
    pub double_bogeys_percent: f64,
    pub triple_bogeys_or_worse_percent: f64,
    pub birdies_or_better_percent: f64,
    pub fairway_hits_percent: f64,
    pub missed_left_percent: f64,
    pub missed_right_percent: f64,
    pub missed_long_percent: f64,
    pub missed_short_percent: f64,
    pub missed_left_approach_shot_accuracy_percent: f64,
    pub missed_right_approach_shot_accuracy_percent: f64,
    pub missed_long_approach_shot_accuracy_percent: f64,
    pub missed_short_approach_shot_accuracy_percent: f64,
    pub missed_general_approach_shot_accuracy_percent: f64,
}

/// A posted score as the service returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    pub id: u64,
    pub order_number: u32,
    pub score_day_order: u32,
    pub gender: Option<Lenient<PlayerGender>>,
    pub status: Option<ScoreStatus>,
    pub is_manual: Option<bool>,
    pub number_of_holes: Option<Lenient<HolesPlayed>>,
    pub number_of_played_holes: Option<u8>,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub golfer_id: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub course_id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub course_name: String,
    pub facility_name: Option<String>,
    pub played_at: String,
    pub adjusted_gross_score: u32,
    pub posted_on_home_course: Option<bool>,
    pub differential: f64,
    pub unadjusted_differential: f64,
    pub score_type: Option<Lenient<ScoringType>>,
    pub front9_course_name: Option<String>,
    pub back9_course_name: Option<String>,
    pub front9_course_rating: Option<String>,
    pub back9_course_rating: Option<String>,
    pub tee_name: Option<String>,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub tee_set_id: String,
    pub tee_set_side: Option<Lenient<TeeSetSide>>,
    pub course_rating: f64,
    pub slope_rating: f64,
    pub penalty: Option<bool>,
    pub penalty_type: Option<String>,
    pub penalty_method: Option<String>,
    pub parent_id: Option<u64>,
    pub score_type_display_full: Option<String>,
    pub score_type_display_short: Option<String>,
    pub edited: bool,
    pub posted_at: Option<DateTime<Utc>>,
    pub season_start_date_at: Option<String>,
    pub season_end_date_at: Option<String>,
    pub course_display_value: Option<String>,
    pub ghin_course_name_display: Option<String>,
    pub used: bool,
    pub revision: bool,
    pub pcc: Option<i32>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub adjustments: Vec<ScoreAdjustment>,
    pub estimated_handicap: Option<f64>,
    pub estimated_handicap_display: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub hole_details: Vec<HoleScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<RoundStatistics>,
    pub exceptional: bool,
    pub is_recent: bool,
    #[serde(rename = "ESR")]
    pub esr: Option<i32>,
    pub net_score_differential: Option<f64>,
}

/// One page of a golfer's score history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GolferScores {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub scores: Vec<Score>,
    pub total_count: u32,
    pub highest_score: Option<u32>,
    pub lowest_score: Option<u32>,
    pub average: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enum_wire_codes() {
        assert_eq!(serde_json::to_value(TeeSetSide::All18).unwrap(), json!("ALL18"));
        assert_eq!(serde_json::to_value(TeeSetSide::Front9).unwrap(), json!("F9"));
        assert_eq!(serde_json::to_value(TeeSetSide::Back9).unwrap(), json!("B9"));
        assert_eq!(serde_json::to_value(ScoringType::Away).unwrap(), json!("A"));
        assert_eq!(serde_json::to_value(ScoringType::Tournament).unwrap(), json!("T"));
        assert_eq!(serde_json::to_value(PlayerGender::Female).unwrap(), json!("F"));
        assert_eq!(serde_json::to_value(HolesPlayed::Nine).unwrap(), json!(9));
        assert_eq!(serde_json::to_value(ShotAccuracy::MissedShort).unwrap(), json!(3));
    }

    #[test]
    fn test_documented_defaults() {
        assert_eq!(TeeSetSide::default(), TeeSetSide::All18);
        assert_eq!(ScoringType::default(), ScoringType::Away);
        assert_eq!(HolesPlayed::default(), HolesPlayed::Eighteen);
    }

    #[test]
    fn test_invalid_hole_count_rejected() {
        let result: Result<HolesPlayed, _> = serde_json::from_value(json!(12));
        assert!(result.unwrap_err().to_string().contains("invalid number of holes"));

        let result: Result<ShotAccuracy, _> = serde_json::from_value(json!(4));
        assert!(result.is_err());
    }

    #[test]
    fn test_score_status_passthrough() {
        let status: ScoreStatus = serde_json::from_value(json!("Validated")).unwrap();
        assert_eq!(status, ScoreStatus::Validated);

        let status: ScoreStatus = serde_json::from_value(json!("Deleted")).unwrap();
        assert_eq!(status, ScoreStatus::Other("Deleted".to_string()));
        assert_eq!(status.as_str(), "Deleted");
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("Deleted"));
    }

    #[test]
    fn test_hole_score_omits_unset_statistics() {
        let hole = HoleScore::new(7, 4, 4);
        assert_eq!(
            serde_json::to_value(&hole).unwrap(),
            json!({"hole_number": 7, "raw_score": 4, "par": 4})
        );

        let hole = HoleScore::new(1, 5, 4)
            .with_putts(2)
            .with_fairway(false, Some(ShotAccuracy::MissedRight))
            .with_green(true, None);
        assert_eq!(
            serde_json::to_value(&hole).unwrap(),
            json!({
                "hole_number": 1,
                "raw_score": 5,
                "par": 4,
                "putts": 2,
                "fairway_hit": false,
                "gir_flag": true,
                "drive_accuracy": 1
            })
        );
    }

    #[test]
    fn test_submission_decodes_as_score() {
        let submission = ScoreSubmission {
            golfer_id: "1234567".to_string(),
            gender: PlayerGender::Male,
            course_id: 5678,
            tee_set_id: 91011,
            tee_set_side: TeeSetSide::Front9,
            played_at: "2024-06-01".to_string(),
            hole_details: vec![HoleScore::new(7, 4, 4)],
            number_of_holes: HolesPlayed::Nine,
            score_type: ScoringType::Home,
            override_confirmation: None,
            is_manual: None,
            source: None,
        };

        let body = serde_json::to_vec(&submission).unwrap();
        let score: Score = serde_json::from_slice(&body).unwrap();

        assert_eq!(score.golfer_id, "1234567");
        assert_eq!(score.gender, Some(Lenient::Known(PlayerGender::Male)));
        assert_eq!(score.course_id, "5678");
        assert_eq!(score.tee_set_id, "91011");
        assert_eq!(score.tee_set_side, Some(Lenient::Known(TeeSetSide::Front9)));
        assert_eq!(score.played_at, "2024-06-01");
        assert_eq!(score.number_of_holes, Some(Lenient::Known(HolesPlayed::Nine)));
        assert_eq!(score.score_type, Some(Lenient::Known(ScoringType::Home)));
        assert_eq!(score.hole_details, vec![HoleScore::new(7, 4, 4)]);
    }

    #[test]
    fn test_score_history_page() {
        let page: GolferScores = serde_json::from_value(json!({
            "scores": [{
                "id": 42,
                "status": "Validated",
                "golfer_id": 1234567,
                "course_id": "5678",
                "course_name": null,
                "played_at": "2024-05-30",
                "adjusted_gross_score": 88,
                "differential": 14.2,
                "score_type": "T",
                "tee_set_side": "ALL18",
                "number_of_holes": 18,
                "posted_at": "2024-05-30T20:00:00Z",
                "adjustments": [{"type": "pcc", "value": 1.0, "display": "+1"}],
                "hole_details": null,
                "ESR": null
            }],
            "total_count": 1,
            "highest_score": 88,
            "lowest_score": 88,
            "average": 88.0
        }))
        .unwrap();

        assert_eq!(page.total_count, 1);
        let score = &page.scores[0];
        assert_eq!(score.id, 42);
        assert_eq!(score.status, Some(ScoreStatus::Validated));
        assert_eq!(score.golfer_id, "1234567");
        assert_eq!(score.course_name, "");
        assert_eq!(score.score_type, Some(Lenient::Known(ScoringType::Tournament)));
        assert_eq!(score.adjustments[0].kind, "pcc");
        assert!(score.hole_details.is_empty());
        assert!(score.posted_at.is_some());
    }

    #[test]
    fn test_score_history_with_unfamiliar_codes() {
        let page: GolferScores = serde_json::from_value(json!({
            "scores": [
                {
                    "id": 1,
                    "score_type": "C",
                    "number_of_holes": null,
                    "gender": "Male",
                    "tee_set_side": "All18",
                    "hole_details": [{"hole_number": 1, "raw_score": 5}]
                },
                {
                    "id": 2,
                    "score_type": "H",
                    "number_of_holes": 12,
                    "gender": "F",
                    "tee_set_side": "B9"
                }
            ],
            "total_count": 2
        }))
        .unwrap();

        let first = &page.scores[0];
        assert_eq!(first.score_type, Some(Lenient::Unknown(json!("C"))));
        assert_eq!(first.number_of_holes, None);
        assert_eq!(first.gender, Some(Lenient::Unknown(json!("Male"))));
        assert_eq!(first.tee_set_side, Some(Lenient::Unknown(json!("All18"))));
        assert_eq!(first.hole_details[0].par, None);

        let second = &page.scores[1];
        assert_eq!(second.score_type.as_ref().and_then(Lenient::known), Some(&ScoringType::Home));
        assert_eq!(second.number_of_holes, Some(Lenient::Unknown(json!(12))));
        assert_eq!(second.gender, Some(Lenient::Known(PlayerGender::Female)));
        assert_eq!(second.tee_set_side, Some(Lenient::Known(TeeSetSide::Back9)));

        let echoed = serde_json::to_value(first).unwrap();
        assert_eq!(echoed["score_type"], "C");
        assert_eq!(echoed["gender"], "Male");
        assert!(echoed["hole_details"][0].get("par").is_none());
    }

    #[test]
    fn test_hole_score_without_par_omits_it() {
        let hole: HoleScore =
            serde_json::from_value(json!({"hole_number": 3, "raw_score": 5, "par": null})).unwrap();
        assert_eq!(hole.par, None);
        assert_eq!(
            serde_json::to_value(&hole).unwrap(),
            json!({"hole_number": 3, "raw_score": 5})
        );
    }
}
