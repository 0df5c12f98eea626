//! Raw provider records, exactly as the match-data feed hands them out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A match record straight from the provider feed.
///
/// Every field is optional and loosely typed: ids arrive as strings or
/// numbers, scores as numbers, numeric strings, empty strings or `null`.
/// Nothing downstream reads this type; it is only the input of
/// [`crate::normalize::normalize_event`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "idEvent", default)]
    pub id_event: Option<Value>,

    #[serde(rename = "strEvent", default)]
    pub str_event: Option<Value>,

    #[serde(rename = "dateEvent", default)]
    pub date_event: Option<Value>,

    #[serde(rename = "strTime", default)]
    pub str_time: Option<Value>,

    #[serde(rename = "strVenue", default)]
    pub str_venue: Option<Value>,

    #[serde(rename = "strCity", default)]
    pub str_city: Option<Value>,

    #[serde(rename = "idLeague", default)]
    pub id_league: Option<Value>,

    #[serde(rename = "strLeague", default)]
    pub str_league: Option<Value>,

    #[serde(rename = "strSeason", default)]
    pub str_season: Option<Value>,

    #[serde(rename = "idHomeTeam", default)]
    pub id_home_team: Option<Value>,

    #[serde(rename = "idAwayTeam", default)]
    pub id_away_team: Option<Value>,

    #[serde(rename = "strHomeTeam", default)]
    pub str_home_team: Option<Value>,

    #[serde(rename = "strAwayTeam", default)]
    pub str_away_team: Option<Value>,

    #[serde(rename = "intHomeScore", default)]
    pub int_home_score: Option<Value>,

    #[serde(rename = "intAwayScore", default)]
    pub int_away_score: Option<Value>,
}
