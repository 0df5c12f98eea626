//! Normalized match event model.

use serde::{Deserialize, Serialize};

use super::{EventId, LeagueId, TeamId};
use crate::normalize::parse_date_ms;

/// Lifecycle state of a match as far as the engine can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Both scores are known
    Finished,
    /// At least one score is unset
    Upcoming,
    /// A team identifier is missing, so the match cannot be attributed
    Unusable,
}

/// Which side of a fixture a team played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// One sporting fixture after normalization.
///
/// Scores are either both meaningful or the match is not finished; a single
/// known score never turns into a zero-default result. A score is any finite
/// number the feed sent, so sums never overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    /// Provider id, or a derived one when the provider sent none
    pub id: EventId,

    /// Display name, e.g. "Arsenal vs Chelsea"
    pub name: Option<String>,

    /// Date string as received
    pub date: Option<String>,

    /// Parsed date in milliseconds since the Unix epoch
    pub date_ms: Option<i64>,

    /// Kick-off time as received
    pub time: Option<String>,

    pub venue: Option<String>,

    pub city: Option<String>,

    pub league_id: Option<LeagueId>,

    pub league_name: Option<String>,

    /// Season label, normally "YYYY-YYYY"
    pub season: Option<String>,

    pub home_team_id: Option<TeamId>,

    pub away_team_id: Option<TeamId>,

    pub home_team: Option<String>,

    pub away_team: Option<String>,

    pub home_score: Option<f64>,

    pub away_score: Option<f64>,
}

impl MatchEvent {
    /// Create an unscored, undated event between two teams.
    pub fn new(
        id: impl Into<EventId>,
        home_team_id: impl Into<TeamId>,
        away_team_id: impl Into<TeamId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            date: None,
            date_ms: None,
            time: None,
            venue: None,
            city: None,
            league_id: None,
            league_name: None,
            season: None,
            home_team_id: Some(home_team_id.into()),
            away_team_id: Some(away_team_id.into()),
            home_team: None,
            away_team: None,
            home_score: None,
            away_score: None,
        }
    }

    /// Builder method to set both scores.
    pub fn with_score(mut self, home: impl Into<f64>, away: impl Into<f64>) -> Self {
        self.home_score = Some(home.into());
        self.away_score = Some(away.into());
        self
    }

    /// Builder method to set the date; the timestamp is parsed from it.
    pub fn with_date(mut self, date: &str) -> Self {
        self.date_ms = parse_date_ms(date);
        self.date = Some(date.to_string());
        self
    }

    /// Builder method to set league and season.
    pub fn with_league(mut self, league_id: impl Into<LeagueId>, season: &str) -> Self {
        self.league_id = Some(league_id.into());
        self.season = Some(season.to_string());
        self
    }

    /// Builder method to set team display names.
    pub fn with_team_names(mut self, home: &str, away: &str) -> Self {
        self.home_team = Some(home.to_string());
        self.away_team = Some(away.to_string());
        self
    }

    pub fn status(&self) -> MatchStatus {
        if self.home_team_id.is_none() || self.away_team_id.is_none() {
            MatchStatus::Unusable
        } else if self.is_finished() {
            MatchStatus::Finished
        } else {
            MatchStatus::Upcoming
        }
    }

    /// True iff both scores are known.
    pub fn is_finished(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// Both scores, or `None` unless the match is finished.
    pub fn scores(&self) -> Option<(f64, f64)> {
        Some((self.home_score?, self.away_score?))
    }

    /// Combined goals of a finished match.
    pub fn total_goals(&self) -> Option<f64> {
        self.scores().map(|(h, a)| h + a)
    }

    /// The side `team_id` played on, if it took part at all.
    pub fn side_of(&self, team_id: &TeamId) -> Option<Side> {
        if self.home_team_id.as_ref() == Some(team_id) {
            Some(Side::Home)
        } else if self.away_team_id.as_ref() == Some(team_id) {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Goals scored and conceded by `team_id` in a finished match it played.
    pub fn goals_for_against(&self, team_id: &TeamId) -> Option<(f64, f64)> {
        let (home, away) = self.scores()?;
        match self.side_of(team_id)? {
            Side::Home => Some((home, away)),
            Side::Away => Some((away, home)),
        }
    }

    /// True when the unordered team pair equals `{a, b}`.
    pub fn is_between(&self, a: &TeamId, b: &TeamId) -> bool {
        match (&self.home_team_id, &self.away_team_id) {
            (Some(h), Some(w)) => (h == a && w == b) || (h == b && w == a),
            _ => false,
        }
    }

    /// Name for display, falling back to "Home vs Away".
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!(
                "{} vs {}",
                self.home_team.as_deref().unwrap_or("?"),
                self.away_team.as_deref().unwrap_or("?")
            ),
        }
    }

    /// Score for display; unknown sides render as "-".
    pub fn score_line(&self) -> String {
        let fmt = |s: Option<f64>| s.map_or_else(|| "-".to_string(), |v| v.to_string());
        format!("{}-{}", fmt(self.home_score), fmt(self.away_score))
    }
}
