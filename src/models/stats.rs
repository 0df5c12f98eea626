//! Derived per-team statistics models.

use serde::{Deserialize, Serialize};

use super::{MatchEvent, TeamId};

/// Outcome of one finished match from a team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    /// Result from the team's own score and the opponent's.
    pub fn from_goals(scored: f64, conceded: f64) -> Self {
        if scored > conceded {
            FormResult::Win
        } else if scored < conceded {
            FormResult::Loss
        } else {
            FormResult::Draw
        }
    }
}

impl std::fmt::Display for FormResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormResult::Win => write!(f, "W"),
            FormResult::Draw => write!(f, "D"),
            FormResult::Loss => write!(f, "L"),
        }
    }
}

/// Render a form sequence as a compact string, e.g. "WWDLW".
pub fn form_string(form: &[FormResult]) -> String {
    form.iter().map(|r| r.to_string()).collect()
}

/// Goals for and against per match over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalAverages {
    /// Average goals scored, one decimal
    pub goals_for: Option<f64>,

    /// Average goals conceded, one decimal
    pub goals_against: Option<f64>,

    /// Window size the averages were divided by
    pub matches: usize,
}

/// Averages for one venue side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueAverages {
    pub goals_for: Option<f64>,
    pub goals_against: Option<f64>,
    pub matches: usize,
}

/// Goal averages split by where the team played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAwaySplit {
    pub home: VenueAverages,
    pub away: VenueAverages,
}

/// Everything derived for one side of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_id: Option<TeamId>,

    pub name: Option<String>,

    /// W/D/L over the form window, in caller order
    pub form: Vec<FormResult>,

    pub goals: GoalAverages,

    /// Average combined goals in this team's matches
    pub average_total_goals: Option<f64>,

    pub clean_sheet_pct: Option<u32>,

    pub split: HomeAwaySplit,

    /// Share of matches with three or more goals
    pub over_25_pct: Option<u32>,

    /// Share of matches where both sides scored
    pub btts_pct: Option<u32>,

    /// The form window itself
    pub last_matches: Vec<MatchEvent>,
}

impl TeamSummary {
    pub fn sample_size(&self) -> usize {
        self.last_matches.len()
    }
}
