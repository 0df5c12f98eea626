//! Assembled analysis outputs handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DataQuality, EventId, FormResult, MatchEvent, Prediction, TeamId, TeamSummary};

/// Finished-match counts behind a prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizes {
    pub home: usize,
    pub away: usize,
}

impl SampleSizes {
    pub fn total(&self) -> usize {
        self.home + self.away
    }
}

/// Both market predictions for a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketPredictions {
    pub over_25: Prediction,
    pub btts: Prediction,
}

/// Full analysis of one upcoming fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub event_id: EventId,

    pub title: String,

    pub date: Option<String>,

    pub time: Option<String>,

    pub venue: Option<String>,

    pub league_name: Option<String>,

    pub season: Option<String>,

    /// When this report was computed
    pub computed_at: DateTime<Utc>,

    pub data_quality: DataQuality,

    pub samples: SampleSizes,

    pub predictions: MarketPredictions,

    /// Mean of both teams' average total goals
    pub match_average_total_goals: Option<f64>,

    pub home: TeamSummary,

    pub away: TeamSummary,

    /// Seasons the head-to-head series was drawn from
    pub seasons_covered: Vec<String>,

    /// Finished league meetings, most recent first
    pub head_to_head: Vec<MatchEvent>,

    /// Finished league results inside the recent window, most recent first
    pub recent_results: Vec<MatchEvent>,
}

/// A team's recent finished matches and next fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOverview {
    pub team_id: TeamId,

    pub finished: Vec<MatchEvent>,

    pub upcoming: Vec<MatchEvent>,

    pub form: Vec<FormResult>,
}
