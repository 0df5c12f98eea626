//! Goal-based aggregates.
//!
//! Averages and rates are divided by the number of events passed in, not by
//! the number that turned out to be finished. A window with unfinished
//! matches therefore shows a lower average instead of hiding the gap.

use super::{percentage, round1};
use crate::models::{GoalAverages, HomeAwaySplit, MatchEvent, Side, TeamId, VenueAverages};

/// Average goals for and against `team_id` per event in the window.
pub fn average_for_and_against(events: &[MatchEvent], team_id: &TeamId) -> GoalAverages {
    if events.is_empty() {
        return GoalAverages::default();
    }

    let (gf, ga) = events
        .iter()
        .filter_map(|e| e.goals_for_against(team_id))
        .fold((0.0, 0.0), |(gf, ga), (f, a)| (gf + f, ga + a));

    let n = events.len() as f64;
    GoalAverages {
        goals_for: Some(round1(gf / n)),
        goals_against: Some(round1(ga / n)),
        matches: events.len(),
    }
}

/// Average combined goals per event in the window.
pub fn average_total_goals(events: &[MatchEvent]) -> Option<f64> {
    if events.is_empty() {
        return None;
    }
    let sum: f64 = events.iter().filter_map(MatchEvent::total_goals).sum();
    Some(round1(sum / events.len() as f64))
}

/// Share of the window in which `team_id` conceded nothing.
pub fn clean_sheet_percentage(events: &[MatchEvent], team_id: &TeamId) -> Option<u32> {
    let clean = events
        .iter()
        .filter_map(|e| e.goals_for_against(team_id))
        .filter(|&(_, conceded)| conceded == 0.0)
        .count();
    percentage(clean, events.len())
}

/// Share of the window that finished with three or more goals.
pub fn over_25_percentage(events: &[MatchEvent]) -> Option<u32> {
    let over = events
        .iter()
        .filter_map(MatchEvent::total_goals)
        .filter(|&total| total >= 3.0)
        .count();
    percentage(over, events.len())
}

/// Share of the window in which both sides scored.
pub fn btts_percentage(events: &[MatchEvent]) -> Option<u32> {
    let both = events
        .iter()
        .filter_map(MatchEvent::scores)
        .filter(|&(home, away)| home >= 1.0 && away >= 1.0)
        .count();
    percentage(both, events.len())
}

#[derive(Default)]
struct VenueTally {
    goals_for: f64,
    goals_against: f64,
    matches: usize,
}

impl VenueTally {
    fn add(&mut self, scored: f64, conceded: f64) {
        self.goals_for += scored;
        self.goals_against += conceded;
        self.matches += 1;
    }

    fn averages(&self) -> VenueAverages {
        if self.matches == 0 {
            return VenueAverages::default();
        }
        let n = self.matches as f64;
        VenueAverages {
            goals_for: Some(round1(self.goals_for / n)),
            goals_against: Some(round1(self.goals_against / n)),
            matches: self.matches,
        }
    }
}

/// Goal averages for `team_id` split by home and away fixtures.
///
/// Unlike the window averages, each side is divided by its own count of
/// finished matches.
pub fn home_away_split(events: &[MatchEvent], team_id: &TeamId) -> HomeAwaySplit {
    let mut home = VenueTally::default();
    let mut away = VenueTally::default();

    for event in events {
        let (Some(side), Some((scored, conceded))) =
            (event.side_of(team_id), event.goals_for_against(team_id))
        else {
            continue;
        };
        match side {
            Side::Home => home.add(scored, conceded),
            Side::Away => away.add(scored, conceded),
        }
    }

    HomeAwaySplit {
        home: home.averages(),
        away: away.averages(),
    }
}

/// Mean of two optional percentages, rounded to a whole number.
pub fn combine_percentage(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(((a + b) as f64 / 2.0).round() as u32),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Mean of two optional averages, rounded to one decimal.
pub fn combine_average(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(round1((a + b) / 2.0)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
