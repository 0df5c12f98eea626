use crate::models::{FormResult, MatchEvent, TeamId};

/// W/D/L for `team_id` across `events`, in the order given.
///
/// Events the team did not play in, and events that are not finished, are
/// skipped.
pub fn form_sequence(events: &[MatchEvent], team_id: &TeamId) -> Vec<FormResult> {
    events
        .iter()
        .filter_map(|e| e.goals_for_against(team_id))
        .map(|(scored, conceded)| FormResult::from_goals(scored, conceded))
        .collect()
}
