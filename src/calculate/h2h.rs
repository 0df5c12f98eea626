//! Head-to-head reconstruction from league season lists.

use chrono::Utc;

use super::MS_PER_DAY;
use crate::models::{MatchEvent, TeamId};

/// Meetings between `team_a` and `team_b` within the last `recency_years`,
/// most recent first.
pub fn extract_head_to_head(
    events: &[MatchEvent],
    team_a: &TeamId,
    team_b: &TeamId,
    recency_years: u32,
) -> Vec<MatchEvent> {
    extract_head_to_head_at(
        events,
        team_a,
        team_b,
        recency_years,
        Utc::now().timestamp_millis(),
    )
}

/// [`extract_head_to_head`] against an explicit clock.
///
/// Either team may have been at home. Only events whose date is known to be
/// older than the cutoff are dropped: an undated meeting is kept and sorts
/// as the oldest. Unfinished meetings are kept as well.
pub fn extract_head_to_head_at(
    events: &[MatchEvent],
    team_a: &TeamId,
    team_b: &TeamId,
    recency_years: u32,
    now_ms: i64,
) -> Vec<MatchEvent> {
    let window_ms = i64::from(recency_years).saturating_mul(365 * MS_PER_DAY);
    let cutoff = now_ms.saturating_sub(window_ms);

    let mut matches: Vec<MatchEvent> = events
        .iter()
        .filter(|e| e.is_between(team_a, team_b))
        .filter(|e| {
            // TODO: undated meetings survive any cutoff; revisit together with
            // the recent-results filter, which drops them.
            let ms = e.date_ms.unwrap_or(0);
            !(ms != 0 && ms < cutoff)
        })
        .cloned()
        .collect();

    matches.sort_by(|x, y| y.date_ms.unwrap_or(0).cmp(&x.date_ms.unwrap_or(0)));
    matches
}
