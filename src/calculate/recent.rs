use chrono::Utc;

use super::MS_PER_DAY;
use crate::models::MatchEvent;

/// Finished events dated within the last `days`, most recent first.
pub fn filter_within_days(events: &[MatchEvent], days: u32) -> Vec<MatchEvent> {
    filter_within_days_at(events, days, Utc::now().timestamp_millis())
}

/// [`filter_within_days`] against an explicit clock.
///
/// An event needs both scores and a parseable date to qualify; without a
/// date it cannot be placed in the window.
pub fn filter_within_days_at(events: &[MatchEvent], days: u32, now_ms: i64) -> Vec<MatchEvent> {
    let cutoff = now_ms.saturating_sub(i64::from(days).saturating_mul(MS_PER_DAY));

    let mut out: Vec<MatchEvent> = events
        .iter()
        .filter(|e| e.is_finished())
        .filter(|e| e.date_ms.is_some_and(|ms| ms >= cutoff))
        .cloned()
        .collect();

    out.sort_by(|a, b| b.date_ms.cmp(&a.date_ms));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::parse_date_ms;

    fn now() -> i64 {
        parse_date_ms("2025-01-10").unwrap()
    }

    #[test]
    fn test_filter_within_days() {
        let events = vec![
            MatchEvent::new("a", "1", "2").with_score(1, 0).with_date("2025-01-06"),
            MatchEvent::new("b", "3", "4").with_score(2, 2).with_date("2025-01-09"),
            MatchEvent::new("c", "5", "6").with_score(0, 1).with_date("2025-01-01"),
            MatchEvent::new("d", "7", "8").with_date("2025-01-08"),
            MatchEvent::new("e", "9", "1").with_score(3, 0),
            MatchEvent::new("f", "2", "3").with_score(1, 1).with_date("2025-01-05"),
        ];

        let recent = filter_within_days_at(&events, 5, now());
        let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
        // "f" sits exactly on the cutoff
        assert_eq!(ids, vec!["b", "a", "f"]);
    }

    #[test]
    fn test_filter_within_days_empty() {
        assert!(filter_within_days_at(&[], 5, now()).is_empty());
        assert!(filter_within_days(&[], 5).is_empty());
    }
}
