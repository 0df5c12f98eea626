//! Normalization of raw provider records.
//!
//! This is the only place that reads [`RawEvent`]. Everything downstream works
//! on [`MatchEvent`], so the rules for "is this a number", "is this a date"
//! and "is this match finished" live here and nowhere else:
//! - a value is numeric only if it parses to a finite number
//! - a date is valid only if it parses to a timestamp
//! - malformed fields become `None` instead of failing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::models::{EventId, MatchEvent, MatchStatus, ProviderId, RawEvent};

/// Parse a loosely-typed value as a finite number.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace allowed).
/// `null`, empty strings, booleans, arrays, objects, `NaN` and infinities
/// are not numbers.
pub fn parse_finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Parse a date or date-time string to milliseconds since the Unix epoch.
///
/// Plain dates are taken as UTC midnight, naive date-times as UTC.
pub fn parse_date_ms(date: &str) -> Option<i64> {
    let s = date.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Text of a string or number value; empty strings count as absent.
fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Identifier text. Numbers keep their decimal form and are never re-typed.
fn id_of(value: Option<&Value>) -> Option<ProviderId> {
    text_of(value).map(|s| ProviderId::new(s.trim().to_string()))
}

/// Any finite number counts as a score, fractional or negative included.
fn score_of(value: Option<&Value>) -> Option<f64> {
    value.and_then(parse_finite_number)
}

/// The score and timing facts of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreFacts {
    pub finished: bool,
    pub home_score: Option<f64>,
    pub away_score: Option<f64>,
    pub date_ms: Option<i64>,
}

/// Extract scores and timestamp from a raw record.
///
/// `finished` holds only when both scores parse; one known score is not a
/// result.
pub fn score_facts(raw: &RawEvent) -> ScoreFacts {
    let home_score = score_of(raw.int_home_score.as_ref());
    let away_score = score_of(raw.int_away_score.as_ref());
    let date_ms = text_of(raw.date_event.as_ref()).and_then(|d| parse_date_ms(&d));
    ScoreFacts {
        finished: home_score.is_some() && away_score.is_some(),
        home_score,
        away_score,
        date_ms,
    }
}

/// Convert a raw provider record into a [`MatchEvent`].
pub fn normalize_event(raw: &RawEvent) -> MatchEvent {
    let facts = score_facts(raw);
    let name = text_of(raw.str_event.as_ref());
    let date = text_of(raw.date_event.as_ref());

    let id = id_of(raw.id_event.as_ref()).unwrap_or_else(|| {
        EventId::derive(&[
            name.as_deref().unwrap_or_default(),
            date.as_deref().unwrap_or_default(),
        ])
    });

    MatchEvent {
        id,
        name,
        date,
        date_ms: facts.date_ms,
        time: text_of(raw.str_time.as_ref()),
        venue: text_of(raw.str_venue.as_ref()),
        city: text_of(raw.str_city.as_ref()),
        league_id: id_of(raw.id_league.as_ref()),
        league_name: text_of(raw.str_league.as_ref()),
        season: text_of(raw.str_season.as_ref()),
        home_team_id: id_of(raw.id_home_team.as_ref()),
        away_team_id: id_of(raw.id_away_team.as_ref()),
        home_team: text_of(raw.str_home_team.as_ref()),
        away_team: text_of(raw.str_away_team.as_ref()),
        home_score: facts.home_score,
        away_score: facts.away_score,
    }
}

/// Normalize a whole provider array, preserving order.
pub fn normalize_all(raws: &[RawEvent]) -> Vec<MatchEvent> {
    raws.iter().map(normalize_event).collect()
}

/// Classify a raw record as finished, upcoming or unusable.
pub fn classify(raw: &RawEvent) -> MatchStatus {
    normalize_event(raw).status()
}

/// The first `limit` finished events, in the order given.
pub fn take_finished(events: &[MatchEvent], limit: usize) -> Vec<MatchEvent> {
    events
        .iter()
        .filter(|e| e.status() == MatchStatus::Finished)
        .take(limit)
        .cloned()
        .collect()
}

/// The first `limit` events that have not finished yet, in the order given.
pub fn take_upcoming(events: &[MatchEvent], limit: usize) -> Vec<MatchEvent> {
    events
        .iter()
        .filter(|e| e.status() == MatchStatus::Upcoming)
        .take(limit)
        .cloned()
        .collect()
}
