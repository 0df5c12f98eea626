//! Competition seasons and the chain of prior seasons behind them.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const SEASON_PATTERN: &str = r"^([0-9]{4})-([0-9]{4})$";

fn season_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEASON_PATTERN).ok()).as_ref()
}

/// Split a "YYYY-YYYY" label into its two years.
pub fn parse_season(label: &str) -> Option<(u16, u16)> {
    let caps = season_regex()?.captures(label)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}

/// The season before `label`, with both years moved back by one.
///
/// Anything that is not exactly "YYYY-YYYY" yields `None`, which callers
/// treat as "stop walking" rather than as an error.
pub fn decrement_season(label: &str) -> Option<String> {
    let (start, end) = parse_season(label)?;
    let start = start.checked_sub(1)?;
    let end = end.checked_sub(1)?;
    Some(format!("{:04}-{:04}", start, end))
}

/// `current` followed by up to `depth` prior seasons.
///
/// Stops at the first label that cannot be decremented, so a malformed
/// label yields just `[current]`. Never empty.
pub fn build_season_chain(current: &str, depth: usize) -> Vec<String> {
    let mut out = vec![current.to_string()];
    let mut cur = current.to_string();
    for _ in 0..depth {
        let Some(prev) = decrement_season(&cur) else {
            break;
        };
        out.push(prev.clone());
        cur = prev;
    }
    out
}

/// A season label plus the prior seasons a multi-season query should cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSpan {
    /// The season the fixture belongs to
    pub current: String,

    /// Prior seasons, most recent first
    pub prior: Vec<String>,
}

impl SeasonSpan {
    /// Walk back up to `depth` seasons from `current`.
    pub fn walk(current: &str, depth: usize) -> Self {
        let mut chain = build_season_chain(current, depth);
        let prior = chain.split_off(1);
        Self {
            current: current.to_string(),
            prior,
        }
    }

    /// All labels, current first.
    pub fn labels(&self) -> Vec<&str> {
        std::iter::once(self.current.as_str())
            .chain(self.prior.iter().map(String::as_str))
            .collect()
    }
}
