//! Prediction scoring.
//!
//! The confidence score is a fixed additive heuristic and is part of the
//! output contract: the thresholds and weights below must not drift.
//!
//! | distance from 50 | points |   | data quality | points |
//! |------------------|--------|---|--------------|--------|
//! | >= 20            | 2      |   | HIGH         | 2      |
//! | >= 10            | 1      |   | MEDIUM       | 1      |
//! | otherwise        | 0      |   | LOW          | 0      |
//!
//! A total of 3+ is HIGH, 2 is MEDIUM, anything else LOW.

use super::combine_percentage;
use crate::models::{Confidence, DataQuality, Pick, Prediction};

const STRONG_LEAN: u32 = 20;
const MILD_LEAN: u32 = 10;

/// Pick implied by a yes/no split.
pub fn pick_for(yes_pct: u32, no_pct: u32) -> Pick {
    if yes_pct == no_pct {
        Pick::TossUp
    } else if yes_pct > no_pct {
        Pick::Yes
    } else {
        Pick::No
    }
}

/// Additive confidence score for a yes percentage at a given data quality.
pub fn confidence_score(yes_pct: u32, quality: DataQuality) -> u8 {
    let distance = yes_pct.abs_diff(50);
    let lean = if distance >= STRONG_LEAN {
        2
    } else if distance >= MILD_LEAN {
        1
    } else {
        0
    };
    lean + quality.confidence_points()
}

/// Confidence label for a yes percentage; unrated without one.
pub fn confidence_for(yes_pct: Option<u32>, quality: DataQuality) -> Confidence {
    match yes_pct {
        Some(yes) => Confidence::from_score(confidence_score(yes, quality)),
        None => Confidence::Unrated,
    }
}

/// Combine two per-team percentages into a match prediction.
pub fn score_prediction(
    home_pct: Option<u32>,
    away_pct: Option<u32>,
    quality: DataQuality,
) -> Prediction {
    let Some(yes) = combine_percentage(home_pct, away_pct) else {
        return Prediction::undetermined();
    };
    let yes = yes.min(100);
    let no = 100 - yes;

    Prediction {
        yes_pct: Some(yes),
        no_pct: Some(no),
        pick: pick_for(yes, no),
        confidence: confidence_for(Some(yes), quality),
    }
}
