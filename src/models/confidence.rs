//! Reliability labels attached to predictions.

use serde::{Deserialize, Serialize};

/// Coarse reliability of a sample, from the smaller of the two team samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataQuality {
    /// Both teams have at least 5 finished matches
    High,
    /// Both teams have at least 3 finished matches
    Medium,
    /// Anything thinner
    Low,
}

impl DataQuality {
    pub const HIGH_MIN_SAMPLE: usize = 5;
    pub const MEDIUM_MIN_SAMPLE: usize = 3;

    /// Classify from the two sample sizes feeding a prediction.
    pub fn from_samples(home_n: usize, away_n: usize) -> Self {
        let min_n = home_n.min(away_n);
        if min_n >= Self::HIGH_MIN_SAMPLE {
            DataQuality::High
        } else if min_n >= Self::MEDIUM_MIN_SAMPLE {
            DataQuality::Medium
        } else {
            DataQuality::Low
        }
    }

    /// Points this quality adds to a prediction's confidence score.
    pub fn confidence_points(&self) -> u8 {
        match self {
            DataQuality::High => 2,
            DataQuality::Medium => 1,
            DataQuality::Low => 0,
        }
    }
}

impl std::fmt::Display for DataQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataQuality::High => write!(f, "HIGH"),
            DataQuality::Medium => write!(f, "MEDIUM"),
            DataQuality::Low => write!(f, "LOW"),
        }
    }
}

/// Heuristic confidence of a prediction.
///
/// Not a statistical interval: it combines how far the pick is from a coin
/// flip with the data quality behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
    /// No sample at all
    #[serde(rename = "—")]
    Unrated,
}

impl Confidence {
    /// Map an additive confidence score to its label.
    pub fn from_score(score: u8) -> Self {
        if score >= 3 {
            Confidence::High
        } else if score >= 2 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "HIGH"),
            Confidence::Medium => write!(f, "MEDIUM"),
            Confidence::Low => write!(f, "LOW"),
            Confidence::Unrated => write!(f, "—"),
        }
    }
}
