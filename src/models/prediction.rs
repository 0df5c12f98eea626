//! Binary match predictions.

use serde::{Deserialize, Serialize};

use super::Confidence;

/// The side of a yes/no market the numbers lean to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "TOSS-UP")]
    TossUp,
    /// No sample to pick from
    #[serde(rename = "—")]
    Undetermined,
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pick::Yes => write!(f, "YES"),
            Pick::No => write!(f, "NO"),
            Pick::TossUp => write!(f, "TOSS-UP"),
            Pick::Undetermined => write!(f, "—"),
        }
    }
}

/// A scored prediction for one market.
///
/// `yes_pct + no_pct == 100` whenever both are present; both are absent when
/// neither team had a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub yes_pct: Option<u32>,
    pub no_pct: Option<u32>,
    pub pick: Pick,
    pub confidence: Confidence,
}

impl Prediction {
    /// Prediction for a market with no underlying sample.
    pub fn undetermined() -> Self {
        Self {
            yes_pct: None,
            no_pct: None,
            pick: Pick::Undetermined,
            confidence: Confidence::Unrated,
        }
    }
}
