//! Statistics calculation engine.
//!
//! Pure functions over normalized match events:
//! - Form sequences (W/D/L)
//! - Goal averages, clean sheets and home/away splits
//! - Data quality and prediction scoring
//! - Head-to-head and recent-results reconstruction
//!
//! Nothing here fails on thin or malformed data. Empty samples produce
//! `None` averages and undetermined predictions instead of errors.

mod form;
mod goals;
mod h2h;
mod quality;
mod recent;
mod scoring;

pub use form::*;
pub use goals::*;
pub use h2h::*;
pub use quality::*;
pub use recent::*;
pub use scoring::*;

pub(crate) const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Round to one decimal place, halves away from zero.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// `part / whole` as a whole-number percentage. `None` for an empty whole.
pub fn percentage(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some(((part as f64 / whole as f64) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.24), 1.2);
        assert_eq!(round1(0.05), 0.1);
        assert_eq!(round1(2.0), 2.0);
        assert_eq!(round1(-1.25), -1.3);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(3, 5), Some(60));
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(2, 3), Some(67));
        assert_eq!(percentage(1, 2), Some(50));
        assert_eq!(percentage(0, 4), Some(0));
        assert_eq!(percentage(0, 0), None);
    }
}
