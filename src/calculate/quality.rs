use crate::models::DataQuality;

/// Reliability of a prediction built from two team samples.
pub fn data_quality(home_n: usize, away_n: usize) -> DataQuality {
    DataQuality::from_samples(home_n, away_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_quality() {
        assert_eq!(data_quality(5, 5), DataQuality::High);
        assert_eq!(data_quality(3, 5), DataQuality::Medium);
        assert_eq!(data_quality(2, 5), DataQuality::Low);
        assert_eq!(data_quality(5, 2), DataQuality::Low);
        assert_eq!(data_quality(10, 3), DataQuality::Medium);
    }
}
