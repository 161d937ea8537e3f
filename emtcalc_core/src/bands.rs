//! Threshold-band classification shared by the numeric calculators.
//!
//! Each calculator defines a static table of ascending bands covering the
//! whole real line: the bottom band starts at negative infinity and every
//! later band states its lower bound and whether that bound is inclusive.
//! Classification picks the highest band the value falls into.

/// A half-open numeric interval mapped to a category and fixed guidance text.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdBand<C: Copy> {
    /// Lower bound of the band; the band extends up to the next band's bound
    pub lower: f64,
    /// Whether a value exactly at `lower` belongs to this band
    pub lower_inclusive: bool,
    pub category: C,
    pub interpretation: &'static str,
    pub recommendations: &'static [&'static str],
}

impl<C: Copy> ThresholdBand<C> {
    fn contains_from_below(&self, value: f64) -> bool {
        value > self.lower || (self.lower_inclusive && value == self.lower)
    }
}

/// Classify a value against an ascending band table.
///
/// Bands must be ordered ascending by lower bound and the first band must
/// open at `f64::NEG_INFINITY` so that every finite value matches.
pub fn classify<C: Copy + 'static>(
    bands: &'static [ThresholdBand<C>],
    value: f64,
) -> &'static ThresholdBand<C> {
    debug_assert!(!bands.is_empty());
    debug_assert!(bands[0].lower == f64::NEG_INFINITY);

    let mut matched = &bands[0];
    for band in &bands[1..] {
        if band.contains_from_below(value) {
            matched = band;
        } else {
            break;
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_BANDS: [ThresholdBand<&'static str>; 3] = [
        ThresholdBand {
            lower: f64::NEG_INFINITY,
            lower_inclusive: true,
            category: "low",
            interpretation: "below range",
            recommendations: &[],
        },
        ThresholdBand {
            lower: 10.0,
            lower_inclusive: true,
            category: "mid",
            interpretation: "in range",
            recommendations: &[],
        },
        ThresholdBand {
            lower: 20.0,
            lower_inclusive: false,
            category: "high",
            interpretation: "above range",
            recommendations: &[],
        },
    ];

    #[test]
    fn test_value_below_all_bounds() {
        assert_eq!(classify(&TEST_BANDS, -5.0).category, "low");
    }

    #[test]
    fn test_inclusive_lower_bound() {
        assert_eq!(classify(&TEST_BANDS, 10.0).category, "mid");
    }

    #[test]
    fn test_exclusive_lower_bound() {
        // 20.0 itself still belongs to the middle band
        assert_eq!(classify(&TEST_BANDS, 20.0).category, "mid");
        assert_eq!(classify(&TEST_BANDS, 20.0001).category, "high");
    }

    #[test]
    fn test_open_ended_top_band() {
        assert_eq!(classify(&TEST_BANDS, 1e12).category, "high");
    }
}
