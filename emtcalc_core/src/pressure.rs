//! Mean arterial pressure (MAP) calculator.
//!
//! MAP approximates the average arterial pressure over one cardiac cycle
//! as diastolic pressure plus one third of the pulse pressure.

use crate::bands::{classify, ThresholdBand};
use crate::types::{MapCategory, MapResult};
use crate::units::require_positive;
use crate::{Error, Result};

static MAP_BANDS: [ThresholdBand<MapCategory>; 3] = [
    ThresholdBand {
        lower: f64::NEG_INFINITY,
        lower_inclusive: true,
        category: MapCategory::Hypotensive,
        interpretation: "Hypotensive - Risk of organ hypoperfusion",
        recommendations: &[
            "Immediate intervention required",
            "Assess for shock causes",
            "Consider fluid resuscitation",
            "Monitor urine output",
            "Evaluate for vasopressor need",
        ],
    },
    ThresholdBand {
        lower: 60.0,
        lower_inclusive: true,
        category: MapCategory::Normal,
        interpretation: "Normal - Adequate organ perfusion",
        recommendations: &[
            "Continue current monitoring",
            "Maintain current treatment",
            "Regular vital sign assessment",
            "Monitor for changes",
        ],
    },
    // A MAP of exactly 100 is still normal; the band is open below
    ThresholdBand {
        lower: 100.0,
        lower_inclusive: false,
        category: MapCategory::Hypertensive,
        interpretation: "Hypertensive - Elevated perfusion pressure",
        recommendations: &[
            "Assess for hypertensive emergency",
            "Monitor for end-organ damage",
            "Consider antihypertensive therapy",
            "Neurological assessment",
            "Cardiovascular evaluation",
        ],
    },
];

/// Compute and classify mean arterial pressure.
///
/// Both pressures are in mmHg and must be positive, with systolic at or
/// above diastolic.
pub fn compute_map(systolic_bp: f64, diastolic_bp: f64) -> Result<MapResult> {
    let sbp = require_positive("systolic blood pressure", systolic_bp)?;
    let dbp = require_positive("diastolic blood pressure", diastolic_bp)?;

    if sbp < dbp {
        return Err(Error::InvalidInput(
            "systolic pressure should be higher than diastolic pressure".to_string(),
        ));
    }

    let map = dbp + (sbp - dbp) / 3.0;
    let band = classify(&MAP_BANDS, map);

    tracing::debug!(map, category = ?band.category, "computed MAP");

    Ok(MapResult {
        map,
        category: band.category,
        interpretation: band.interpretation,
        recommendations: band.recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_map() {
        // 120/80 -> 80 + 40/3 = 93.33
        let result = compute_map(120.0, 80.0).unwrap();
        assert!((result.map - 93.333333333).abs() < 1e-6);
        assert_eq!(result.category, MapCategory::Normal);
    }

    #[test]
    fn test_hypotensive_band() {
        let result = compute_map(70.0, 50.0).unwrap();
        assert!(result.map < 60.0);
        assert_eq!(result.category, MapCategory::Hypotensive);
    }

    #[test]
    fn test_normal_band_boundaries_inclusive() {
        // MAP of exactly 60 is normal
        let low = compute_map(60.0, 60.0).unwrap();
        assert_eq!(low.map, 60.0);
        assert_eq!(low.category, MapCategory::Normal);

        // MAP of exactly 100 is still normal
        let high = compute_map(100.0, 100.0).unwrap();
        assert_eq!(high.map, 100.0);
        assert_eq!(high.category, MapCategory::Normal);
    }

    #[test]
    fn test_hypertensive_above_100() {
        let result = compute_map(180.0, 110.0).unwrap();
        assert!(result.map > 100.0);
        assert_eq!(result.category, MapCategory::Hypertensive);
    }

    #[test]
    fn test_systolic_below_diastolic_is_distinct_error() {
        let err = compute_map(90.0, 100.0).unwrap_err();
        match err {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("higher than diastolic"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nonpositive_inputs() {
        assert!(compute_map(0.0, 80.0).is_err());
        assert!(compute_map(120.0, -1.0).is_err());
    }

    #[test]
    fn test_pure_and_idempotent() {
        let a = compute_map(118.0, 76.0).unwrap();
        let b = compute_map(118.0, 76.0).unwrap();
        assert_eq!(a, b);
    }
}
