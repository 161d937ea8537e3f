//! Body mass index calculator.

use crate::bands::{classify, ThresholdBand};
use crate::types::{BmiCategory, BmiResult, UnitSystem};
use crate::units::{cm_to_m, in_to_m, lb_to_kg, require_positive, round1};
use crate::{Error, Result};

static BMI_BANDS: [ThresholdBand<BmiCategory>; 4] = [
    ThresholdBand {
        lower: f64::NEG_INFINITY,
        lower_inclusive: true,
        category: BmiCategory::Underweight,
        interpretation: "Increased risk of malnutrition, osteoporosis",
        recommendations: &[],
    },
    ThresholdBand {
        lower: 18.5,
        lower_inclusive: true,
        category: BmiCategory::NormalWeight,
        interpretation: "Optimal health range",
        recommendations: &[],
    },
    ThresholdBand {
        lower: 25.0,
        lower_inclusive: true,
        category: BmiCategory::Overweight,
        interpretation: "Increased risk of cardiovascular disease",
        recommendations: &[],
    },
    ThresholdBand {
        lower: 30.0,
        lower_inclusive: true,
        category: BmiCategory::Obese,
        interpretation: "High risk of serious health conditions",
        recommendations: &[],
    },
];

/// Compute and classify body mass index.
///
/// Metric inputs are kilograms and centimeters; imperial inputs are
/// pounds and inches. The reported BMI is rounded to 1 decimal place;
/// classification uses the unrounded value.
pub fn compute_bmi(weight: f64, height: f64, units: UnitSystem) -> Result<BmiResult> {
    let weight = require_positive("weight", weight)?;
    let height = require_positive("height", height)?;

    let (weight_kg, height_m) = match units {
        UnitSystem::Metric => (weight, cm_to_m(height)),
        UnitSystem::Imperial => (lb_to_kg(weight), in_to_m(height)),
    };

    // Division-by-zero guard; a positive height can only fail this if the
    // conversion underflowed
    if height_m <= 0.0 {
        return Err(Error::InvalidInput(
            "height must be greater than zero".to_string(),
        ));
    }

    let bmi = weight_kg / (height_m * height_m);
    let band = classify(&BMI_BANDS, bmi);

    tracing::debug!(bmi, category = ?band.category, "computed BMI");

    Ok(BmiResult {
        bmi: round1(bmi),
        category: band.category,
        weight_kg,
        height_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_example() {
        let result = compute_bmi(70.0, 175.0, UnitSystem::Metric).unwrap();
        assert_eq!(result.height_m, 1.75);
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_imperial_example() {
        // 155 lb, 69 in -> 70.31 kg / (1.7526 m)^2 = 22.9
        let result = compute_bmi(155.0, 69.0, UnitSystem::Imperial).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_band_boundaries() {
        // BMI exactly 18.5 is normal weight
        let normal = compute_bmi(18.5, 100.0, UnitSystem::Metric).unwrap();
        assert_eq!(normal.bmi, 18.5);
        assert_eq!(normal.category, BmiCategory::NormalWeight);

        // BMI exactly 25 is overweight
        let overweight = compute_bmi(25.0, 100.0, UnitSystem::Metric).unwrap();
        assert_eq!(overweight.category, BmiCategory::Overweight);

        // BMI exactly 30 is obese
        let obese = compute_bmi(30.0, 100.0, UnitSystem::Metric).unwrap();
        assert_eq!(obese.category, BmiCategory::Obese);
    }

    #[test]
    fn test_underweight() {
        let result = compute_bmi(45.0, 175.0, UnitSystem::Metric).unwrap();
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_rejects_nonpositive_inputs() {
        assert!(compute_bmi(0.0, 175.0, UnitSystem::Metric).is_err());
        assert!(compute_bmi(70.0, 0.0, UnitSystem::Metric).is_err());
        assert!(compute_bmi(70.0, f64::NAN, UnitSystem::Imperial).is_err());
    }

    #[test]
    fn test_pure_and_idempotent() {
        let a = compute_bmi(82.5, 180.0, UnitSystem::Metric).unwrap();
        let b = compute_bmi(82.5, 180.0, UnitSystem::Metric).unwrap();
        assert_eq!(a, b);
    }
}
