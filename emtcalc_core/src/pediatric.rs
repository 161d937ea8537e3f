//! Age-based pediatric weight estimation.
//!
//! Dispatches by age band:
//! - under 1 year: month-based infant formulas
//! - 1-10 years: APLS formula (age x 2 + 8)
//! - over 10 to 14 years: modified formula (age x 3 + 7)
//! - over 14 years: adult average of 70 kg

use crate::types::{AgeCategory, AgeUnit, WeightEstimate};
use crate::units::require_positive;
use crate::Result;

static INFANT_RECOMMENDATIONS: &[&str] = &[
    "Verify with parent/caregiver if possible",
    "Use length-based tape if available",
    "Consider gestational age for premature infants",
    "Monitor for dehydration signs",
];

static CHILD_RECOMMENDATIONS: &[&str] = &[
    "Verify with parent/caregiver if possible",
    "Use Broselow tape if available",
    "Consider nutritional status",
    "Adjust for obesity/malnutrition if obvious",
];

static ADOLESCENT_RECOMMENDATIONS: &[&str] = &[
    "Consider growth spurt variations",
    "Verify with patient if conscious",
    "Use visual estimation as backup",
    "Consider body habitus",
];

static ADULT_RECOMMENDATIONS: &[&str] = &[
    "Use visual estimation for body habitus",
    "Consider patient history if available",
    "Adjust for obvious obesity/underweight",
    "Use standard adult dosing",
];

/// Estimate patient weight in kilograms from age.
///
/// Band boundaries are exact: an age of exactly 1 year routes to the
/// APLS child formula, exactly 10 years stays on APLS, exactly 14 years
/// stays on the adolescent formula.
pub fn estimate_pediatric_weight(age: f64, age_unit: AgeUnit) -> Result<WeightEstimate> {
    let age = require_positive("age", age)?;

    let age_in_years = match age_unit {
        AgeUnit::Years => age,
        AgeUnit::Months => age / 12.0,
    };

    let estimate = if age_in_years < 1.0 {
        let age_in_months = match age_unit {
            AgeUnit::Months => age,
            AgeUnit::Years => age * 12.0,
        };
        // Birth weight 3.5 kg plus 0.7 kg/month for the first six months,
        // then 0.5 kg/month
        if age_in_months <= 6.0 {
            WeightEstimate {
                weight_kg: 3.5 + 0.7 * age_in_months,
                method: "Infant formula (0-6 months)",
                age_category: AgeCategory::Infant,
                recommendations: INFANT_RECOMMENDATIONS,
            }
        } else {
            WeightEstimate {
                weight_kg: 3.5 + 0.7 * 6.0 + 0.5 * (age_in_months - 6.0),
                method: "Infant formula (6-12 months)",
                age_category: AgeCategory::Infant,
                recommendations: INFANT_RECOMMENDATIONS,
            }
        }
    } else if age_in_years <= 10.0 {
        WeightEstimate {
            weight_kg: 2.0 * age_in_years + 8.0,
            method: "APLS formula (Age x 2 + 8)",
            age_category: AgeCategory::Child,
            recommendations: CHILD_RECOMMENDATIONS,
        }
    } else if age_in_years <= 14.0 {
        WeightEstimate {
            weight_kg: 3.0 * age_in_years + 7.0,
            method: "Modified formula (Age x 3 + 7)",
            age_category: AgeCategory::Adolescent,
            recommendations: ADOLESCENT_RECOMMENDATIONS,
        }
    } else {
        WeightEstimate {
            weight_kg: 70.0,
            method: "Adult average (70 kg)",
            age_category: AgeCategory::Adult,
            recommendations: ADULT_RECOMMENDATIONS,
        }
    };

    tracing::debug!(
        weight_kg = estimate.weight_kg,
        category = ?estimate.age_category,
        "estimated pediatric weight"
    );

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apls_formula_for_child() {
        let result = estimate_pediatric_weight(5.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 18.0);
        assert_eq!(result.age_category, AgeCategory::Child);
    }

    #[test]
    fn test_young_infant_formula() {
        let result = estimate_pediatric_weight(6.0, AgeUnit::Months).unwrap();
        assert!((result.weight_kg - 7.7).abs() < 1e-9);
        assert_eq!(result.age_category, AgeCategory::Infant);
        assert_eq!(result.method, "Infant formula (0-6 months)");
    }

    #[test]
    fn test_older_infant_formula() {
        // 9 months: 3.5 + 4.2 + 0.5 * 3 = 9.2
        let result = estimate_pediatric_weight(9.0, AgeUnit::Months).unwrap();
        assert!((result.weight_kg - 9.2).abs() < 1e-9);
        assert_eq!(result.method, "Infant formula (6-12 months)");
    }

    #[test]
    fn test_fractional_years_use_infant_formula() {
        // Half a year is 6 months, still the young-infant branch
        let result = estimate_pediatric_weight(0.5, AgeUnit::Years).unwrap();
        assert!((result.weight_kg - 7.7).abs() < 1e-9);
        assert_eq!(result.age_category, AgeCategory::Infant);
    }

    #[test]
    fn test_exactly_one_year_routes_to_child_formula() {
        let result = estimate_pediatric_weight(1.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 10.0);
        assert_eq!(result.age_category, AgeCategory::Child);
    }

    #[test]
    fn test_exactly_ten_years_stays_on_apls() {
        let result = estimate_pediatric_weight(10.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 28.0);
        assert_eq!(result.age_category, AgeCategory::Child);
    }

    #[test]
    fn test_adolescent_formula() {
        let result = estimate_pediatric_weight(12.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 43.0);
        assert_eq!(result.age_category, AgeCategory::Adolescent);
    }

    #[test]
    fn test_exactly_fourteen_stays_adolescent() {
        let result = estimate_pediatric_weight(14.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 49.0);
        assert_eq!(result.age_category, AgeCategory::Adolescent);
    }

    #[test]
    fn test_adult_average_above_fourteen() {
        let result = estimate_pediatric_weight(15.0, AgeUnit::Years).unwrap();
        assert_eq!(result.weight_kg, 70.0);
        assert_eq!(result.age_category, AgeCategory::Adult);
    }

    #[test]
    fn test_rejects_nonpositive_age() {
        assert!(estimate_pediatric_weight(0.0, AgeUnit::Years).is_err());
        assert!(estimate_pediatric_weight(-2.0, AgeUnit::Months).is_err());
        assert!(estimate_pediatric_weight(f64::NAN, AgeUnit::Years).is_err());
    }

    #[test]
    fn test_pure_and_idempotent() {
        let a = estimate_pediatric_weight(7.0, AgeUnit::Years).unwrap();
        let b = estimate_pediatric_weight(7.0, AgeUnit::Years).unwrap();
        assert_eq!(a, b);
    }
}
