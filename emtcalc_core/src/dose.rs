//! Weight-based pediatric dose calculation.

use crate::formulary::Formulary;
use crate::types::{DoseResult, WeightUnit};
use crate::units::{lb_to_kg, require_positive, round1, round2};
use crate::{Error, Result};

/// Compute a weight-based dose for a medication in the formulary.
///
/// The weight is converted to kilograms, multiplied by the medication's
/// per-kg dose factor, then clamped to the rule's min dose (if any)
/// followed by its max dose (if any). The dose is rounded to 2 decimal
/// places and the weight to 1.
pub fn compute_pediatric_dose(
    weight: f64,
    weight_unit: WeightUnit,
    medication: &str,
    formulary: &Formulary,
) -> Result<DoseResult> {
    let weight = require_positive("weight", weight)?;

    let rule = formulary
        .find(medication)
        .ok_or_else(|| Error::UnknownMedication(medication.to_string()))?;

    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => lb_to_kg(weight),
    };

    let mut dose = rule.dose_per_kg * weight_kg;
    // Min clamp first, then max; both may fire for a degenerate rule
    if let Some(min) = rule.min_dose {
        if dose < min {
            dose = min;
        }
    }
    if let Some(max) = rule.max_dose {
        if dose > max {
            dose = max;
        }
    }

    tracing::debug!(
        medication = %rule.name,
        dose,
        weight_kg,
        "computed pediatric dose"
    );

    Ok(DoseResult {
        medication: rule.name.clone(),
        dose: round2(dose),
        unit: rule.dose_unit().to_string(),
        weight_kg: round1(weight_kg),
        route: rule.route.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulary::build_default_formulary;

    #[test]
    fn test_unclamped_dose() {
        let formulary = build_default_formulary();
        let result =
            compute_pediatric_dose(10.0, WeightUnit::Kg, "Epinephrine", &formulary).unwrap();
        assert_eq!(result.dose, 0.1);
        assert_eq!(result.unit, "mg");
        assert_eq!(result.weight_kg, 10.0);
        assert_eq!(result.route, "IV/IO");
    }

    #[test]
    fn test_max_clamp() {
        let formulary = build_default_formulary();
        // 200 kg * 0.02 = 4 mg, clamped to the 0.5 mg max
        let result =
            compute_pediatric_dose(200.0, WeightUnit::Kg, "Atropine", &formulary).unwrap();
        assert_eq!(result.dose, 0.5);
    }

    #[test]
    fn test_min_clamp() {
        let formulary = build_default_formulary();
        // 3 kg * 0.02 = 0.06 mg, raised to the 0.1 mg min
        let result = compute_pediatric_dose(3.0, WeightUnit::Kg, "Atropine", &formulary).unwrap();
        assert_eq!(result.dose, 0.1);
    }

    #[test]
    fn test_pound_conversion_and_rounding() {
        let formulary = build_default_formulary();
        // 22 lb = 9.979 kg, reported as 10.0; dose = 5 * 9.979 = 49.9 mg
        let result =
            compute_pediatric_dose(22.0, WeightUnit::Lb, "Amiodarone", &formulary).unwrap();
        assert_eq!(result.weight_kg, 10.0);
        assert_eq!(result.dose, 49.9);
    }

    #[test]
    fn test_unknown_medication() {
        let formulary = build_default_formulary();
        let err =
            compute_pediatric_dose(10.0, WeightUnit::Kg, "Ketamine", &formulary).unwrap_err();
        match err {
            Error::UnknownMedication(name) => assert_eq!(name, "Ketamine"),
            other => panic!("expected UnknownMedication, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_nonpositive_weight() {
        let formulary = build_default_formulary();
        assert!(compute_pediatric_dose(0.0, WeightUnit::Kg, "Adenosine", &formulary).is_err());
        assert!(compute_pediatric_dose(-5.0, WeightUnit::Lb, "Adenosine", &formulary).is_err());
    }

    #[test]
    fn test_pure_and_idempotent() {
        let formulary = build_default_formulary();
        let a = compute_pediatric_dose(18.0, WeightUnit::Kg, "Midazolam", &formulary).unwrap();
        let b = compute_pediatric_dose(18.0, WeightUnit::Kg, "Midazolam", &formulary).unwrap();
        assert_eq!(a, b);
    }
}
