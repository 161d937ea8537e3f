//! Shock index calculator.
//!
//! Shock index = heart rate / systolic blood pressure. A sensitive
//! indicator of hemodynamic compromise, often elevated before traditional
//! vital signs show abnormalities.

use crate::bands::{classify, ThresholdBand};
use crate::types::{ShockIndexResult, ShockSeverity};
use crate::units::require_positive;
use crate::Result;

static SHOCK_BANDS: [ThresholdBand<ShockSeverity>; 4] = [
    ThresholdBand {
        lower: f64::NEG_INFINITY,
        lower_inclusive: true,
        category: ShockSeverity::Normal,
        interpretation: "Normal - No significant shock",
        recommendations: &[
            "Continue routine monitoring",
            "Maintain current treatment plan",
            "Reassess vital signs regularly",
        ],
    },
    ThresholdBand {
        lower: 0.6,
        lower_inclusive: true,
        category: ShockSeverity::Mild,
        interpretation: "Mild shock - Early compensated stage",
        recommendations: &[
            "Increase monitoring frequency",
            "Evaluate for underlying causes",
            "Consider fluid resuscitation",
            "Prepare for potential deterioration",
        ],
    },
    ThresholdBand {
        lower: 0.8,
        lower_inclusive: true,
        category: ShockSeverity::Moderate,
        interpretation: "Moderate shock - Compensated stage",
        recommendations: &[
            "Initiate aggressive fluid resuscitation",
            "Consider blood products if hemorrhagic",
            "Frequent vital sign monitoring",
            "Prepare for advanced interventions",
        ],
    },
    ThresholdBand {
        lower: 1.0,
        lower_inclusive: true,
        category: ShockSeverity::Severe,
        interpretation: "Severe shock - Decompensated stage",
        recommendations: &[
            "Immediate aggressive resuscitation",
            "Consider vasopressors",
            "Blood product administration",
            "Urgent surgical consultation if trauma",
            "Continuous monitoring required",
        ],
    },
];

/// Compute and classify the shock index.
///
/// `heart_rate` is in bpm, `systolic_bp` in mmHg; both must be positive.
pub fn compute_shock_index(heart_rate: f64, systolic_bp: f64) -> Result<ShockIndexResult> {
    let hr = require_positive("heart rate", heart_rate)?;
    let sbp = require_positive("systolic blood pressure", systolic_bp)?;

    let shock_index = hr / sbp;
    let band = classify(&SHOCK_BANDS, shock_index);

    tracing::debug!(shock_index, severity = ?band.category, "computed shock index");

    Ok(ShockIndexResult {
        shock_index,
        severity: band.category,
        interpretation: band.interpretation,
        recommendations: band.recommendations,
    })
}
