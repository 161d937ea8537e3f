//! APGAR newborn assessment scoring.
//!
//! Five subscores (Appearance, Pulse, Grimace, Activity, Respiratory),
//! each 0-2, summed to a 0-10 total. Classification uses the bedside
//! thresholds: 8+ Normal, 4-7 Moderately Abnormal, below 4 Severely
//! Abnormal.

use crate::types::{ApgarCategory, ApgarResult};
use crate::{Error, Result};

/// Scoring rubric entry for one APGAR criterion
#[derive(Clone, Copy, Debug)]
pub struct ApgarCriterion {
    pub name: &'static str,
    /// Option labels for scores 0, 1 and 2 in order
    pub options: [&'static str; 3],
}

/// The five-criterion scoring rubric, in the conventional order
pub static APGAR_CRITERIA: [ApgarCriterion; 5] = [
    ApgarCriterion {
        name: "Appearance",
        options: ["Blue/Pale", "Extremities Blue", "Pink"],
    },
    ApgarCriterion {
        name: "Pulse",
        options: ["Absent", "<100 bpm", ">100 bpm"],
    },
    ApgarCriterion {
        name: "Grimace",
        options: ["No Response", "Grimace", "Cry/Cough"],
    },
    ApgarCriterion {
        name: "Activity",
        options: ["Limp", "Some Flexion", "Active Motion"],
    },
    ApgarCriterion {
        name: "Respiratory",
        options: ["Absent", "Weak Cry", "Strong Cry"],
    },
];

fn require_subscore(name: &str, value: u8) -> Result<u8> {
    if value > 2 {
        return Err(Error::InvalidInput(format!(
            "{} score must be 0, 1 or 2",
            name
        )));
    }
    Ok(value)
}

/// Compute and classify an APGAR score from its five subscores.
pub fn compute_apgar(
    appearance: u8,
    pulse: u8,
    grimace: u8,
    activity: u8,
    respiratory: u8,
) -> Result<ApgarResult> {
    let total = require_subscore("appearance", appearance)?
        + require_subscore("pulse", pulse)?
        + require_subscore("grimace", grimace)?
        + require_subscore("activity", activity)?
        + require_subscore("respiratory", respiratory)?;

    let category = if total >= 8 {
        ApgarCategory::Normal
    } else if total >= 4 {
        ApgarCategory::ModeratelyAbnormal
    } else {
        ApgarCategory::SeverelyAbnormal
    };

    tracing::debug!(total, category = ?category, "computed APGAR score");

    Ok(ApgarResult { total, category })
}
