//! Static pediatric medication formulary.
//!
//! This module provides the built-in weight-based dosing reference table.
//! Dose factors, clamps, routes and indications are descriptive reference
//! data, not computed values.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Cached default formulary - built once and reused across all operations
static DEFAULT_FORMULARY: Lazy<Formulary> = Lazy::new(build_default_formulary);

/// Get a reference to the cached default formulary
pub fn get_default_formulary() -> &'static Formulary {
    &DEFAULT_FORMULARY
}

/// A weight-based dosing rule for one medication
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MedicationDoseRule {
    pub name: String,
    /// Dose factor per kilogram of body weight
    pub dose_per_kg: f64,
    /// Per-kg unit string, e.g. "mg/kg"
    pub unit: String,
    pub route: String,
    pub min_dose: Option<f64>,
    pub max_dose: Option<f64>,
    pub indication: String,
}

impl MedicationDoseRule {
    /// The dose unit shown to the user: the numerator of the per-kg
    /// unit string ("mg" from "mg/kg")
    pub fn dose_unit(&self) -> &str {
        self.unit.split('/').next().unwrap_or(&self.unit)
    }
}

/// The complete medication dosing reference table
#[derive(Clone, Debug)]
pub struct Formulary {
    medications: HashMap<String, MedicationDoseRule>,
}

impl Formulary {
    /// Look up a medication by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<&MedicationDoseRule> {
        self.medications.get(&name.to_ascii_lowercase())
    }

    /// All medications, sorted by name for deterministic listing
    pub fn medications(&self) -> Vec<&MedicationDoseRule> {
        let mut rules: Vec<_> = self.medications.values().collect();
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        rules
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }

    /// Validate the formulary for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (key, rule) in &self.medications {
            if rule.name.is_empty() {
                errors.push("Medication has empty name".to_string());
            }
            if key != &rule.name.to_ascii_lowercase() {
                errors.push(format!(
                    "Formulary key '{}' doesn't match medication name '{}'",
                    key, rule.name
                ));
            }
            if rule.dose_per_kg <= 0.0 {
                errors.push(format!(
                    "Medication '{}' has non-positive dose factor",
                    rule.name
                ));
            }
            if !rule.unit.contains('/') {
                errors.push(format!(
                    "Medication '{}' has unit '{}' without a per-weight denominator",
                    rule.name, rule.unit
                ));
            }
            if let (Some(min), Some(max)) = (rule.min_dose, rule.max_dose) {
                if min > max {
                    errors.push(format!(
                        "Medication '{}': min dose {} > max dose {}",
                        rule.name, min, max
                    ));
                }
            }
            if rule.route.is_empty() {
                errors.push(format!("Medication '{}' has empty route", rule.name));
            }
        }

        errors
    }
}

/// Builds the default formulary with the built-in pediatric medications
pub fn build_default_formulary() -> Formulary {
    let mut medications = HashMap::new();

    let rules = [
        MedicationDoseRule {
            name: "Epinephrine".into(),
            dose_per_kg: 0.01,
            unit: "mg/kg".into(),
            route: "IV/IO".into(),
            min_dose: None,
            max_dose: Some(1.0),
            indication: "Cardiac arrest, anaphylaxis".into(),
        },
        MedicationDoseRule {
            name: "Atropine".into(),
            dose_per_kg: 0.02,
            unit: "mg/kg".into(),
            route: "IV/IO".into(),
            min_dose: Some(0.1),
            max_dose: Some(0.5),
            indication: "Bradycardia".into(),
        },
        MedicationDoseRule {
            name: "Amiodarone".into(),
            dose_per_kg: 5.0,
            unit: "mg/kg".into(),
            route: "IV/IO".into(),
            min_dose: None,
            max_dose: Some(300.0),
            indication: "V-Fib, V-Tach".into(),
        },
        MedicationDoseRule {
            name: "Adenosine".into(),
            dose_per_kg: 0.1,
            unit: "mg/kg".into(),
            route: "IV/IO".into(),
            min_dose: None,
            max_dose: Some(6.0),
            indication: "SVT".into(),
        },
        MedicationDoseRule {
            name: "Midazolam".into(),
            dose_per_kg: 0.2,
            unit: "mg/kg".into(),
            route: "IV/IM".into(),
            min_dose: None,
            max_dose: Some(10.0),
            indication: "Seizures, sedation".into(),
        },
    ];

    for rule in rules {
        medications.insert(rule.name.to_ascii_lowercase(), rule);
    }

    Formulary { medications }
}
