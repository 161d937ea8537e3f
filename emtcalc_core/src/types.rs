//! Core domain types for the EMS calculation toolkit.
//!
//! This module defines the fundamental types used throughout the system:
//! - Unit enumerations for calculator inputs
//! - Severity/category labels produced by classification
//! - Per-calculator result value objects
//!
//! Results are transient value objects: created fresh per invocation,
//! never mutated after construction.

use serde::{Deserialize, Serialize};

// ============================================================================
// Input Unit Types
// ============================================================================

/// Unit for an age input
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeUnit {
    Years,
    Months,
}

/// Unit for a weight input
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kg,
    Lb,
}

/// Measurement system for BMI inputs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Weight in kilograms, height in centimeters
    Metric,
    /// Weight in pounds, height in inches
    Imperial,
}

// ============================================================================
// Classification Categories
// ============================================================================

/// Shock index severity band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShockSeverity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl ShockSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ShockSeverity::Normal => "normal",
            ShockSeverity::Mild => "mild",
            ShockSeverity::Moderate => "moderate",
            ShockSeverity::Severe => "severe",
        }
    }
}

/// Mean arterial pressure category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MapCategory {
    Hypotensive,
    Normal,
    Hypertensive,
}

impl MapCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MapCategory::Hypotensive => "hypotensive",
            MapCategory::Normal => "normal",
            MapCategory::Hypertensive => "hypertensive",
        }
    }
}

/// APGAR score category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApgarCategory {
    Normal,
    ModeratelyAbnormal,
    SeverelyAbnormal,
}

impl ApgarCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ApgarCategory::Normal => "Normal",
            ApgarCategory::ModeratelyAbnormal => "Moderately Abnormal",
            ApgarCategory::SeverelyAbnormal => "Severely Abnormal",
        }
    }
}

/// Age band for pediatric weight estimation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Infant,
    Child,
    Adolescent,
    Adult,
}

impl AgeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Infant => "Infant",
            AgeCategory::Child => "Child",
            AgeCategory::Adolescent => "Adolescent",
            AgeCategory::Adult => "Adult",
        }
    }
}

/// BMI weight category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

// ============================================================================
// Result Value Objects
// ============================================================================

/// Result of a shock index calculation
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ShockIndexResult {
    pub shock_index: f64,
    pub severity: ShockSeverity,
    pub interpretation: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Result of a mean arterial pressure calculation
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct MapResult {
    pub map: f64,
    pub category: MapCategory,
    pub interpretation: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Result of an APGAR assessment
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ApgarResult {
    /// Total score, 0-10
    pub total: u8,
    pub category: ApgarCategory,
}

/// Result of a pediatric weight estimation
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct WeightEstimate {
    pub weight_kg: f64,
    /// Which formula produced the estimate
    pub method: &'static str,
    pub age_category: AgeCategory,
    pub recommendations: &'static [&'static str],
}

/// Result of a weight-based pediatric dose calculation
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DoseResult {
    pub medication: String,
    /// Dose rounded to 2 decimal places
    pub dose: f64,
    /// Dose unit, the numerator of the per-kg unit string (e.g. "mg")
    pub unit: String,
    /// Patient weight in kilograms, rounded to 1 decimal place
    pub weight_kg: f64,
    pub route: String,
}

/// Result of a BMI calculation
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to 1 decimal place
    pub bmi: f64,
    pub category: BmiCategory,
    pub weight_kg: f64,
    pub height_m: f64,
}
