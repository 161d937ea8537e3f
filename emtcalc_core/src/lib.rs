#![forbid(unsafe_code)]

//! Core calculation library for the EMS field calculation toolkit.
//!
//! This crate provides:
//! - Bedside calculators (shock index, MAP, APGAR, pediatric weight,
//!   weight-based dosing, BMI)
//! - Threshold-band classification with fixed clinical guidance text
//! - The static pediatric medication formulary
//! - Configuration and logging setup
//!
//! Every calculator is a pure function: inputs are validated up front,
//! identical inputs produce value-equal results, and nothing is retained
//! between invocations.

pub mod apgar;
pub mod bands;
pub mod bmi;
pub mod config;
pub mod dose;
pub mod error;
pub mod formulary;
pub mod logging;
pub mod pediatric;
pub mod pressure;
pub mod shock;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use apgar::{compute_apgar, APGAR_CRITERIA};
pub use bmi::compute_bmi;
pub use config::Config;
pub use dose::compute_pediatric_dose;
pub use error::{Error, Result};
pub use formulary::{build_default_formulary, get_default_formulary, Formulary, MedicationDoseRule};
pub use pediatric::estimate_pediatric_weight;
pub use pressure::compute_map;
pub use shock::compute_shock_index;
pub use types::*;
