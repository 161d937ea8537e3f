use clap::{Parser, Subcommand};
use emtcalc_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emtcalc")]
#[command(about = "EMS field calculation toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit the result as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shock index (heart rate / systolic BP)
    ShockIndex {
        /// Heart rate (bpm)
        #[arg(long)]
        heart_rate: f64,

        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic_bp: f64,
    },

    /// Mean arterial pressure
    Map {
        /// Systolic blood pressure (mmHg)
        #[arg(long)]
        systolic_bp: f64,

        /// Diastolic blood pressure (mmHg)
        #[arg(long)]
        diastolic_bp: f64,
    },

    /// APGAR newborn assessment score
    Apgar {
        /// Appearance subscore (0-2)
        #[arg(long)]
        appearance: u8,

        /// Pulse subscore (0-2)
        #[arg(long)]
        pulse: u8,

        /// Grimace subscore (0-2)
        #[arg(long)]
        grimace: u8,

        /// Activity subscore (0-2)
        #[arg(long)]
        activity: u8,

        /// Respiratory subscore (0-2)
        #[arg(long)]
        respiratory: u8,
    },

    /// Age-based pediatric weight estimate
    Weight {
        /// Patient age
        #[arg(long)]
        age: f64,

        /// Age unit (years, months)
        #[arg(long)]
        age_unit: Option<String>,
    },

    /// Weight-based pediatric medication dose
    Dose {
        /// Patient weight
        #[arg(long)]
        weight: f64,

        /// Weight unit (kg, lb)
        #[arg(long)]
        weight_unit: Option<String>,

        /// Medication name (see `medications`)
        #[arg(long)]
        medication: String,
    },

    /// List the medication dosing reference table
    Medications,

    /// Body mass index
    Bmi {
        /// Patient weight (kg or lb)
        #[arg(long)]
        weight: f64,

        /// Patient height (cm or in)
        #[arg(long)]
        height: f64,

        /// Unit system (metric, imperial)
        #[arg(long)]
        units: Option<String>,
    },
}

fn main() -> Result<()> {
    emtcalc_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::ShockIndex {
            heart_rate,
            systolic_bp,
        } => {
            let result = compute_shock_index(heart_rate, systolic_bp)?;
            if cli.json {
                print_json(&result)
            } else {
                display_shock_index(&result, &config);
                Ok(())
            }
        }

        Commands::Map {
            systolic_bp,
            diastolic_bp,
        } => {
            let result = compute_map(systolic_bp, diastolic_bp)?;
            if cli.json {
                print_json(&result)
            } else {
                display_map(&result, &config);
                Ok(())
            }
        }

        Commands::Apgar {
            appearance,
            pulse,
            grimace,
            activity,
            respiratory,
        } => {
            let subscores = [appearance, pulse, grimace, activity, respiratory];
            let result = compute_apgar(appearance, pulse, grimace, activity, respiratory)?;
            if cli.json {
                print_json(&result)
            } else {
                display_apgar(&result, &subscores);
                Ok(())
            }
        }

        Commands::Weight { age, age_unit } => {
            let unit = match age_unit {
                Some(ref s) => parse_age_unit(s)?,
                None => config.units.age_unit,
            };
            let result = estimate_pediatric_weight(age, unit)?;
            if cli.json {
                print_json(&result)
            } else {
                display_weight_estimate(&result, &config);
                Ok(())
            }
        }

        Commands::Dose {
            weight,
            weight_unit,
            medication,
        } => {
            let unit = match weight_unit {
                Some(ref s) => parse_weight_unit(s)?,
                None => config.units.weight_unit,
            };
            let formulary = get_default_formulary();
            let errors = formulary.validate();
            if !errors.is_empty() {
                for error in &errors {
                    eprintln!("  - {}", error);
                }
                return Err(Error::FormularyValidation("Invalid formulary".into()));
            }
            let result = compute_pediatric_dose(weight, unit, &medication, formulary)?;
            if cli.json {
                print_json(&result)
            } else {
                display_dose(&result);
                Ok(())
            }
        }

        Commands::Medications => {
            let formulary = get_default_formulary();
            if cli.json {
                print_json(&formulary.medications())
            } else {
                display_formulary(formulary);
                Ok(())
            }
        }

        Commands::Bmi {
            weight,
            height,
            units,
        } => {
            let system = match units {
                Some(ref s) => parse_unit_system(s)?,
                None => config.units.unit_system,
            };
            let result = compute_bmi(weight, height, system)?;
            if cli.json {
                print_json(&result)
            } else {
                display_bmi(&result);
                Ok(())
            }
        }
    }
}

fn parse_age_unit(s: &str) -> Result<AgeUnit> {
    match s.to_lowercase().as_str() {
        "years" | "y" => Ok(AgeUnit::Years),
        "months" | "m" => Ok(AgeUnit::Months),
        _ => Err(Error::InvalidInput(format!(
            "unknown age unit '{}' (expected years or months)",
            s
        ))),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(WeightUnit::Kg),
        "lb" | "lbs" => Ok(WeightUnit::Lb),
        _ => Err(Error::InvalidInput(format!(
            "unknown weight unit '{}' (expected kg or lb)",
            s
        ))),
    }
}

fn parse_unit_system(s: &str) -> Result<UnitSystem> {
    match s.to_lowercase().as_str() {
        "metric" => Ok(UnitSystem::Metric),
        "imperial" => Ok(UnitSystem::Imperial),
        _ => Err(Error::InvalidInput(format!(
            "unknown unit system '{}' (expected metric or imperial)",
            s
        ))),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_header(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn print_recommendations(recommendations: &[&str], config: &Config) {
    if !config.display.show_recommendations || recommendations.is_empty() {
        return;
    }
    println!();
    println!("  Clinical Recommendations:");
    for rec in recommendations {
        println!("  → {}", rec);
    }
}

fn display_shock_index(result: &ShockIndexResult, config: &Config) {
    print_header("SHOCK INDEX");
    println!("  Shock Index: {:.2}", result.shock_index);
    println!("  Severity: {}", result.severity.label().to_uppercase());
    println!("  {}", result.interpretation);
    print_recommendations(result.recommendations, config);
    println!();
}

fn display_map(result: &MapResult, config: &Config) {
    print_header("MEAN ARTERIAL PRESSURE");
    println!("  MAP: {:.1} mmHg", result.map);
    println!("  Category: {}", result.category.label().to_uppercase());
    println!("  {}", result.interpretation);
    print_recommendations(result.recommendations, config);
    println!();
}

fn display_apgar(result: &ApgarResult, subscores: &[u8; 5]) {
    print_header("APGAR SCORE");
    for (criterion, &score) in APGAR_CRITERIA.iter().zip(subscores) {
        println!(
            "  {}: {} ({})",
            criterion.name,
            score,
            criterion.options[score as usize]
        );
    }
    println!();
    println!("  Score: {}/10", result.total);
    println!("  {}", result.category.label());
    println!();
}

fn display_weight_estimate(result: &WeightEstimate, config: &Config) {
    print_header("PEDIATRIC WEIGHT ESTIMATE");
    println!("  Estimated Weight: {:.1} kg", result.weight_kg);
    println!("  Method: {}", result.method);
    println!("  Age Category: {}", result.age_category.label());
    print_recommendations(result.recommendations, config);
    println!();
}

fn display_dose(result: &DoseResult) {
    print_header("PEDIATRIC DOSE");
    println!("  {}: {} {}", result.medication, result.dose, result.unit);
    println!("  For {} kg patient", result.weight_kg);
    println!("  Route: {}", result.route);
    println!();
}

fn display_formulary(formulary: &Formulary) {
    print_header("MEDICATION REFERENCE");
    for rule in formulary.medications() {
        println!("  {}", rule.name);
        println!("    Standard Dose: {} {}", rule.dose_per_kg, rule.unit);
        if let Some(min) = rule.min_dose {
            println!("    Min Dose: {} {}", min, rule.dose_unit());
        }
        if let Some(max) = rule.max_dose {
            println!("    Max Dose: {} {}", max, rule.dose_unit());
        }
        println!("    Route: {}", rule.route);
        println!("    Indication: {}", rule.indication);
        println!();
    }
}

fn display_bmi(result: &BmiResult) {
    print_header("BODY MASS INDEX");
    println!("  BMI: {:.1}", result.bmi);
    println!("  Category: {}", result.category.label());
    println!(
        "  ({:.1} kg at {:.2} m)",
        result.weight_kg, result.height_m
    );
    println!();
}
