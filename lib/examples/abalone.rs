//! Abalone Imputation Walkthrough
//!
//! The UCI abalone file is complete, so this sample has a few measurements
//! knocked out as `NaN` and one blank sex field. The walkthrough:
//! - Loads the sample and normalizes `NaN` to the missing marker
//! - Builds imputers from JSON configuration
//! - Fills measurements with the mean and sex with a constant label
//! - Scales the measurements to [0, 1] and converts them to a matrix
//!
//! Run with: cargo run --example abalone

use std::error::Error;
use tabular_impute::{
    dataset::{schemas, CsvLoader},
    preprocessing::{FittedTransformer, ImputerConfig, MinMaxScaler, Transformer},
    table::Sentinel,
};
use tracing_subscriber::EnvFilter;

const ABALONE_SAMPLE: &str = "\
M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15
M,0.35,0.265,0.09,0.2255,0.0995,0.0485,0.07,7
F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9
M,0.44,0.365,0.125,NaN,0.2155,0.114,0.155,10
I,0.33,0.255,0.08,0.205,0.0895,0.0395,0.055,7
I,0.425,0.3,0.095,0.3515,0.141,0.0775,0.12,8
F,0.53,NaN,0.15,0.7775,0.237,0.1415,0.33,20
,0.545,0.425,0.125,0.768,0.294,0.1495,0.26,16
M,0.475,0.37,0.125,0.5095,0.2165,0.1125,NaN,9
F,0.55,0.44,0.15,0.8945,0.3145,0.151,0.32,19
";

const MEASUREMENT_CONFIG: &str = r#"{
    "strategy": "mean",
    "missing_values": "NaN",
    "add_indicator": true
}"#;

const SEX_CONFIG: &str = r#"{
    "strategy": "constant",
    "fill_value": "U"
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Abalone Imputation ===\n");

    // 1. Load; NaN stays a number until normalized
    let raw = CsvLoader::new(schemas::abalone()).load_str(ABALONE_SAMPLE)?;
    println!("Loaded {} shells, {} columns", raw.n_rows(), raw.n_columns());

    let nan_counts = raw.count_missing(&Sentinel::Nan);
    let table = raw.normalize_sentinel(&Sentinel::Nan);
    println!("\nMissing values per column (NaN or blank):");
    for (name, count) in nan_counts.iter().filter(|(_, count)| *count > 0) {
        println!("  {:<15} {}", name, count);
    }

    // 2. Imputers from configuration
    let measurements = table.select(&[
        "length",
        "diameter",
        "height",
        "whole_weight",
        "shucked_weight",
        "viscera_weight",
        "shell_weight",
    ])?;
    let sex = table.select(&["sex"])?;

    let measurement_imputer = ImputerConfig::from_json_str(MEASUREMENT_CONFIG)?
        .build()?
        .fit(&measurements)?;
    let sex_imputer = ImputerConfig::from_json_str(SEX_CONFIG)?
        .build()?
        .fit(&sex)?;

    println!("\nMean fill values:");
    for stat in measurement_imputer.statistics() {
        println!("  {:<15} {:.4}", stat.name, stat.fill.as_f64().unwrap_or(f64::NAN));
    }

    // 3. Transform with and without indicators
    let filled = measurement_imputer.transform_with_indicator(&measurements, false)?;
    let flagged = measurement_imputer.transform(&measurements)?;
    let names: Vec<&str> = flagged.schema().names().collect();
    println!("\nColumns with indicators: {:?}", names);

    let sex_filled = sex_imputer.transform(&sex)?;
    println!("Row 7 sex after imputation: {}", sex_filled.rows()[7][0]);

    // 4. Scale and convert
    let scaler = MinMaxScaler::new().fit(&filled)?;
    let matrix = scaler.transform(&filled)?.to_array2()?;
    println!("\nScaled matrix shape: {:?}", matrix.dim());
    println!("Column minimums: {:?}", scaler.min());
    println!("Last row: {:.3}", matrix.row(matrix.nrows() - 1));

    println!("\n=== Done ===");
    Ok(())
}
