//! Heart Disease Imputation Walkthrough
//!
//! Loads a sample of the UCI Cleveland heart-disease file, where absent
//! values are written as `?`, and prepares it for a model:
//! - Normalize `?` to the missing marker while loading
//! - Median imputation for numeric columns, with and without indicators
//! - Most-frequent imputation for coded (categorical) columns
//! - Standard scaling and conversion to a numeric matrix
//! - Saving and reloading the fitted imputer
//!
//! Run with: cargo run --example heart_disease

use std::error::Error;
use tabular_impute::{
    dataset::{schemas, CsvLoader},
    preprocessing::{
        FittedSimpleImputer, FittedTransformer, ImputeStrategy, SimpleImputer, StandardScaler,
        Transformer,
    },
    table::{ColumnKind, Sentinel, Table},
};
use tracing_subscriber::EnvFilter;

/// Rows of `processed.cleveland.data`, including the records with `?` in
/// `ca` and `thal`.
const CLEVELAND_SAMPLE: &str = "\
63.0,1.0,1.0,145.0,233.0,1.0,2.0,150.0,0.0,2.3,3.0,0.0,6.0,0
67.0,1.0,4.0,160.0,286.0,0.0,2.0,108.0,1.0,1.5,2.0,3.0,3.0,2
67.0,1.0,4.0,120.0,229.0,0.0,2.0,129.0,1.0,2.6,2.0,2.0,7.0,1
37.0,1.0,3.0,130.0,250.0,0.0,0.0,187.0,0.0,3.5,3.0,0.0,3.0,0
41.0,0.0,2.0,130.0,204.0,0.0,2.0,172.0,0.0,1.4,1.0,0.0,3.0,0
53.0,0.0,3.0,128.0,216.0,0.0,2.0,115.0,0.0,0.0,1.0,0.0,?,0
56.0,1.0,2.0,120.0,236.0,0.0,0.0,178.0,0.0,0.8,1.0,0.0,3.0,0
62.0,0.0,4.0,140.0,268.0,0.0,2.0,160.0,0.0,3.6,3.0,2.0,3.0,3
52.0,1.0,3.0,138.0,223.0,0.0,0.0,169.0,0.0,0.0,1.0,?,3.0,0
57.0,0.0,4.0,120.0,354.0,0.0,0.0,163.0,1.0,0.6,1.0,0.0,3.0,0
43.0,1.0,4.0,132.0,247.0,1.0,2.0,143.0,1.0,0.1,2.0,?,7.0,1
58.0,1.0,2.0,125.0,220.0,0.0,0.0,144.0,0.0,0.4,2.0,?,7.0,0
38.0,1.0,3.0,138.0,175.0,0.0,0.0,173.0,0.0,0.0,1.0,?,3.0,0
";

fn column_names(table: &Table, kind: ColumnKind) -> Vec<String> {
    table
        .columns_of_kind(kind)
        .into_iter()
        .map(|c| c.name.clone())
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Heart Disease Imputation ===\n");

    // 1. Load, turning `?` into the missing marker
    println!("Loading Cleveland sample...");
    let table = CsvLoader::new(schemas::heart_disease())
        .sentinel(schemas::HEART_DISEASE_SENTINEL)
        .load_str(CLEVELAND_SAMPLE)?;
    let (n_rows, n_columns) = table.shape();
    println!("  {} patients, {} columns", n_rows, n_columns);

    println!("\nMissing values per column:");
    for (name, count) in table.count_missing(&Sentinel::Missing) {
        if count > 0 {
            println!("  {:<10} {}", name, count);
        }
    }

    // 2. Split numeric and coded columns
    let numeric_names = column_names(&table, ColumnKind::Numeric);
    let coded_names = column_names(&table, ColumnKind::Categorical);
    let numeric = table.select(&numeric_names.iter().map(String::as_str).collect::<Vec<_>>())?;
    let coded = table.select(&coded_names.iter().map(String::as_str).collect::<Vec<_>>())?;

    // 3. Median for numeric columns
    println!("\nFitting median imputer on {} numeric columns...", numeric.n_columns());
    let numeric_imputer = SimpleImputer::new(ImputeStrategy::Median)
        .with_add_indicator(true)
        .fit(&numeric)?;
    for stat in numeric_imputer.statistics() {
        println!("  {:<10} {}", stat.name, stat.fill);
    }

    let numeric_plain = numeric_imputer.transform_with_indicator(&numeric, false)?;
    let numeric_flagged = numeric_imputer.transform(&numeric)?;
    println!(
        "  without indicators: {} columns, with indicators: {} columns",
        numeric_plain.n_columns(),
        numeric_flagged.n_columns()
    );
    println!(
        "  indicator columns added for: {:?}",
        numeric_imputer.indicator_features()
    );

    // 4. Most frequent for coded columns
    println!("\nFitting most-frequent imputer on {} coded columns...", coded.n_columns());
    let coded_imputer = SimpleImputer::new(ImputeStrategy::MostFrequent).fit(&coded)?;
    let coded_filled = coded_imputer.transform(&coded)?;
    if let Some(fill) = coded_imputer.statistic("thal") {
        println!("  thal filled with {}", fill);
    }
    println!(
        "  remaining missing cells: {}",
        coded_filled
            .count_missing(&Sentinel::Missing)
            .iter()
            .map(|(_, count)| count)
            .sum::<usize>()
    );

    // 5. Scale numeric columns and build the model matrix
    println!("\nScaling numeric columns...");
    let scaler = StandardScaler::new().fit(&numeric_plain)?;
    let scaled = scaler.transform(&numeric_plain)?;
    let matrix = scaled.to_array2()?;
    println!("  matrix shape: {:?}", matrix.dim());
    println!("  first row: {:.3}", matrix.row(0));

    // 6. Persist the fitted imputer
    println!("\n=== Saving Imputer ===");
    let path = std::env::temp_dir().join("heart_disease_imputer.bin");
    numeric_imputer.save_to_file(&path)?;
    println!("Imputer saved to: {:?}", path);

    let loaded = FittedSimpleImputer::load_from_file(&path)?;
    let reloaded = loaded.transform(&numeric)?;
    println!(
        "Reloaded imputer gives the same output: {}",
        reloaded == numeric_flagged
    );
    std::fs::remove_file(&path)?;

    println!("\n=== Done ===");
    Ok(())
}
