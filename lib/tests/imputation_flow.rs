use tabular_impute::dataset::{schemas, CsvLoader, DatasetError};
use tabular_impute::preprocessing::{
    FittedSimpleImputer, FittedTransformer, ImputeStrategy, ImputerConfig, PreprocessingError,
    SimpleImputer, StandardScaler, Transformer,
};
use tabular_impute::table::{Column, Schema, Sentinel, Table, Value};

const HEART: &str = "\
63.0,1.0,1.0,145.0,233.0,1.0,2.0,150.0,0.0,2.3,3.0,0.0,6.0,0
67.0,1.0,4.0,160.0,286.0,0.0,2.0,108.0,1.0,1.5,2.0,3.0,3.0,2
53.0,0.0,3.0,128.0,216.0,0.0,2.0,115.0,0.0,0.0,1.0,0.0,?,0
52.0,1.0,3.0,138.0,223.0,0.0,0.0,169.0,0.0,0.0,1.0,?,3.0,0
43.0,1.0,4.0,132.0,247.0,1.0,2.0,143.0,1.0,0.1,2.0,?,7.0,1
";

const ABALONE: &str = "\
M,0.455,0.365,0.095,0.514,0.2245,0.101,0.15,15
F,0.53,0.42,0.135,0.677,0.2565,0.1415,0.21,9
I,0.33,NaN,0.08,0.205,0.0895,0.0395,0.055,7
,0.425,0.3,0.095,0.3515,0.141,0.0775,0.12,8
";

fn heart() -> Table {
    CsvLoader::new(schemas::heart_disease())
        .sentinel(schemas::HEART_DISEASE_SENTINEL)
        .load_str(HEART)
        .unwrap()
}

fn abalone() -> Table {
    CsvLoader::new(schemas::abalone())
        .load_str(ABALONE)
        .unwrap()
        .normalize_sentinel(&Sentinel::Nan)
}

#[test]
fn test_heart_numeric_mean_fills_only_missing_cells() {
    let table = heart().select(&["age", "ca"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::Mean).fit(&table).unwrap();

    assert_eq!(fitted.statistic("ca"), Some(&Value::Number(1.0)));

    let filled = fitted.transform(&table).unwrap();
    assert_eq!(filled.shape(), (5, 2));
    assert_eq!(filled.value(3, "ca"), Some(&Value::Number(1.0)));
    assert_eq!(filled.value(4, "ca"), Some(&Value::Number(1.0)));
    assert_eq!(filled.value(1, "ca"), Some(&Value::Number(3.0)));
    assert_eq!(filled.column("age").unwrap().collect::<Vec<_>>(), table.column("age").unwrap().collect::<Vec<_>>());
}

#[test]
fn test_heart_categorical_rejects_mean() {
    let table = heart().select(&["thal"]).unwrap();
    let result = SimpleImputer::new(ImputeStrategy::Mean).fit(&table);
    assert!(matches!(
        result,
        Err(PreprocessingError::StrategyKindMismatch { .. })
    ));
}

#[test]
fn test_heart_categorical_most_frequent_with_indicator() {
    let table = heart().select(&["thal", "num"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
        .with_add_indicator(true)
        .fit(&table)
        .unwrap();

    assert_eq!(fitted.statistic("thal"), Some(&Value::text("3.0")));
    assert_eq!(fitted.indicator_features(), &["thal".to_string()]);

    let out = fitted.transform(&table).unwrap();
    assert_eq!(out.n_columns(), 3);
    assert_eq!(out.schema().columns()[2], Column::boolean("thal_missing"));
    let flags: Vec<_> = out.column("thal_missing").unwrap().cloned().collect();
    assert_eq!(
        flags,
        vec![
            Value::Bool(false),
            Value::Bool(false),
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(false),
        ]
    );
    assert_eq!(out.value(2, "thal"), Some(&Value::text("3.0")));
}

#[test]
fn test_abalone_config_flow_then_scale() {
    let table = abalone();
    let measurements = table.select(&["length", "diameter", "rings"]).unwrap();

    let config = ImputerConfig::from_json_str(r#"{"strategy": "median"}"#).unwrap();
    let fitted = config.build().unwrap().fit(&measurements).unwrap();
    let filled = fitted.transform(&measurements).unwrap();

    // median of 0.365, 0.42, 0.3
    assert_eq!(filled.value(2, "diameter"), Some(&Value::Number(0.365)));

    let scaled = StandardScaler::new()
        .fit_transform(&filled)
        .unwrap()
        .to_array2()
        .unwrap();
    assert_eq!(scaled.dim(), (4, 3));
    for col in scaled.columns() {
        assert!(col.sum().abs() < 1e-9);
    }
}

#[test]
fn test_abalone_constant_sex() {
    let table = abalone().select(&["sex"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::Constant(Value::text("U")))
        .fit(&table)
        .unwrap();
    let out = fitted.transform(&table).unwrap();
    assert_eq!(out.value(3, "sex"), Some(&Value::text("U")));
    assert_eq!(out.value(0, "sex"), Some(&Value::text("M")));
}

#[test]
fn test_transform_is_idempotent_and_row_preserving() {
    let table = heart().select(&["chol", "ca", "thal"]).unwrap();
    for add_indicator in [false, true] {
        let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
            .with_add_indicator(add_indicator)
            .fit(&table)
            .unwrap();
        let once = fitted.transform_with_indicator(&table, false).unwrap();
        let twice = fitted.transform_with_indicator(&once, false).unwrap();
        assert_eq!(once, twice);
        assert_eq!(fitted.transform(&table).unwrap().n_rows(), table.n_rows());
    }
}

#[test]
fn test_retransforming_indicator_output_is_schema_mismatch() {
    let table = heart().select(&["ca", "thal"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
        .with_add_indicator(true)
        .fit(&table)
        .unwrap();

    let augmented = fitted.transform(&table).unwrap();
    assert!(augmented.schema().contains("ca_missing"));

    // indicator columns were not seen at fit time
    assert!(matches!(
        fitted.transform(&augmented),
        Err(PreprocessingError::SchemaMismatch(_))
    ));

    // dropping them restores idempotence
    let data_only = augmented.select(&["ca", "thal"]).unwrap();
    assert_eq!(fitted.transform_with_indicator(&data_only, false).unwrap(), data_only);
}

#[test]
fn test_schema_mismatch_at_transform() {
    let table = heart().select(&["age", "ca"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::Median).fit(&table).unwrap();

    let other = heart().select(&["age", "chol"]).unwrap();
    assert!(matches!(
        fitted.transform(&other),
        Err(PreprocessingError::SchemaMismatch(_))
    ));
}

#[test]
fn test_all_missing_column_fails() {
    let schema = Schema::new(vec![Column::numeric("ca")]).unwrap();
    let table = Table::new(schema, vec![vec![Value::Missing], vec![Value::Missing]]).unwrap();
    let result = SimpleImputer::new(ImputeStrategy::Mean).fit(&table);
    assert!(matches!(result, Err(PreprocessingError::EmptyColumn(name)) if name == "ca"));
}

#[test]
fn test_save_and_load_fitted_imputer() {
    let table = heart().select(&["ca", "thal"]).unwrap();
    let fitted = SimpleImputer::new(ImputeStrategy::MostFrequent)
        .with_add_indicator(true)
        .fit(&table)
        .unwrap();

    let path = std::env::temp_dir().join("tabular_impute_flow_imputer.bin");
    fitted.save_to_file(&path).unwrap();
    let loaded = FittedSimpleImputer::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.statistics(), fitted.statistics());
    assert_eq!(loaded.transform(&table).unwrap(), fitted.transform(&table).unwrap());
}

#[test]
fn test_unparsable_heart_field_without_sentinel() {
    let result = CsvLoader::new(schemas::heart_disease()).load_str(HEART);
    assert!(matches!(result, Err(DatasetError::Parse { row: 3, .. })));
}
