//! Benchmark CSV files feeding the calculator through `CsvBenchmarkFile`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use firb_calculator::calculator::{
    load_rate_parameters, AustralianState, BenchmarkImportError, BenchmarkMetric,
    BenchmarkSource, BenchmarkSourceError, CalculationSubmission, CalculatorService,
    CsvBenchmarkFile, PropertyType, RateResolver, RateSource,
};

const HEADER: &str = "metric,state,property_type,classification,bedrooms,value,active\n";

fn write_csv(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("benchmarks.csv");
    fs::write(&path, format!("{HEADER}{body}")).expect("write benchmark csv");
    path
}

#[test]
fn inactive_rows_are_loaded_but_not_resolved() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "maintenance_percent,ACT,established,,,0.7,true\n\
maintenance_percent,ACT,established,townhouse,3,0.4,false\n",
    );

    let rows = load_rate_parameters(&path).expect("csv loads");
    let snapshot = CsvBenchmarkFile::new(&path).snapshot().expect("snapshot");
    let resolved = RateResolver::new(&snapshot).resolve_traced(
        BenchmarkMetric::MaintenancePercent,
        AustralianState::Act,
        PropertyType::Established,
        Some("townhouse"),
        Some(3),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(resolved.value, 0.7);
    assert_eq!(resolved.source, RateSource::General);
}

#[test]
fn file_edits_reach_the_next_calculation() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "water_rates_annual,NT,new_dwelling,,,800,yes\n");
    let service = CalculatorService::new(Arc::new(CsvBenchmarkFile::new(&path)));
    let submission = CalculationSubmission {
        citizenship_status: "citizen".to_string(),
        property_type: "newDwelling".to_string(),
        property_value: 550_000.0,
        state: "NT".to_string(),
        deposit_percent: Some(20.0),
        ..CalculationSubmission::default()
    };

    let before = service.calculate(submission.clone()).expect("first run");
    fs::write(
        &path,
        format!("{HEADER}water_rates_annual,NT,new_dwelling,,,1100,yes\n"),
    )
    .expect("rewrite benchmark csv");
    let after = service.calculate(submission).expect("second run");

    assert_eq!(before.costs.ongoing_costs().water_rates(), 800.0);
    assert_eq!(after.costs.ongoing_costs().water_rates(), 1_100.0);
}

#[test]
fn malformed_rows_fail_the_snapshot_with_their_line_number() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "insurance_percent,VIC,established,,,0.2,true\n\
insurance_percent,VIC,established,,two,0.3,true\n",
    );

    let error = CsvBenchmarkFile::new(&path)
        .snapshot()
        .expect_err("bad bedrooms value");

    match error {
        BenchmarkSourceError::Import(BenchmarkImportError::InvalidRow { row, reason }) => {
            assert_eq!(row, 3);
            assert!(reason.contains("two"));
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let error = load_rate_parameters(dir.path().join("absent.csv")).expect_err("no file");

    assert!(matches!(error, BenchmarkImportError::Io(_)));
}
