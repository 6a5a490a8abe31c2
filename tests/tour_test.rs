//! Integration tests for the full tour:
//! - Every example's output for the default configuration
//! - Row-maximum properties over random matrices
//! - Config-driven runs and report rendering

use listcomp_tour::types::{Outcome, Value};
use listcomp_tour::{Config, Format, Matrix, Report, Tour, TourError};
use listcomp_tour::snippets::row_max;

fn numbers(outcome: &Outcome, step: usize) -> Vec<i64> {
    match &outcome.steps[step].value {
        Value::Numbers(v) => v.clone(),
        other => panic!("expected numbers, got {:?}", other),
    }
}

fn names(outcome: &Outcome, step: usize) -> Vec<String> {
    match &outcome.steps[step].value {
        Value::Names(v) => v.clone(),
        other => panic!("expected names, got {:?}", other),
    }
}

// =====================================================================
// DEFAULT OUTPUTS
// =====================================================================

#[test]
fn test_default_tour_outputs() {
    let tour = Tour::new(Config::default(), Some(1));

    assert_eq!(numbers(&tour.run(1).unwrap(), 0), vec![6, 7, 15]);
    assert_eq!(numbers(&tour.run(2).unwrap(), 0), vec![12, 14, 30]);
    assert_eq!(names(&tour.run(3).unwrap(), 0), vec!["Adam S", "Abbas", "Adam R"]);
    assert_eq!(names(&tour.run(4).unwrap(), 0), vec!["Adam S", "Brad", "Adam R"]);
    assert_eq!(numbers(&tour.run(6).unwrap(), 0), vec![4, 5, 9]);
    assert_eq!(names(&tour.run(7).unwrap(), 0), vec!["Adam S"]);
    assert_eq!(
        names(&tour.run(8).unwrap(), 0),
        vec!["Adam S", "Candace", "Abbas", "Adam R"]
    );

    let flattened = tour.run(9).unwrap();
    assert_eq!(numbers(&flattened, 0), vec![2, 3, 4, 5, 1, 2, 8, 9, 3]);
    assert_eq!(numbers(&flattened, 1), vec![2, 3, 4, 5, 1, 2, 8, 9, 3]);

    assert_eq!(numbers(&tour.run(10).unwrap(), 0), vec![4, 5, 8, 9]);
}

#[test]
fn test_unknown_example_message() {
    let err = Tour::new(Config::default(), Some(1)).run(42).unwrap_err();
    assert_eq!(err, TourError::UnknownExample(42));
    assert_eq!(err.to_string(), "unknown example 42 (valid ids are 1-10)");
}

// =====================================================================
// MATRIX ROW MAXIMUM
// =====================================================================

#[test]
fn test_row_max_property_across_seeds() {
    for seed in 0..50 {
        let matrix = Matrix::seeded(4, 6, 100, seed).unwrap();
        let maxima = row_max(&matrix).unwrap();

        assert_eq!(maxima.len(), matrix.row_count());
        for (row, max) in matrix.rows().iter().zip(&maxima) {
            assert!(row.contains(max), "seed {}: {} not in {:?}", seed, max, row);
            assert!(row.iter().all(|v| v <= max));
        }
    }
}

#[test]
fn test_matrix_example_uses_seed() {
    let a = Tour::new(Config::default(), Some(77)).run(5).unwrap();
    let b = Tour::new(Config::default(), Some(77)).run(5).unwrap();
    assert_eq!(a, b);

    match &a.steps[0].value {
        Value::Matrix(m) => {
            assert_eq!(m.row_count(), 4);
            assert_eq!(m.col_count(), 6);
        }
        other => panic!("expected matrix, got {:?}", other),
    }
    assert_eq!(numbers(&a, 1).len(), 4);
}

// =====================================================================
// CONFIGURATION AND REPORTS
// =====================================================================

#[test]
fn test_config_file_changes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[thresholds]\nnumbers = 6\nflatten = 8\n\n[predicates]\nprefix = \"b\"\n\n[matrix]\nrows = 2\ncols = 3\nseed = 5\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let tour = Tour::new(config, None);

    assert_eq!(tour.seed(), 5);
    assert_eq!(numbers(&tour.run(1).unwrap(), 0), vec![7, 15]);
    assert_eq!(names(&tour.run(3).unwrap(), 0), vec!["Brad"]);
    assert_eq!(numbers(&tour.run(10).unwrap(), 0), vec![9]);
    assert_eq!(numbers(&tour.run(5).unwrap(), 1).len(), 2);
}

#[test]
fn test_full_report_renders_both_formats() {
    let tour = Tour::new(Config::default(), Some(3));
    let report = Report::new(tour.seed(), tour.run_all().unwrap());

    let text = report.render(Format::Text).unwrap();
    assert!(text.starts_with("Example 1: "));
    assert!(text.contains("Example 10: "));
    assert!(text.contains("[4, 5, 8, 9]"));

    let json: serde_json::Value = serde_json::from_str(&report.render(Format::Json).unwrap()).unwrap();
    assert_eq!(json["seed"], 3);
    assert_eq!(json["examples"].as_array().unwrap().len(), 10);
    assert_eq!(json["examples"][4]["steps"][0]["kind"], "matrix");
}
