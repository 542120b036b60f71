//! Tests for hazard table loading.

use dataset::{DataLoadError, LakeTable};
use test_utils::fixtures;

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn test_load_small_table() {
    let file = fixtures::write_csv(fixtures::SMALL_TABLE);
    let table = LakeTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    assert_eq!(table.source(), file.path());

    let first = &table.records()[0];
    assert_eq!(first.latitude, Some(27.8993));
    assert_eq!(first.longitude, Some(86.9208));
    assert_eq!(first.hazard_probability, 0.82);
    assert_eq!(first.lake_area_ha, Some(114.2));
    assert_eq!(first.elevation_m, Some(5010.0));
    assert_eq!(first.lake_type.as_deref(), Some("moraine-dammed"));
    assert_eq!(first.supraglacial.as_deref(), Some("False"));
    assert_eq!(first.glacier_touch_count, Some(2.0));
    assert_eq!(first.expansion_rate_10y, Some(0.085));
    assert_eq!(first.observed_glof.as_deref(), Some("True"));
}

#[test]
fn test_load_is_idempotent() {
    let file = fixtures::write_csv(fixtures::SMALL_TABLE);

    let first = LakeTable::load(file.path()).unwrap();
    let second = LakeTable::load(file.path()).unwrap();

    assert_eq!(first.records(), second.records());
}

// ============================================================================
// Missing file / missing columns
// ============================================================================

#[test]
fn test_load_missing_file() {
    let err = LakeTable::load("/nonexistent/hazard_probabilities.csv").unwrap_err();
    match err {
        DataLoadError::FileRead(_) => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_load_missing_required_column() {
    let file = fixtures::write_csv("Latitude,Hazard_Prob\n27.9,0.5\n");
    let err = LakeTable::load(file.path()).unwrap_err();
    match err {
        DataLoadError::MissingColumn(name) => assert_eq!(name, "Longitude"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_load_minimal_header_leaves_optionals_none() {
    let file = fixtures::write_csv(fixtures::TABLE_WITH_BAD_POSITIONS);
    let table = LakeTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 5);
    for record in table.records() {
        assert_eq!(record.lake_area_ha, None);
        assert_eq!(record.lake_type, None);
        assert_eq!(record.observed_glof, None);
    }
}

// ============================================================================
// Cell-level behavior
// ============================================================================

#[test]
fn test_load_blank_cells_become_none_or_nan() {
    let file = fixtures::write_csv(fixtures::TABLE_WITH_GAPS);
    let table = LakeTable::load(file.path()).unwrap();

    let first = &table.records()[0];
    assert_eq!(first.hazard_probability, 0.82);
    assert_eq!(first.lake_area_ha, None);
    assert_eq!(first.elevation_m, None);
    assert_eq!(first.supraglacial, None);

    let second = &table.records()[1];
    assert!(second.hazard_probability.is_nan());
    assert_eq!(second.lake_area_ha, Some(42.7));
    assert_eq!(second.lake_type, None);
}

#[test]
fn test_load_non_numeric_position_becomes_none() {
    let file = fixtures::write_csv(fixtures::TABLE_WITH_BAD_POSITIONS);
    let table = LakeTable::load(file.path()).unwrap();

    let records = table.records();
    assert_eq!(records[1].latitude, None);
    assert_eq!(records[1].longitude, Some(86.8752));
    assert_eq!(records[3].longitude, None);
    assert_eq!(records[3].latitude, Some(28.1033));

    let placeable = records.iter().filter(|r| r.position().is_some()).count();
    assert_eq!(placeable, 3);
}

#[test]
fn test_load_keeps_infinite_probabilities() {
    let file = fixtures::write_csv(&format!(
        "{}\n28.0,87.0,inf\n28.1,87.1,-inf\n",
        fixtures::MINIMAL_HEADER
    ));
    let table = LakeTable::load(file.path()).unwrap();

    assert_eq!(table.records()[0].hazard_probability, f64::INFINITY);
    assert_eq!(table.records()[1].hazard_probability, f64::NEG_INFINITY);
}

#[test]
fn test_load_ignores_extra_columns() {
    let file = fixtures::write_csv(fixtures::TABLE_WITH_EXTRA_COLUMNS);
    let table = LakeTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].latitude, Some(27.8993));
    assert_eq!(table.records()[1].hazard_probability, 0.64);
}

#[test]
fn test_load_short_rows_resolve_to_missing_cells() {
    let file = fixtures::write_csv(&format!(
        "{}\n27.8993,86.9208,0.82,114.2\n28.0897,86.8752\n",
        fixtures::FULL_HEADER
    ));
    let table = LakeTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].lake_area_ha, Some(114.2));

    let short = &table.records()[1];
    assert_eq!(short.position(), Some((28.0897, 86.8752)));
    assert!(short.hazard_probability.is_nan());
    assert_eq!(short.lake_area_ha, None);
}
