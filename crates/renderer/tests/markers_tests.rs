//! Integration tests for marker encoding

use glof_common::ColorScale;
use renderer::{encode_batch, encode_marker, EncodeError, PopupFields, SizeScale};
use test_utils::{full_record, lake_record, records_with_probabilities, unplaced_record};

fn hazard() -> ColorScale {
    ColorScale::hazard()
}

// ============================================================
// Single-record encoding
// ============================================================

#[test]
fn test_encode_marker_carries_position() {
    let record = lake_record(27.9, 86.9, 0.4);
    let marker =
        encode_marker(&record, &hazard(), &SizeScale::default(), PopupFields::Full).unwrap();
    assert_eq!(marker.latitude, 27.9);
    assert_eq!(marker.longitude, 86.9);
}

#[test]
fn test_encode_marker_colors_follow_probability() {
    let size = SizeScale::default();
    let cases = [(0.0, "#008000"), (0.5, "#ffa500"), (1.0, "#8b0000")];
    for (probability, expected) in cases {
        let record = lake_record(28.0, 87.0, probability);
        let marker = encode_marker(&record, &hazard(), &size, PopupFields::Full).unwrap();
        assert_eq!(marker.fill_color, expected, "probability {}", probability);
    }
}

#[test]
fn test_encode_marker_out_of_range_probability_clamps() {
    let size = SizeScale::default();
    let low = encode_marker(&lake_record(28.0, 87.0, -2.5), &hazard(), &size, PopupFields::Full)
        .unwrap();
    let high = encode_marker(&lake_record(28.0, 87.0, 7.0), &hazard(), &size, PopupFields::Full)
        .unwrap();
    assert_eq!(low.fill_color, "#008000");
    assert_eq!(high.fill_color, "#8b0000");
}

#[test]
fn test_encode_marker_infinite_probability_clamps_to_nearer_end() {
    let size = SizeScale::default();
    let high = encode_marker(
        &lake_record(28.0, 87.0, f64::INFINITY),
        &hazard(),
        &size,
        PopupFields::Full,
    )
    .unwrap();
    let low = encode_marker(
        &lake_record(28.0, 87.0, f64::NEG_INFINITY),
        &hazard(),
        &size,
        PopupFields::Full,
    )
    .unwrap();
    assert_eq!(high.fill_color, "#8b0000");
    assert_eq!(low.fill_color, "#008000");
}

#[test]
fn test_encode_marker_radius_tracks_area() {
    let size = SizeScale::default();
    let mut record = full_record();

    record.lake_area_ha = Some(90.0);
    let small = encode_marker(&record, &hazard(), &size, PopupFields::Full).unwrap();
    record.lake_area_ha = Some(240.0);
    let large = encode_marker(&record, &hazard(), &size, PopupFields::Full).unwrap();

    assert_eq!(small.radius, 3.0);
    assert_eq!(large.radius, 8.0);
    assert!(small.radius < large.radius);
}

#[test]
fn test_encode_marker_missing_area_gets_minimum_radius() {
    let record = lake_record(28.0, 87.0, 0.3);
    let marker =
        encode_marker(&record, &hazard(), &SizeScale::default(), PopupFields::Full).unwrap();
    assert_eq!(marker.radius, 2.0);
}

#[test]
fn test_encode_marker_rejects_missing_position() {
    let record = unplaced_record(0.9);
    let err = encode_marker(&record, &hazard(), &SizeScale::default(), PopupFields::Full)
        .unwrap_err();
    assert_eq!(err, EncodeError::MissingPosition);
}

#[test]
fn test_encode_marker_is_deterministic() {
    let record = full_record();
    let size = SizeScale::default();
    let a = encode_marker(&record, &hazard(), &size, PopupFields::Full).unwrap();
    let b = encode_marker(&record, &hazard(), &size, PopupFields::Full).unwrap();
    assert_eq!(a.fill_color, b.fill_color);
    assert_eq!(a.radius, b.radius);
    assert_eq!(a.popup_html, b.popup_html);
}

#[test]
fn test_encode_marker_popup_carries_probability_tint() {
    let record = lake_record(28.0, 87.0, 1.0);
    let marker =
        encode_marker(&record, &hazard(), &SizeScale::default(), PopupFields::Full).unwrap();
    assert!(marker.popup_html.contains("<font color='#8b0000'>"));
}

// ============================================================
// Batch encoding
// ============================================================

#[test]
fn test_encode_batch_keeps_all_placeable_records() {
    let records = records_with_probabilities(&[0.1, 0.2, 0.3, 0.4]);
    let summary = encode_batch(&records, &hazard(), &SizeScale::default(), PopupFields::Full);
    assert_eq!(summary.markers.len(), 4);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn test_encode_batch_counts_skipped_records() {
    let mut records = records_with_probabilities(&[0.1, 0.2, 0.3]);
    records.insert(1, unplaced_record(0.5));
    records.push(unplaced_record(0.6));

    let summary = encode_batch(&records, &hazard(), &SizeScale::default(), PopupFields::Full);
    assert_eq!(summary.markers.len(), 3);
    assert_eq!(summary.skipped, 2);
}

#[test]
fn test_encode_batch_preserves_input_order() {
    let records = records_with_probabilities(&[0.0, 0.5, 1.0]);
    let summary = encode_batch(&records, &hazard(), &SizeScale::default(), PopupFields::Full);
    let colors: Vec<&str> = summary.markers.iter().map(|m| m.fill_color.as_str()).collect();
    assert_eq!(colors, vec!["#008000", "#ffa500", "#8b0000"]);
}

#[test]
fn test_encode_batch_empty_input() {
    let summary = encode_batch(&[], &hazard(), &SizeScale::default(), PopupFields::Full);
    assert!(summary.markers.is_empty());
    assert_eq!(summary.skipped, 0);
}
