//! Builders for in-memory lake records.
//!
//! These produce predictable records for encoder and renderer tests without
//! going through the CSV loader.

use glof_common::LakeRecord;

/// A minimal placeable record with the given position and probability.
pub fn lake_record(latitude: f64, longitude: f64, hazard_probability: f64) -> LakeRecord {
    LakeRecord {
        latitude: Some(latitude),
        longitude: Some(longitude),
        hazard_probability,
        ..Default::default()
    }
}

/// A record with every descriptive attribute populated.
pub fn full_record() -> LakeRecord {
    LakeRecord {
        latitude: Some(27.8993),
        longitude: Some(86.9208),
        hazard_probability: 0.82,
        lake_area_ha: Some(114.2),
        elevation_m: Some(5010.0),
        lake_type: Some("moraine-dammed".to_string()),
        supraglacial: Some("False".to_string()),
        glacier_area_ha: Some(458.1),
        slope_glacier_to_lake_deg: Some(18.4),
        glacier_contact: Some("True".to_string()),
        glacier_touch_count: Some(2.0),
        nearest_glacier_dist_m: Some(120.0),
        glacier_elevation_m: Some(5320.0),
        expansion_rate_5y: Some(0.042),
        expansion_rate_10y: Some(0.085),
        observed_glof: Some("True".to_string()),
    }
}

/// A record that cannot be placed on the map.
pub fn unplaced_record(hazard_probability: f64) -> LakeRecord {
    LakeRecord {
        hazard_probability,
        ..Default::default()
    }
}

/// One placeable record per probability, spread along a line of longitude.
pub fn records_with_probabilities(probabilities: &[f64]) -> Vec<LakeRecord> {
    probabilities
        .iter()
        .enumerate()
        .map(|(i, &p)| lake_record(28.0 + 0.01 * i as f64, 87.0, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lake_record_is_placeable() {
        let record = lake_record(28.0, 87.0, 0.5);
        assert_eq!(record.position(), Some((28.0, 87.0)));
        assert_eq!(record.hazard_probability, 0.5);
    }

    #[test]
    fn test_unplaced_record_has_no_position() {
        assert_eq!(unplaced_record(0.5).position(), None);
    }

    #[test]
    fn test_records_with_probabilities() {
        let records = records_with_probabilities(&[0.0, 0.5, 1.0]);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.position().is_some()));
        assert_eq!(records[1].hazard_probability, 0.5);
    }
}
