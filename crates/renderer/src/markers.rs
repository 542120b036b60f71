//! Marker encoding: one lake record to one visual marker.

use glof_common::{ColorScale, HazardMapError, HazardMapResult, LakeRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::popup::{build_popup, PopupFields};

/// Errors for records that cannot become markers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Record has no usable latitude/longitude")]
    MissingPosition,
}

/// Marker radius derivation from lake area.
///
/// `radius = clamp(area / area_divisor, min_radius, max_radius)`, with
/// `default_area` standing in when the record carries no area value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeScale {
    #[serde(default = "default_area_divisor")]
    pub area_divisor: f64,
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    #[serde(default = "default_area")]
    pub default_area: f64,
}

fn default_area_divisor() -> f64 {
    30.0
}

fn default_min_radius() -> f64 {
    2.0
}

fn default_max_radius() -> f64 {
    10.0
}

fn default_area() -> f64 {
    0.5
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            area_divisor: default_area_divisor(),
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
            default_area: default_area(),
        }
    }
}

impl SizeScale {
    /// Check the sizing rule is usable.
    ///
    /// Deserialized overrides can carry a zero divisor or bounds that cross;
    /// both must be rejected before any radius is derived, since `clamp`
    /// panics on inverted bounds.
    pub fn validate(&self) -> HazardMapResult<()> {
        if !self.area_divisor.is_finite() || self.area_divisor <= 0.0 {
            return Err(HazardMapError::InvalidParameter {
                param: "size_scale".to_string(),
                message: format!("area_divisor must be positive, got {}", self.area_divisor),
            });
        }
        if !self.min_radius.is_finite() || !self.max_radius.is_finite() {
            return Err(HazardMapError::InvalidParameter {
                param: "size_scale".to_string(),
                message: "Radius bounds must be finite".to_string(),
            });
        }
        if self.min_radius > self.max_radius {
            return Err(HazardMapError::InvalidParameter {
                param: "size_scale".to_string(),
                message: format!(
                    "min_radius {} must not exceed max_radius {}",
                    self.min_radius, self.max_radius
                ),
            });
        }
        if !self.default_area.is_finite() || self.default_area < 0.0 {
            return Err(HazardMapError::InvalidParameter {
                param: "size_scale".to_string(),
                message: format!("default_area must be non-negative, got {}", self.default_area),
            });
        }
        Ok(())
    }

    /// Marker radius in screen pixels for a lake of the given area.
    pub fn radius_for(&self, area_ha: Option<f64>) -> f64 {
        let area = area_ha.unwrap_or(self.default_area);
        (area / self.area_divisor).clamp(self.min_radius, self.max_radius)
    }
}

/// The visual encoding of one lake, ready for document embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerEncoding {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in screen pixels.
    pub radius: f64,
    /// CSS hex fill color taken from the hazard scale.
    pub fill_color: String,
    /// Pre-rendered popup body.
    pub popup_html: String,
}

/// Outcome of encoding a whole table.
#[derive(Debug, Clone)]
pub struct EncodingSummary {
    pub markers: Vec<MarkerEncoding>,
    /// Records dropped for lack of a usable position.
    pub skipped: usize,
}

/// Encode a single record.
///
/// Pure: the same record, scale and sizing always yield the same marker.
pub fn encode_marker(
    record: &LakeRecord,
    scale: &ColorScale,
    size: &SizeScale,
    fields: PopupFields,
) -> Result<MarkerEncoding, EncodeError> {
    let (latitude, longitude) = record.position().ok_or(EncodeError::MissingPosition)?;

    let fill_color = scale.color_at(record.hazard_probability).to_hex();
    let radius = size.radius_for(record.lake_area_ha);
    let popup_html = build_popup(record, &fill_color, fields);

    Ok(MarkerEncoding {
        latitude,
        longitude,
        radius,
        fill_color,
        popup_html,
    })
}

/// Encode every record of a table, skipping the unplaceable ones.
///
/// Output order matches input order. Each skipped record is logged at WARN
/// with its row index.
pub fn encode_batch(
    records: &[LakeRecord],
    scale: &ColorScale,
    size: &SizeScale,
    fields: PopupFields,
) -> EncodingSummary {
    let encoded: Vec<_> = records
        .par_iter()
        .map(|record| encode_marker(record, scale, size, fields))
        .collect();

    let mut markers = Vec::with_capacity(encoded.len());
    let mut skipped = 0;
    for (row, result) in encoded.into_iter().enumerate() {
        match result {
            Ok(marker) => markers.push(marker),
            Err(err) => {
                warn!(row = row, error = %err, "Skipping record without position");
                skipped += 1;
            }
        }
    }

    EncodingSummary { markers, skipped }
}
