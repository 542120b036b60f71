//! Lake record types.
//!
//! A [`LakeRecord`] is one row of the precomputed hazard table. Position and
//! hazard probability drive the visual encoding; every other attribute is
//! descriptive and only surfaces in the marker popup.

use serde::{Deserialize, Serialize};

/// A single glacial lake with its model-predicted hazard probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LakeRecord {
    /// Latitude in decimal degrees. Required for placement.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees. Required for placement.
    pub longitude: Option<f64>,
    /// Predicted outburst-flood probability, nominally in [0, 1].
    /// Unparsable cells load as NaN and clamp to the low end of the scale.
    pub hazard_probability: f64,
    /// Lake surface area in hectares.
    pub lake_area_ha: Option<f64>,
    /// Lake surface elevation in meters.
    pub elevation_m: Option<f64>,
    /// Simplified lake type classification.
    pub lake_type: Option<String>,
    /// Whether the lake sits on a glacier surface.
    pub supraglacial: Option<String>,
    /// Area of the feeding glacier in hectares.
    pub glacier_area_ha: Option<f64>,
    /// Mean slope from the glacier terminus to the lake, in degrees.
    pub slope_glacier_to_lake_deg: Option<f64>,
    /// Whether the lake is in direct contact with a glacier.
    pub glacier_contact: Option<String>,
    /// Number of glaciers touching the lake boundary.
    pub glacier_touch_count: Option<f64>,
    /// Distance to the nearest glacier in meters.
    pub nearest_glacier_dist_m: Option<f64>,
    /// Elevation of the feeding glacier in meters.
    pub glacier_elevation_m: Option<f64>,
    /// Mean areal expansion rate over the last 5 years.
    pub expansion_rate_5y: Option<f64>,
    /// Mean areal expansion rate over the last 10 years.
    pub expansion_rate_10y: Option<f64>,
    /// Whether an outburst flood has been observed historically.
    pub observed_glof: Option<String>,
}

impl LakeRecord {
    /// Returns the placement coordinates when both are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
