//! Column registry for the hazard table.
//!
//! Header names are fixed by the upstream export. Three columns are
//! required for a usable table; the rest are optional and yield `None`
//! fields for every record when absent from the file.

use csv::StringRecord;

use crate::error::{DataLoadError, Result};

// Required columns
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";
pub const HAZARD_PROB: &str = "Hazard_Prob";

// Optional columns
pub const LAKE_AREA_HA: &str = "Lake_area_calculated_ha";
pub const ELEVATION_M: &str = "Elevation_m";
pub const LAKE_TYPE: &str = "Lake_type_simplified";
pub const IS_SUPRAGLACIAL: &str = "is_supraglacial";
pub const SLOPE_GLAC_TO_LAKE: &str = "slope_glac_to_lake";
pub const GLACIER_AREA_HA: &str = "glacier_area_ha";
pub const GLACIER_CONTACT: &str = "glacier_contact";
pub const GLACIER_TOUCH_COUNT: &str = "glacier_touch_count";
pub const NEAREST_GLACIER_DIST_M: &str = "nearest_glacier_dist_m";
pub const GLACIER_ELEV_M: &str = "glacier_elev_m";
pub const EXPANSION_RATE_5Y: &str = "5y_expansion_rate";
pub const EXPANSION_RATE_10Y: &str = "10y_expansion_rate";
pub const OBSERVED_GLOF: &str = "GLOF";

/// Resolved positions of the known columns within a header row.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    pub latitude: usize,
    pub longitude: usize,
    pub hazard_prob: usize,
    pub lake_area_ha: Option<usize>,
    pub elevation_m: Option<usize>,
    pub lake_type: Option<usize>,
    pub is_supraglacial: Option<usize>,
    pub glacier_area_ha: Option<usize>,
    pub slope_glac_to_lake: Option<usize>,
    pub glacier_contact: Option<usize>,
    pub glacier_touch_count: Option<usize>,
    pub nearest_glacier_dist_m: Option<usize>,
    pub glacier_elev_m: Option<usize>,
    pub expansion_rate_5y: Option<usize>,
    pub expansion_rate_10y: Option<usize>,
    pub observed_glof: Option<usize>,
}

impl ColumnIndex {
    /// Resolve column positions from the header row.
    ///
    /// Fails when a required column is absent. Columns the loader does not
    /// know about are ignored.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let require = |name: &str| -> Result<usize> {
            find(headers, name).ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            latitude: require(LATITUDE)?,
            longitude: require(LONGITUDE)?,
            hazard_prob: require(HAZARD_PROB)?,
            lake_area_ha: find(headers, LAKE_AREA_HA),
            elevation_m: find(headers, ELEVATION_M),
            lake_type: find(headers, LAKE_TYPE),
            is_supraglacial: find(headers, IS_SUPRAGLACIAL),
            glacier_area_ha: find(headers, GLACIER_AREA_HA),
            slope_glac_to_lake: find(headers, SLOPE_GLAC_TO_LAKE),
            glacier_contact: find(headers, GLACIER_CONTACT),
            glacier_touch_count: find(headers, GLACIER_TOUCH_COUNT),
            nearest_glacier_dist_m: find(headers, NEAREST_GLACIER_DIST_M),
            glacier_elev_m: find(headers, GLACIER_ELEV_M),
            expansion_rate_5y: find(headers, EXPANSION_RATE_5Y),
            expansion_rate_10y: find(headers, EXPANSION_RATE_10Y),
            observed_glof: find(headers, OBSERVED_GLOF),
        })
    }
}

fn find(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}
