//! Canned CSV fixtures for hazard-table tests.
//!
//! The fixtures mirror the shape of the production export: a header row of
//! fixed column names followed by one row per lake. Tests that need a file
//! on disk can pass any of these to [`write_csv`].

use std::io::Write;

use tempfile::NamedTempFile;

/// Header row matching the full production export.
pub const FULL_HEADER: &str = "Latitude,Longitude,Hazard_Prob,Lake_area_calculated_ha,Elevation_m,Lake_type_simplified,is_supraglacial,glacier_area_ha,slope_glac_to_lake,glacier_contact,glacier_touch_count,nearest_glacier_dist_m,glacier_elev_m,5y_expansion_rate,10y_expansion_rate,GLOF";

/// Header row with only the required columns.
pub const MINIMAL_HEADER: &str = "Latitude,Longitude,Hazard_Prob";

/// Three fully populated lakes in eastern Nepal.
pub const SMALL_TABLE: &str = "\
Latitude,Longitude,Hazard_Prob,Lake_area_calculated_ha,Elevation_m,Lake_type_simplified,is_supraglacial,glacier_area_ha,slope_glac_to_lake,glacier_contact,glacier_touch_count,nearest_glacier_dist_m,glacier_elev_m,5y_expansion_rate,10y_expansion_rate,GLOF
27.8993,86.9208,0.82,114.2,5010,moraine-dammed,False,458.1,18.4,True,2,120,5320,0.042,0.085,True
28.0897,86.8752,0.35,42.7,5005,bedrock-dammed,False,213.5,11.2,False,1,640,5480,0.011,0.019,False
27.9512,87.1020,0.08,6.3,5210,supraglacial,True,88.9,6.8,True,1,0,5395,0.004,0.007,False
";

/// Two lakes with blank optional cells, one with a blank probability.
pub const TABLE_WITH_GAPS: &str = "\
Latitude,Longitude,Hazard_Prob,Lake_area_calculated_ha,Elevation_m,Lake_type_simplified,is_supraglacial,glacier_area_ha,slope_glac_to_lake,glacier_contact,glacier_touch_count,nearest_glacier_dist_m,glacier_elev_m,5y_expansion_rate,10y_expansion_rate,GLOF
27.8993,86.9208,0.82,,,moraine-dammed,,,,,,,,,,
28.0897,86.8752,,42.7,5005,,False,213.5,11.2,,1,640,5480,0.011,0.019,
";

/// Five rows, two of which have no usable position.
pub const TABLE_WITH_BAD_POSITIONS: &str = "\
Latitude,Longitude,Hazard_Prob
27.8993,86.9208,0.82
,86.8752,0.35
27.9512,87.1020,0.08
28.1033,not-a-number,0.51
28.2441,86.6120,0.27
";

/// Rows carrying columns the loader does not know about.
pub const TABLE_WITH_EXTRA_COLUMNS: &str = "\
region,Latitude,Longitude,Hazard_Prob,quality_flag
Khumbu,27.8993,86.9208,0.82,ok
Rolwaling,27.8610,86.4750,0.64,ok
";

/// Write a fixture to a temporary CSV file.
///
/// The file is removed when the returned handle drops.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
