//! CSV loading for the hazard table.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use glof_common::LakeRecord;
use tracing::info;

use crate::columns::ColumnIndex;
use crate::error::Result;

/// The loaded hazard table.
///
/// Holds every parsed row plus provenance. Built once at startup and shared
/// read-only from then on.
#[derive(Debug, Clone)]
pub struct LakeTable {
    records: Vec<LakeRecord>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl LakeTable {
    /// Load the table from a CSV file.
    ///
    /// Fails when the file is missing, the CSV is malformed or a required
    /// column is absent. Rows with unusable cells still load: blank and
    /// unparsable optional cells become `None`, an unparsable probability
    /// becomes NaN. Rejecting records without a position is the encoder's
    /// job, not the loader's.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;

        // flexible: short rows resolve to missing cells rather than errors
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
        let index = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(parse_record(&row, &index));
        }

        info!(path = %path.display(), rows = records.len(), "Loaded hazard table");

        Ok(Self {
            records,
            source: path.to_path_buf(),
            loaded_at: Utc::now(),
        })
    }

    pub fn records(&self) -> &[LakeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The file this table was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn parse_record(row: &StringRecord, index: &ColumnIndex) -> LakeRecord {
    LakeRecord {
        latitude: numeric_cell(row, Some(index.latitude)),
        longitude: numeric_cell(row, Some(index.longitude)),
        hazard_probability: probability_cell(row, index.hazard_prob),
        lake_area_ha: numeric_cell(row, index.lake_area_ha),
        elevation_m: numeric_cell(row, index.elevation_m),
        lake_type: text_cell(row, index.lake_type),
        supraglacial: text_cell(row, index.is_supraglacial),
        glacier_area_ha: numeric_cell(row, index.glacier_area_ha),
        slope_glacier_to_lake_deg: numeric_cell(row, index.slope_glac_to_lake),
        glacier_contact: text_cell(row, index.glacier_contact),
        glacier_touch_count: numeric_cell(row, index.glacier_touch_count),
        nearest_glacier_dist_m: numeric_cell(row, index.nearest_glacier_dist_m),
        glacier_elevation_m: numeric_cell(row, index.glacier_elev_m),
        expansion_rate_5y: numeric_cell(row, index.expansion_rate_5y),
        expansion_rate_10y: numeric_cell(row, index.expansion_rate_10y),
        observed_glof: text_cell(row, index.observed_glof),
    }
}

/// Parse the probability cell. Blank, `NA` and unparsable cells become NaN.
/// Parsed infinities carry through; the color scale clamps them to the
/// nearer end like any other out-of-range value.
fn probability_cell(row: &StringRecord, index: usize) -> f64 {
    let raw = match row.get(index) {
        Some(cell) => cell.trim(),
        None => return f64::NAN,
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") {
        return f64::NAN;
    }
    raw.parse().unwrap_or(f64::NAN)
}

/// Parse a numeric cell. Blank, `NA` and unparsable cells become `None`,
/// as do non-finite values, which can neither be placed nor sized.
fn numeric_cell(row: &StringRecord, index: Option<usize>) -> Option<f64> {
    let raw = row.get(index?)?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a text cell. Blank and `NA` cells become `None`.
fn text_cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    let raw = row.get(index?)?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") {
        return None;
    }
    Some(raw.to_string())
}
