//! Shared application state.

use anyhow::Result;
use dataset::LakeTable;
use glof_common::ColorScale;
use renderer::{encode_batch, EncodingSummary, MarkerEncoding};
use tracing::info;

use crate::config::ViewerConfig;

/// State shared across request handlers.
///
/// The table is loaded and encoded once at startup; handlers re-assemble
/// the document around the cached markers, so per-request work is only
/// string assembly.
pub struct AppState {
    pub config: ViewerConfig,
    pub table: LakeTable,
    pub markers: Vec<MarkerEncoding>,
    pub skipped: usize,
    pub scale: ColorScale,
}

impl AppState {
    /// Load, validate and encode everything the handlers share.
    ///
    /// The configured view and sizing rule are checked up front so a bad
    /// config fails at startup rather than on the first request.
    pub fn build(config: ViewerConfig) -> Result<Self> {
        config.map.validate()?;
        config.size_scale.validate()?;

        let table = LakeTable::load(&config.data)?;
        let scale = ColorScale::hazard();

        let EncodingSummary { markers, skipped } = encode_batch(
            table.records(),
            &scale,
            &config.size_scale,
            config.popup_fields,
        );

        info!(
            rows = table.len(),
            markers = markers.len(),
            skipped = skipped,
            "Encoded hazard table"
        );

        Ok(Self {
            config,
            table,
            markers,
            skipped,
            scale,
        })
    }
}
