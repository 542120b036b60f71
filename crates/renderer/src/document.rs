//! Interactive map document assembly.
//!
//! Builds a complete, self-contained HTML page: Leaflet from a pinned CDN
//! release, the marker payload embedded as JSON, the legend overlay and the
//! wiring script. The same document serves both the live viewer and the
//! standalone export, so the two delivery paths cannot drift apart.

use std::path::Path;

use glof_common::{ColorScale, HazardMapError, HazardMapResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::basemap::BaseMap;
use crate::legend::legend_html;
use crate::markers::MarkerEncoding;

/// Default view center, over the Khumbu region.
pub const DEFAULT_CENTER: (f64, f64) = (28.2, 87.0);
/// Shallowest zoom the viewer accepts.
pub const MIN_ZOOM: u8 = 5;
/// Deepest zoom the viewer accepts.
pub const MAX_ZOOM: u8 = 12;
/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 7;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_CSS_SRI: &str = "sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_JS_SRI: &str = "sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.4.1/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.4.1/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.4.1/dist/leaflet.markercluster.js";

/// View configuration for one rendered map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Background tile provider
    #[serde(default)]
    pub basemap: BaseMap,
    /// Initial zoom level, within [MIN_ZOOM, MAX_ZOOM]
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Initial view center as (latitude, longitude)
    #[serde(default = "default_center")]
    pub center: (f64, f64),
    /// Group nearby markers into clusters
    #[serde(default)]
    pub cluster: bool,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_center() -> (f64, f64) {
    DEFAULT_CENTER
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            basemap: BaseMap::default(),
            zoom: default_zoom(),
            center: default_center(),
            cluster: false,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> HazardMapResult<()> {
        if self.zoom < MIN_ZOOM || self.zoom > MAX_ZOOM {
            return Err(HazardMapError::InvalidParameter {
                param: "zoom".to_string(),
                message: format!(
                    "Zoom must be between {} and {}, got {}",
                    MIN_ZOOM, MAX_ZOOM, self.zoom
                ),
            });
        }
        Ok(())
    }
}

/// A fully assembled map page.
#[derive(Debug, Clone)]
pub struct MapDocument {
    html: String,
}

impl MapDocument {
    /// Assemble the document from encoded markers.
    ///
    /// Fails on an out-of-range view configuration; markers are embedded
    /// as-is, so an empty slice yields a valid map with no overlay points.
    pub fn build(
        config: &MapConfig,
        markers: &[MarkerEncoding],
        scale: &ColorScale,
    ) -> HazardMapResult<MapDocument> {
        config.validate()?;

        // Escaped so a `</script>` inside popup text cannot break the page.
        let markers_json = serde_json::to_string(markers)?.replace("</", "<\\/");
        let max_zoom = config.basemap.max_zoom().min(MAX_ZOOM);

        let mut html = String::with_capacity(8192 + markers_json.len());
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("<title>Glacial Lake Hazard Map</title>\n");
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\" integrity=\"{}\" crossorigin=\"\"/>\n",
            LEAFLET_CSS, LEAFLET_CSS_SRI
        ));
        html.push_str(&format!(
            "<script src=\"{}\" integrity=\"{}\" crossorigin=\"\"></script>\n",
            LEAFLET_JS, LEAFLET_JS_SRI
        ));
        if config.cluster {
            html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\"/>\n", CLUSTER_CSS));
            html.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\"/>\n",
                CLUSTER_DEFAULT_CSS
            ));
            html.push_str(&format!("<script src=\"{}\"></script>\n", CLUSTER_JS));
        }
        html.push_str("<style>html, body, #map { margin: 0; height: 100%; }</style>\n");
        html.push_str("</head>\n<body>\n<div id=\"map\"></div>\n");
        html.push_str(&legend_html(scale));
        html.push_str("\n<script>\n");
        html.push_str(&format!(
            "const map = L.map('map', {{ minZoom: {}, maxZoom: {} }}).setView([{}, {}], {});\n",
            MIN_ZOOM, max_zoom, config.center.0, config.center.1, config.zoom
        ));
        html.push_str(&format!(
            "L.tileLayer('{}', {{ maxZoom: {}, attribution: '{}' }}).addTo(map);\n",
            config.basemap.tile_url(),
            config.basemap.max_zoom(),
            config.basemap.attribution()
        ));
        html.push_str(&format!("const lakes = {};\n", markers_json));
        if config.cluster {
            html.push_str("const layer = L.markerClusterGroup();\n");
        } else {
            html.push_str("const layer = L.layerGroup();\n");
        }
        html.push_str("lakes.forEach(function (lake) {\n");
        html.push_str("  L.circleMarker([lake.latitude, lake.longitude], {\n");
        html.push_str("    radius: lake.radius,\n");
        html.push_str("    stroke: false,\n");
        html.push_str("    fill: true,\n");
        html.push_str("    fillColor: lake.fill_color,\n");
        html.push_str("    fillOpacity: 0.85\n");
        html.push_str("  }).bindPopup(lake.popup_html, { maxWidth: 350 }).addTo(layer);\n");
        html.push_str("});\n");
        html.push_str("layer.addTo(map);\n");
        html.push_str("L.control.layers(null, { 'Glacial lakes': layer }).addTo(map);\n");
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(MapDocument { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Write the document to disk as a standalone page.
    pub fn write_standalone(&self, path: &Path) -> HazardMapResult<()> {
        std::fs::write(path, &self.html)?;
        info!(path = %path.display(), bytes = self.html.len(), "Wrote standalone map");
        Ok(())
    }
}
