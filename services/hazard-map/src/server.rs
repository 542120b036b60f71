//! HTTP server for the hazard map viewer.
//!
//! Provides endpoints for:
//! - `GET /` - Viewer page with basemap/zoom/cluster controls
//! - `GET /map` - The assembled map document
//! - `GET /api/lakes` - Encoded markers as JSON
//! - `GET /health` - Health check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use renderer::{BaseMap, MapDocument, MarkerEncoding, MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use glof_common::{HazardMapError, HazardMapResult};

use crate::state::AppState;

/// Query parameters for the `/map` endpoint.
///
/// Absent parameters fall back to the configured view.
#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub basemap: Option<String>,
    pub zoom: Option<u8>,
    pub cluster: Option<bool>,
}

/// Response body for `/api/lakes`.
#[derive(Debug, Serialize)]
pub struct LakesResponse {
    pub count: usize,
    pub skipped: usize,
    pub markers: Vec<MarkerEncoding>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub rows: usize,
    pub markers: usize,
    pub skipped: usize,
    pub loaded_at: String,
}

/// GET / - Viewer page wrapping the map in a control sidebar
async fn index_handler(Extension(state): Extension<Arc<AppState>>) -> Html<String> {
    let view = &state.config.map;

    let mut options = String::new();
    for basemap in BaseMap::ALL {
        let selected = if basemap == view.basemap { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            basemap.id(),
            selected,
            basemap.label()
        ));
    }

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Glacial Lake Hazard Map</title>\n<style>\n");
    html.push_str("body { margin: 0; display: flex; height: 100vh; font: 14px sans-serif; }\n");
    html.push_str("#sidebar { width: 220px; padding: 16px; background: #f4f4f4; }\n");
    html.push_str("#sidebar label { display: block; margin: 12px 0 4px; font-weight: bold; }\n");
    html.push_str("#frame { flex: 1; border: none; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<div id=\"sidebar\">\n<h3>Map Controls</h3>\n");
    html.push_str("<label for=\"basemap\">Basemap</label>\n");
    html.push_str(&format!("<select id=\"basemap\">{}</select>\n", options));
    html.push_str("<label for=\"zoom\">Zoom <span id=\"zoom-value\"></span></label>\n");
    html.push_str(&format!(
        "<input id=\"zoom\" type=\"range\" min=\"{}\" max=\"{}\" value=\"{}\">\n",
        MIN_ZOOM, MAX_ZOOM, view.zoom
    ));
    html.push_str(&format!(
        "<label for=\"cluster\"><input id=\"cluster\" type=\"checkbox\"{}> Cluster markers</label>\n",
        if view.cluster { " checked" } else { "" }
    ));
    html.push_str("</div>\n");
    html.push_str("<iframe id=\"frame\" src=\"/map\"></iframe>\n");
    html.push_str("<script>\n");
    html.push_str("function refresh() {\n");
    html.push_str("  const basemap = document.getElementById('basemap').value;\n");
    html.push_str("  const zoom = document.getElementById('zoom').value;\n");
    html.push_str("  const cluster = document.getElementById('cluster').checked;\n");
    html.push_str("  document.getElementById('zoom-value').textContent = zoom;\n");
    html.push_str(
        "  document.getElementById('frame').src = '/map?basemap=' + basemap + '&zoom=' + zoom + '&cluster=' + cluster;\n",
    );
    html.push_str("}\n");
    html.push_str("for (const id of ['basemap', 'zoom', 'cluster']) {\n");
    html.push_str("  document.getElementById(id).addEventListener('change', refresh);\n");
    html.push_str("}\n");
    html.push_str("refresh();\n");
    html.push_str("</script>\n</body>\n</html>\n");

    Html(html)
}

/// GET /map - Assemble the map document for the requested view
async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Response {
    match render_map(&state, &query) {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_response(e),
    }
}

fn render_map(state: &AppState, query: &MapQuery) -> HazardMapResult<String> {
    let mut config = state.config.map.clone();
    if let Some(basemap) = &query.basemap {
        config.basemap = basemap.parse()?;
    }
    if let Some(zoom) = query.zoom {
        config.zoom = zoom;
    }
    if let Some(cluster) = query.cluster {
        config.cluster = cluster;
    }

    let document = MapDocument::build(&config, &state.markers, &state.scale)?;
    Ok(document.html().to_string())
}

fn error_response(error: HazardMapError) -> Response {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warn!(status = %status, error = %error, "Request failed");
    (status, error.to_string()).into_response()
}

/// GET /api/lakes - Encoded markers as JSON
async fn lakes_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(LakesResponse {
        count: state.markers.len(),
        skipped: state.skipped,
        markers: state.markers.clone(),
    })
}

/// GET /health - Health check
async fn health_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "hazard-map".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows: state.table.len(),
        markers: state.markers.len(),
        skipped: state.skipped,
        loaded_at: state.table.loaded_at().to_rfc3339(),
    })
}

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/map", get(map_handler))
        .route("/api/lakes", get(lakes_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server.
pub async fn start_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let listen = state.config.listen.clone();
    let app = build_router(state);

    let addr: SocketAddr = listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
