//! Glacial lake hazard map viewer.
//!
//! HTTP service that loads a hazard probability table, encodes it into map
//! markers once at startup and serves an interactive Leaflet viewer. The
//! same document pipeline drives the `--export` mode for standalone pages.

pub mod config;
pub mod server;
pub mod state;
