//! Hazard map rendering.
//!
//! Turns loaded lake records into visual markers and assembles them into a
//! self-contained interactive map document. Encoding is pure and keyed only
//! on the record, the color scale and the sizing rule, so the same inputs
//! always produce the same map.

pub mod basemap;
pub mod document;
pub mod legend;
pub mod markers;
pub mod popup;

pub use basemap::BaseMap;
pub use document::{MapConfig, MapDocument, DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
pub use legend::LEGEND_CAPTION;
pub use markers::{
    encode_batch, encode_marker, EncodeError, EncodingSummary, MarkerEncoding, SizeScale,
};
pub use popup::PopupFields;
