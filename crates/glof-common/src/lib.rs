//! Common types shared across the hazard-map workspace.

pub mod error;
pub mod record;
pub mod style;

pub use error::{HazardMapError, HazardMapResult};
pub use record::LakeRecord;
pub use style::{Color, ColorScale, ColorStop};
