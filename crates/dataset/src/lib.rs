//! Loading of the precomputed hazard table.
//!
//! The table arrives as a flat CSV produced by the upstream model run. This
//! crate turns it into an in-memory [`LakeTable`] handle: a vector of
//! [`glof_common::LakeRecord`] plus provenance (source path, load time).
//! Loading happens once per process; everything downstream reads the handle.

pub mod columns;
pub mod error;
pub mod loader;

pub use columns::ColumnIndex;
pub use error::{DataLoadError, Result};
pub use loader::LakeTable;
