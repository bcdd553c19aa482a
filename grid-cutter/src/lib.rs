pub mod config;
pub mod cutter;
pub mod error;
pub mod geom;

/// 1-based, row-major cell index.
pub type CellNumber = u32;

pub use config::GridConfig;
pub use cutter::{CellLookup, compute_cell_corners};
pub use error::GridError;
pub use geom::{CellBox, CornerRect, Point, UvPoint};
