//! Core types for coordinate-aware gridded datasets.
//!
//! A [`Grid`] is a dense N-dimensional data array paired with an ordered
//! [`CoordinateSet`] mapping axis names to [`CoordinateAxis`] values
//! (numeric or timestamp). Axis declaration order is the dimension order of
//! the data array and is preserved through every operation.
//!
//! Grids are immutable value objects: reductions, masking, and the slicing
//! operations in the companion crates all allocate new backing storage and
//! never alias axes between two live grids.

pub mod axis;
pub mod coords;
pub mod error;
pub mod grid;

pub use axis::{AxisValues, CoordValue, CoordinateAxis};
pub use coords::CoordinateSet;
pub use error::{GridError, GridResult};
pub use grid::{nanmean, Grid, MaskedGrid};
