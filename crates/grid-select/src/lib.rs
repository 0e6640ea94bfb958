//! Coordinate-aware slicing for gridded datasets.
//!
//! Selection happens in the coordinate value domain, not in raw indices:
//! a [`SelectionRequest`] names axes and attaches a range, a single value,
//! a timestamp predicate, or a month/season preset to each. The contiguous
//! path ([`compute_slices`] / [`slice_grid`]) turns range requests into
//! half-open index ranges via the [`intersect`] module's common-range rule;
//! the elementwise path ([`select`]) evaluates predicates over a temporal
//! axis and picks individual timesteps.

pub mod intersect;
pub mod request;
pub mod select;
pub mod slicer;

pub use intersect::common_range_indices;
pub use request::{AxisSelection, PresetCode, SelectionRequest, TimePredicate};
pub use select::select;
pub use slicer::{compute_slices, slice_grid, NUMERIC_EPSILON};
