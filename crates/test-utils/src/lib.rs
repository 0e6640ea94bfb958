//! Shared test utilities for the gridded-data workspace.
//!
//! Provides synthetic coordinate axes and grids with predictable values so
//! tests can assert on exact positions rather than approximate payloads.

pub mod generators;

pub use generators::{
    daily_time_axis, grid_with_nan, latlon_coords, monotonic_axis, sequential_grid,
    time_latlon_grid,
};
