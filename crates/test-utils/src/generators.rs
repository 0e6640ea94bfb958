//! Generators for synthetic axes and grids with predictable values.
//!
//! Values are chosen so tests can verify positions directly: sequential
//! grids store the flattened element index at every cell, so
//! `grid[[i, j, k]] == flat_index(i, j, k)`.

use chrono::{DateTime, Duration, Utc};
use ndarray::{ArrayD, IxDyn};

use grid_core::{CoordinateAxis, CoordinateSet, Grid};

/// A numeric axis `start, start+step, ...` with `n` points.
pub fn monotonic_axis(name: &str, start: f64, step: f64, n: usize, units: &str) -> CoordinateAxis {
    let values = (0..n).map(|i| start + step * i as f64).collect();
    CoordinateAxis::numeric(name, values, units)
}

/// A temporal axis named "time" with `n` daily timestamps starting at `start`.
pub fn daily_time_axis(start: DateTime<Utc>, n: usize) -> CoordinateAxis {
    let values = (0..n).map(|i| start + Duration::days(i as i64)).collect();
    CoordinateAxis::time("time", values, "days since start")
}

/// A lat/lon coordinate set with the given extents (1-degree steps).
pub fn latlon_coords(nlat: usize, nlon: usize) -> CoordinateSet {
    CoordinateSet::from_axes(vec![
        monotonic_axis("lat", 0.0, 1.0, nlat, "degrees_north"),
        monotonic_axis("lon", 0.0, 1.0, nlon, "degrees_east"),
    ])
    .expect("distinct axis names")
}

/// A grid whose every cell holds its own flattened (row-major) index.
pub fn sequential_grid(coords: CoordinateSet, title: &str) -> Grid {
    let shape = coords.shape();
    let len: usize = shape.iter().product();
    let values = (0..len).map(|i| i as f64).collect();
    let data = ArrayD::from_shape_vec(IxDyn(&shape), values).expect("shape matches coords");
    Grid::new(data, coords, title).expect("shape matches coords")
}

/// A sequential grid with NaN written at the given flat indices.
pub fn grid_with_nan(coords: CoordinateSet, nan_at: &[usize], title: &str) -> Grid {
    let shape = coords.shape();
    let len: usize = shape.iter().product();
    let mut values: Vec<f64> = (0..len).map(|i| i as f64).collect();
    for &i in nan_at {
        values[i] = f64::NAN;
    }
    let data = ArrayD::from_shape_vec(IxDyn(&shape), values).expect("shape matches coords");
    Grid::new(data, coords, title).expect("shape matches coords")
}

/// A (time, lat, lon) grid with daily timesteps and sequential values.
pub fn time_latlon_grid(
    start: DateTime<Utc>,
    ndays: usize,
    nlat: usize,
    nlon: usize,
    title: &str,
) -> Grid {
    let coords = CoordinateSet::from_axes(vec![
        daily_time_axis(start, ndays),
        monotonic_axis("lat", 0.0, 1.0, nlat, "degrees_north"),
        monotonic_axis("lon", 0.0, 1.0, nlon, "degrees_east"),
    ])
    .expect("distinct axis names");
    sequential_grid(coords, title)
}
