//! Elementwise (predicate) selection along a temporal axis.

use ndarray::Axis;
use tracing::debug;

use grid_core::{AxisValues, CoordinateSet, Grid, GridError, GridResult};

use crate::request::AxisSelection;

/// Select the timesteps of a grid where a predicate holds.
///
/// The selector must be [`AxisSelection::Predicate`] or
/// [`AxisSelection::Preset`], and the named axis must be temporal. Matching
/// positions are collected in ascending original order and applied as a
/// list-of-indices selection to the data and the temporal axis; the other
/// axes are cloned unchanged. Zero matches produce a valid empty grid, not
/// an error.
pub fn select(grid: &Grid, axis_name: &str, selector: &AxisSelection) -> GridResult<Grid> {
    let position = grid
        .coords()
        .position(axis_name)
        .ok_or_else(|| GridError::unknown_axis(axis_name))?;
    let axis = grid
        .coords()
        .get(axis_name)
        .ok_or_else(|| GridError::unknown_axis(axis_name))?;

    let times = match axis.values() {
        AxisValues::Time(times) => times,
        AxisValues::Numeric(_) => {
            return Err(GridError::unrecognized_selector(format!(
                "axis '{}' is not a temporal axis; elementwise selection is only \
                 supported on timestamps",
                axis_name
            )))
        }
    };

    let positions: Vec<usize> = match selector {
        AxisSelection::Predicate(predicate) => times
            .iter()
            .enumerate()
            .filter(|(_, &t)| predicate(t))
            .map(|(i, _)| i)
            .collect(),
        AxisSelection::Preset(code) => times
            .iter()
            .enumerate()
            .filter(|(_, &t)| code.matches(t))
            .map(|(i, _)| i)
            .collect(),
        AxisSelection::Range(..) | AxisSelection::Value(_) => {
            return Err(GridError::unrecognized_selector(format!(
                "axis '{}': range selectors are resolved by compute_slices(), \
                 select() expects a predicate or preset",
                axis_name
            )))
        }
    };

    debug!(
        axis = axis_name,
        matched = positions.len(),
        total = times.len(),
        "elementwise selection"
    );

    let data = grid.data().select(Axis(position), &positions);

    let mut coords = CoordinateSet::new();
    for (i, ax) in grid.coords().iter().enumerate() {
        let new_axis = if i == position {
            ax.take(&positions)
        } else {
            ax.clone()
        };
        coords.insert(new_axis)?;
    }

    Grid::new(data, coords, grid.title())
}
