//! Translate selection requests into concrete index ranges and apply them.

use std::ops::Range;

use chrono::Duration;
use ndarray::Slice;
use tracing::debug;

use grid_core::{AxisValues, CoordValue, CoordinateAxis, CoordinateSet, Grid, GridError, GridResult};

use crate::intersect::common_range_indices;
use crate::request::{AxisSelection, SelectionRequest};

/// Epsilon used to widen a single numeric value into a zero-width range.
pub const NUMERIC_EPSILON: f64 = 1e-6;

/// Widen a single value into a degenerate `(value, value + ε)` range.
///
/// ε is 1e-6 for numeric values and one second for timestamps. The fixed
/// increment mirrors the established single-value behavior and is documented
/// as an approximation on [`AxisSelection::Value`].
fn expand_value(v: CoordValue) -> (CoordValue, CoordValue) {
    match v {
        CoordValue::Number(x) => (
            CoordValue::Number(x),
            CoordValue::Number(x + NUMERIC_EPSILON),
        ),
        CoordValue::Time(t) => (CoordValue::Time(t), CoordValue::Time(t + Duration::seconds(1))),
    }
}

/// Resolve a `(lower, upper)` bound pair against one axis.
///
/// Delegates to the range intersector applied to the pair
/// `(axis values, [lower, upper])`, so the half-open tie-break rules are the
/// same ones used for axis-to-axis intersection. A bound whose domain does
/// not match the axis (number vs. timestamp) cannot be located and is an
/// out-of-domain failure.
fn bounded_range(
    axis: &CoordinateAxis,
    lower: CoordValue,
    upper: CoordValue,
) -> GridResult<Range<usize>> {
    let (start, end) = match (axis.values(), lower, upper) {
        (AxisValues::Numeric(values), CoordValue::Number(lo), CoordValue::Number(hi)) => {
            let pair = [lo, hi];
            common_range_indices(&[values.as_slice(), pair.as_slice()])[0]
        }
        (AxisValues::Time(values), CoordValue::Time(lo), CoordValue::Time(hi)) => {
            let pair = [lo, hi];
            common_range_indices(&[values.as_slice(), pair.as_slice()])[0]
        }
        _ => {
            return Err(GridError::out_of_domain(format!(
                "bounds ({}, {}) cannot be compared with axis '{}'",
                lower,
                upper,
                axis.name()
            )))
        }
    };
    Ok(start..end)
}

/// Compute per-axis index ranges for a selection request.
///
/// Axes are processed in the coordinate set's declared order. An axis absent
/// from the request keeps its full `[0, len)` range; a `Value` entry is
/// widened by ε; `Range` and widened `Value` bounds are resolved with the
/// same half-open rule as the range intersector. Axes named in the request
/// must be sorted (fail-fast) and must exist in the coordinate set.
///
/// Predicate and preset entries are elementwise selections that cannot be
/// expressed as a contiguous range; they are rejected here and belong to
/// [`select`](crate::select).
pub fn compute_slices(
    coords: &CoordinateSet,
    request: &SelectionRequest,
) -> GridResult<Vec<Range<usize>>> {
    for (name, _) in request.iter() {
        if !coords.contains(name) {
            return Err(GridError::unknown_axis(name));
        }
    }

    let mut slices = Vec::with_capacity(coords.len());
    for axis in coords.iter() {
        let range = match request.get(axis.name()) {
            None => 0..axis.len(),
            Some(selection) => {
                axis.validate_sorted()?;
                let (lower, upper) = match selection {
                    AxisSelection::Range(lo, hi) => (*lo, *hi),
                    AxisSelection::Value(v) => expand_value(*v),
                    AxisSelection::Predicate(_) | AxisSelection::Preset(_) => {
                        return Err(GridError::unrecognized_selector(format!(
                            "axis '{}': elementwise selectors are resolved by select(), \
                             not by compute_slices()",
                            axis.name()
                        )))
                    }
                };
                bounded_range(axis, lower, upper)?
            }
        };
        slices.push(range);
    }

    debug!(?slices, "computed coordinate slices");
    Ok(slices)
}

/// Slice a grid by a selection request.
///
/// The computed index ranges are applied simultaneously to the data array
/// and to every coordinate axis, so axes stay synchronized with their
/// dimensions. Retained axes are cloned, never aliased.
pub fn slice_grid(grid: &Grid, request: &SelectionRequest) -> GridResult<Grid> {
    let ranges = compute_slices(grid.coords(), request)?;

    let data = grid
        .data()
        .slice_each_axis(|ad| Slice::from(ranges[ad.axis.index()].clone()))
        .to_owned();

    let mut coords = CoordinateSet::new();
    for (axis, range) in grid.coords().iter().zip(&ranges) {
        coords.insert(axis.slice(range.clone()))?;
    }

    Grid::new(data, coords, grid.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn coords() -> CoordinateSet {
        CoordinateSet::from_axes(vec![
            CoordinateAxis::numeric("lat", (0..10).map(|i| i as f64 * 10.0).collect(), "degrees_north"),
            CoordinateAxis::numeric("lon", (0..8).map(|i| i as f64 * 45.0).collect(), "degrees_east"),
        ])
        .unwrap()
    }

    #[test]
    fn test_unnamed_axes_keep_full_range() {
        let request = SelectionRequest::new().range("lat", 20.0, 50.0);
        let slices = compute_slices(&coords(), &request).unwrap();
        assert_eq!(slices, vec![2..6, 0..8]);
    }

    #[test]
    fn test_own_min_max_covers_everything() {
        let request = SelectionRequest::new().range("lat", 0.0, 90.0);
        let slices = compute_slices(&coords(), &request).unwrap();
        assert_eq!(slices[0], 0..10);
    }

    #[test]
    fn test_single_value_epsilon_expansion() {
        let request = SelectionRequest::new().value("lon", 45.0);
        let slices = compute_slices(&coords(), &request).unwrap();
        assert_eq!(slices[1], 1..2);
    }

    #[test]
    fn test_unknown_axis_in_request() {
        let request = SelectionRequest::new().range("depth", 0.0, 1.0);
        assert!(matches!(
            compute_slices(&coords(), &request),
            Err(GridError::UnknownAxis(name)) if name == "depth"
        ));
    }

    #[test]
    fn test_type_mismatch_is_out_of_domain() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request = SelectionRequest::new().range("lat", t, t);
        assert!(matches!(
            compute_slices(&coords(), &request),
            Err(GridError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_unsorted_axis_fails_fast() {
        let coords = CoordinateSet::from_axes(vec![CoordinateAxis::numeric(
            "lat",
            vec![0.0, 30.0, 10.0],
            "degrees_north",
        )])
        .unwrap();
        let request = SelectionRequest::new().range("lat", 0.0, 30.0);
        assert!(matches!(
            compute_slices(&coords, &request),
            Err(GridError::UnsortedAxis(_))
        ));
        // an unsorted axis not named in the request is left alone
        let slices = compute_slices(&coords, &SelectionRequest::new()).unwrap();
        assert_eq!(slices, vec![0..3]);
    }

    #[test]
    fn test_preset_rejected_in_contiguous_path() {
        let request =
            SelectionRequest::new().with("lat", AxisSelection::preset("JAN").unwrap());
        assert!(matches!(
            compute_slices(&coords(), &request),
            Err(GridError::UnrecognizedSelector(_))
        ));
    }

    #[test]
    fn test_empty_intersection_yields_empty_ranges() {
        let request = SelectionRequest::new().range("lat", 500.0, 600.0);
        let slices = compute_slices(&coords(), &request).unwrap();
        assert_eq!(slices[0].start, slices[0].end);
    }
}
