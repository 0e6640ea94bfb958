//! Monthly aggregation: per-month predicate selection plus time-mean.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use ndarray::{ArrayD, Axis, IxDyn};
use tracing::debug;

use grid_core::{AxisValues, CoordinateAxis, CoordinateSet, Grid, GridError, GridResult};
use grid_select::{select, AxisSelection};

/// The only axis name the resampler accepts.
pub const TIME_AXIS: &str = "time";

/// The only aggregation rule the resampler accepts.
pub const MONTHLY_RULE: &str = "monthly";

/// Aggregate a grid's time axis into calendar months.
///
/// Only `axis = "time"` with `rule = "monthly"` is implemented; anything
/// else is an unsupported-resample failure. The time axis must exist, carry
/// timestamps, and be the grid's leading dimension.
///
/// The output time axis is the sequence of calendar month starts spanning
/// the source axis's min..=max. Each output slab is the NaN-aware time-mean
/// of the source timesteps falling in that month; a month with no source
/// timesteps stays all-NaN (the output is NaN-prefilled), which is a valid
/// degenerate result rather than an error.
pub fn resample(grid: &Grid, axis: &str, rule: &str) -> GridResult<Grid> {
    if axis != TIME_AXIS || rule != MONTHLY_RULE {
        return Err(GridError::unsupported_resample(axis, rule));
    }

    let position = grid
        .coords()
        .position(TIME_AXIS)
        .ok_or_else(|| GridError::unknown_axis(TIME_AXIS))?;
    if position != 0 {
        return Err(GridError::unsupported_resample(
            format!("{} (must be the leading dimension)", TIME_AXIS),
            rule,
        ));
    }
    let time_axis = grid
        .coords()
        .get(TIME_AXIS)
        .ok_or_else(|| GridError::unknown_axis(TIME_AXIS))?;
    let times = match time_axis.values() {
        AxisValues::Time(times) => times,
        AxisValues::Numeric(_) => {
            return Err(GridError::unsupported_resample(
                format!("{} (axis does not carry timestamps)", TIME_AXIS),
                rule,
            ))
        }
    };

    let starts = match (times.iter().min(), times.iter().max()) {
        (Some(&min), Some(&max)) => month_starts(min, max),
        _ => Vec::new(),
    };
    debug!(months = starts.len(), timesteps = times.len(), "monthly resample");

    let mut shape: Vec<usize> = grid.shape().to_vec();
    shape[0] = starts.len();
    let mut data = ArrayD::from_elem(IxDyn(&shape), f64::NAN);

    for (slot, start) in starts.iter().enumerate() {
        let (year, month) = (start.year(), start.month());
        let selector =
            AxisSelection::predicate(move |t| t.year() == year && t.month() == month);
        let sub = select(grid, TIME_AXIS, &selector)?;
        if sub.shape()[0] == 0 {
            continue; // gap month stays NaN
        }
        let reduced = sub.mean_axis(TIME_AXIS)?;
        data.index_axis_mut(Axis(0), slot).assign(reduced.data());
    }

    let mut coords = CoordinateSet::new();
    coords.insert(CoordinateAxis::new(
        TIME_AXIS,
        AxisValues::Time(starts),
        time_axis.units(),
        false,
    ))?;
    for ax in grid.coords().iter().skip(1) {
        coords.insert(ax.clone())?;
    }

    Grid::new(data, coords, grid.title())
}

/// Calendar month starts from `min`'s month through `max`'s month inclusive.
fn month_starts(min: DateTime<Utc>, max: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut out = Vec::new();
    let mut year = min.year();
    let mut month = min.month();
    loop {
        out.push(Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap());
        if year == max.year() && month == max.month() {
            break;
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    out
}
