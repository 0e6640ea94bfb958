//! Dense N-dimensional grids paired with ordered coordinate axes.

use ndarray::{ArrayD, Axis, IxDyn};
use num_traits::Float;

use crate::coords::CoordinateSet;
use crate::error::{GridError, GridResult};

/// NaN-aware mean of a sequence of floats. NaN if no valid value is present.
pub fn nanmean<F, I>(values: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    let mut sum = F::zero();
    let mut count = 0usize;
    for v in values {
        if !v.is_nan() {
            sum = sum + v;
            count += 1;
        }
    }
    if count == 0 {
        F::nan()
    } else {
        sum / F::from(count).unwrap_or_else(F::nan)
    }
}

/// A dense N-dimensional data array with named, ordered coordinate axes.
///
/// Invalid samples are carried as NaN. Grids are immutable value objects:
/// every transforming operation returns a new grid with freshly allocated
/// data and cloned axes; the source is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: ArrayD<f64>,
    coords: CoordinateSet,
    title: String,
}

impl Grid {
    /// Create a grid, checking that the data shape matches the coordinate
    /// set axis-by-axis in declaration order.
    pub fn new(
        data: ArrayD<f64>,
        coords: CoordinateSet,
        title: impl Into<String>,
    ) -> GridResult<Self> {
        if data.ndim() != coords.len() {
            return Err(GridError::shape_mismatch(format!(
                "data has {} dimensions but {} coordinate axes were given",
                data.ndim(),
                coords.len()
            )));
        }
        for (i, axis) in coords.iter().enumerate() {
            if data.shape()[i] != axis.len() {
                return Err(GridError::shape_mismatch(format!(
                    "axis '{}' has {} values but data dimension {} has length {}",
                    axis.name(),
                    axis.len(),
                    i,
                    data.shape()[i]
                )));
            }
        }
        Ok(Self {
            data,
            coords,
            title: title.into(),
        })
    }

    /// Grid filled with a constant value, shaped after the coordinate set.
    pub fn filled(coords: CoordinateSet, value: f64, title: impl Into<String>) -> Self {
        let shape = coords.shape();
        Self {
            data: ArrayD::from_elem(IxDyn(&shape), value),
            coords,
            title: title.into(),
        }
    }

    /// Zero-filled grid.
    pub fn zeros(coords: CoordinateSet, title: impl Into<String>) -> Self {
        Self::filled(coords, 0.0, title)
    }

    /// One-filled grid.
    pub fn ones(coords: CoordinateSet, title: impl Into<String>) -> Self {
        Self::filled(coords, 1.0, title)
    }

    /// NaN-filled grid (every sample starts invalid).
    pub fn nan(coords: CoordinateSet, title: impl Into<String>) -> Self {
        Self::filled(coords, f64::NAN, title)
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    pub fn coords(&self) -> &CoordinateSet {
        &self.coords
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// NaN-aware mean over all elements. NaN if no valid sample exists.
    pub fn mean(&self) -> f64 {
        nanmean(self.data.iter().copied())
    }

    /// Reduce along a named axis, NaN-aware.
    ///
    /// The result is a new grid with the named axis removed from the
    /// coordinate set and the data reduced along its positional dimension.
    pub fn mean_axis(&self, axis: &str) -> GridResult<Grid> {
        let index = self
            .coords
            .position(axis)
            .ok_or_else(|| GridError::unknown_axis(axis))?;
        let reduced = self
            .data
            .map_axis(Axis(index), |lane| nanmean(lane.iter().copied()));
        Grid::new(reduced, self.coords.without(axis), self.title.clone())
    }

    /// Explicit validity view: the numeric payload unchanged, plus a mask
    /// that is true exactly where the data is invalid (NaN or infinite).
    pub fn masked(&self) -> MaskedGrid {
        MaskedGrid {
            mask: self.data.mapv(|v| !v.is_finite()),
            data: self.data.clone(),
            coords: self.coords.clone(),
            title: self.title.clone(),
        }
    }
}

/// A grid with an explicit valid/invalid bitmap instead of sentinel values.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedGrid {
    /// The numeric payload, unchanged from the source grid.
    pub data: ArrayD<f64>,
    /// True where the corresponding sample is invalid.
    pub mask: ArrayD<bool>,
    /// The source grid's coordinate axes.
    pub coords: CoordinateSet,
    /// The source grid's title.
    pub title: String,
}
