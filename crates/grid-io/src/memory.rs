//! In-memory source and sink.
//!
//! `MemorySource` stands in for the format-specific readers the core treats
//! as external collaborators; it exercises the same contract (axes first,
//! slice, then materialize, fill value to NaN) against arrays that are
//! already resident.

use ndarray::{ArrayD, Slice};
use tracing::debug;

use grid_core::{CoordinateSet, Grid, GridError, GridResult};
use grid_select::{compute_slices, SelectionRequest};

use crate::source::{GridSink, GridSource};

/// An in-memory collection of named variables over one shared coordinate set.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    coords: CoordinateSet,
    variables: Vec<(String, ArrayD<f64>)>,
    fill_value: Option<f64>,
}

impl MemorySource {
    /// Create a source over the given coordinate axes.
    pub fn new(coords: CoordinateSet) -> Self {
        Self {
            coords,
            variables: Vec::new(),
            fill_value: None,
        }
    }

    /// Declare the fill value that marks invalid samples in the stored
    /// arrays; it is substituted with NaN on read.
    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    /// Add a named variable. Its shape must match the coordinate set.
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        data: ArrayD<f64>,
    ) -> GridResult<Self> {
        let name = name.into();
        if self.variables.iter().any(|(n, _)| *n == name) {
            return Err(GridError::DuplicateVariable(name));
        }
        if data.shape() != self.coords.shape().as_slice() {
            return Err(GridError::shape_mismatch(format!(
                "variable '{}' has shape {:?} but the coordinates describe {:?}",
                name,
                data.shape(),
                self.coords.shape()
            )));
        }
        self.variables.push((name, data));
        Ok(self)
    }

    fn resolve<'a>(&'a self, name: Option<&str>) -> GridResult<&'a (String, ArrayD<f64>)> {
        match name {
            Some(n) => self
                .variables
                .iter()
                .find(|(v, _)| v == n)
                .ok_or_else(|| GridError::UnknownVariable(n.to_string())),
            None => match self.variables.as_slice() {
                [single] => Ok(single),
                [] => Err(GridError::UnknownVariable("<empty source>".to_string())),
                many => Err(GridError::AmbiguousVariable(
                    many.iter()
                        .map(|(n, _)| n.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                )),
            },
        }
    }
}

impl GridSource for MemorySource {
    fn axes(&self) -> GridResult<CoordinateSet> {
        Ok(self.coords.clone())
    }

    fn variables(&self) -> Vec<String> {
        self.variables.iter().map(|(n, _)| n.clone()).collect()
    }

    fn read(&self, name: Option<&str>, request: &SelectionRequest) -> GridResult<Grid> {
        let (variable, stored) = self.resolve(name)?;

        // axis metadata first, slices second, payload last
        let ranges = compute_slices(&self.coords, request)?;
        debug!(variable = variable.as_str(), ?ranges, "memory source read");

        let mut data = stored
            .slice_each_axis(|ad| Slice::from(ranges[ad.axis.index()].clone()))
            .to_owned();
        if let Some(fill) = self.fill_value {
            data.mapv_inplace(|v| if v == fill { f64::NAN } else { v });
        }

        let mut coords = CoordinateSet::new();
        for (axis, range) in self.coords.iter().zip(&ranges) {
            coords.insert(axis.slice(range.clone()))?;
        }

        Grid::new(data, coords, variable.clone())
    }
}

/// A sink that captures written grids, for tests and pipelines that end
/// in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    grids: Vec<Grid>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grids written so far, in write order.
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }
}

impl GridSink for MemorySink {
    fn write(&mut self, grid: &Grid) -> GridResult<()> {
        self.grids.push(grid.clone());
        Ok(())
    }
}
