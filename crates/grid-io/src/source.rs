//! Boundary traits between the core and format-specific readers/writers.

use grid_core::{CoordinateSet, Grid, GridResult};
use grid_select::SelectionRequest;

/// A reader of gridded data.
///
/// Implementations must follow the axes-first protocol: load the coordinate
/// metadata, resolve the selection request into index ranges with
/// [`grid_select::compute_slices`], and only then materialize the sliced
/// sub-array from storage. That ordering is what keeps large-file reads
/// proportional to the requested region rather than the full array.
///
/// Any fill-value convention of the underlying format must be converted to
/// NaN before the grid is handed to the core.
pub trait GridSource {
    /// The ordered coordinate axes of the source, without reading payload.
    fn axes(&self) -> GridResult<CoordinateSet>;

    /// Names of the data variables the source exposes.
    fn variables(&self) -> Vec<String>;

    /// Read one variable, sliced by the request.
    ///
    /// `name` may be omitted only when the source exposes a single variable;
    /// with several candidates the caller must disambiguate or the read
    /// fails with an ambiguous-variable error.
    fn read(&self, name: Option<&str>, request: &SelectionRequest) -> GridResult<Grid>;
}

/// A writer of gridded data.
///
/// Implementations receive the grid's ordered axis mapping and data array
/// and must reproduce both; temporal axes are expressed in the target's
/// native time encoding.
pub trait GridSink {
    fn write(&mut self, grid: &Grid) -> GridResult<()>;
}
