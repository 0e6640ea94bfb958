//! Reader/writer boundary for gridded datasets.
//!
//! Format-specific readers (HDF5, netCDF, rasters) live outside this
//! workspace; what they owe the core is a single contract, captured by
//! [`GridSource`]: an ordered axis-name → coordinate-array mapping with
//! units and centering, a dense data array, and a fill-value convention
//! resolved to NaN. Reads are sliced before materialization — axis metadata
//! is loaded first, the coordinate slicer turns the selection request into
//! index ranges, and only the requested sub-array is ever read.
//!
//! [`MemorySource`] and [`MemorySink`] implement the contract over resident
//! arrays for tests and in-process pipelines.

pub mod memory;
pub mod source;

pub use memory::{MemorySink, MemorySource};
pub use source::{GridSink, GridSource};
