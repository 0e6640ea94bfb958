//! Temporal resampling of gridded datasets.
//!
//! Drives the elementwise selection and reduction primitives repeatedly to
//! aggregate a grid's time axis onto a coarser calendar sequence. Only the
//! monthly rule on the `"time"` axis is implemented.

pub mod monthly;

pub use monthly::{resample, MONTHLY_RULE, TIME_AXIS};
