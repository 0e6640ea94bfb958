//! Error types shared by the gridded-data crates.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Primary error type for grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// A reduction or selection named an axis absent from the coordinate set.
    #[error("unknown axis: {0}")]
    UnknownAxis(String),

    /// A requested bound or value cannot be resolved against an axis.
    #[error("range not contained in dataset: {0}")]
    OutOfDomain(String),

    /// A textual preset is not one of the recognized codes, or a selector of
    /// the wrong kind was passed where a predicate is expected.
    #[error("unrecognized selector: {0}")]
    UnrecognizedSelector(String),

    /// The resampler does not implement the requested axis/rule combination.
    #[error("unsupported resample: axis '{axis}' with rule '{rule}'")]
    UnsupportedResample { axis: String, rule: String },

    /// A source exposes several data variables and none was named.
    #[error("ambiguous variable, specify one of: {0}")]
    AmbiguousVariable(String),

    /// A source does not contain the named data variable.
    #[error("variable not found: {0}")]
    UnknownVariable(String),

    /// An axis named in a range request is not monotonically non-decreasing.
    #[error("axis '{0}' is not monotonically non-decreasing")]
    UnsortedAxis(String),

    /// Data shape and coordinate set disagree.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Two axes with the same name in one coordinate set.
    #[error("duplicate axis name: {0}")]
    DuplicateAxis(String),

    /// Two variables with the same name in one source.
    #[error("duplicate variable name: {0}")]
    DuplicateVariable(String),
}

impl GridError {
    /// Create an UnknownAxis error.
    pub fn unknown_axis(name: impl Into<String>) -> Self {
        Self::UnknownAxis(name.into())
    }

    /// Create an OutOfDomain error.
    pub fn out_of_domain(msg: impl Into<String>) -> Self {
        Self::OutOfDomain(msg.into())
    }

    /// Create an UnrecognizedSelector error.
    pub fn unrecognized_selector(msg: impl Into<String>) -> Self {
        Self::UnrecognizedSelector(msg.into())
    }

    /// Create an UnsupportedResample error.
    pub fn unsupported_resample(axis: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::UnsupportedResample {
            axis: axis.into(),
            rule: rule.into(),
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }
}
