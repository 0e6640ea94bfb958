//! Coordinate axes: named one-dimensional arrays of ordered values.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// A scalar drawn from a coordinate axis's value domain.
///
/// Comparisons are only defined within a domain; comparing a number against
/// a timestamp yields `None` and is reported as an out-of-domain error at the
/// slicing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CoordValue {
    /// A numeric coordinate (degrees, meters, pressure levels, ...).
    Number(f64),
    /// A UTC timestamp on a temporal axis.
    Time(DateTime<Utc>),
}

impl CoordValue {
    /// Parse a timestamp from an ISO 8601 string.
    ///
    /// Accepts a full RFC 3339 datetime, a naive datetime (assumed UTC), or
    /// a bare date (midnight UTC).
    pub fn from_iso8601(s: &str) -> GridResult<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Time(dt.with_timezone(&Utc)));
        }

        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self::Time(Utc.from_utc_datetime(&ndt)));
        }

        if let Ok(ndt) =
            NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S")
        {
            return Ok(Self::Time(Utc.from_utc_datetime(&ndt)));
        }

        Err(GridError::out_of_domain(format!(
            "cannot parse '{}' as a timestamp",
            s
        )))
    }
}

impl PartialOrd for CoordValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (CoordValue::Number(a), CoordValue::Number(b)) => a.partial_cmp(b),
            (CoordValue::Time(a), CoordValue::Time(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<f64> for CoordValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<DateTime<Utc>> for CoordValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Time(t)
    }
}

impl fmt::Display for CoordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordValue::Number(v) => write!(f, "{}", v),
            CoordValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

/// The backing values of a coordinate axis, tagged by domain.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValues {
    /// Numeric coordinates.
    Numeric(Vec<f64>),
    /// UTC timestamps.
    Time(Vec<DateTime<Utc>>),
}

impl AxisValues {
    /// Number of values on the axis.
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Numeric(v) => v.len(),
            AxisValues::Time(v) => v.len(),
        }
    }

    /// Check if the axis has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element access.
    pub fn get(&self, index: usize) -> Option<CoordValue> {
        match self {
            AxisValues::Numeric(v) => v.get(index).copied().map(CoordValue::Number),
            AxisValues::Time(v) => v.get(index).copied().map(CoordValue::Time),
        }
    }

    /// Smallest value, scanning the whole array (inputs may be unsorted).
    pub fn min(&self) -> Option<CoordValue> {
        match self {
            AxisValues::Numeric(v) => v
                .iter()
                .copied()
                .fold(None, |acc: Option<f64>, x| match acc {
                    Some(m) if m <= x => Some(m),
                    _ => Some(x),
                })
                .map(CoordValue::Number),
            AxisValues::Time(v) => v.iter().min().copied().map(CoordValue::Time),
        }
    }

    /// Largest value, scanning the whole array.
    pub fn max(&self) -> Option<CoordValue> {
        match self {
            AxisValues::Numeric(v) => v
                .iter()
                .copied()
                .fold(None, |acc: Option<f64>, x| match acc {
                    Some(m) if m >= x => Some(m),
                    _ => Some(x),
                })
                .map(CoordValue::Number),
            AxisValues::Time(v) => v.iter().max().copied().map(CoordValue::Time),
        }
    }

    /// New values covering a contiguous index range.
    pub fn slice(&self, range: Range<usize>) -> AxisValues {
        match self {
            AxisValues::Numeric(v) => AxisValues::Numeric(v[range].to_vec()),
            AxisValues::Time(v) => AxisValues::Time(v[range].to_vec()),
        }
    }

    /// New values picked at the given positions, in the given order.
    pub fn take(&self, indices: &[usize]) -> AxisValues {
        match self {
            AxisValues::Numeric(v) => {
                AxisValues::Numeric(indices.iter().map(|&i| v[i]).collect())
            }
            AxisValues::Time(v) => AxisValues::Time(indices.iter().map(|&i| v[i]).collect()),
        }
    }

    /// Check monotonic non-decreasing order.
    pub fn is_sorted_non_decreasing(&self) -> bool {
        match self {
            AxisValues::Numeric(v) => v.windows(2).all(|w| w[0] <= w[1]),
            AxisValues::Time(v) => v.windows(2).all(|w| w[0] <= w[1]),
        }
    }
}

/// A named, immutable one-dimensional coordinate axis with a unit tag.
///
/// Construction performs no validation beyond type acceptance; the slicing
/// algorithms require monotonically non-decreasing values and validate that
/// with [`CoordinateAxis::validate_sorted`] before binary-searching.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAxis {
    name: String,
    values: AxisValues,
    units: String,
    centered: bool,
}

impl CoordinateAxis {
    /// Create a new coordinate axis.
    pub fn new(
        name: impl Into<String>,
        values: AxisValues,
        units: impl Into<String>,
        centered: bool,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            units: units.into(),
            centered,
        }
    }

    /// Create a numeric axis with cell-centered values.
    pub fn numeric(name: impl Into<String>, values: Vec<f64>, units: impl Into<String>) -> Self {
        Self::new(name, AxisValues::Numeric(values), units, true)
    }

    /// Create a temporal axis with cell-centered values.
    pub fn time(
        name: impl Into<String>,
        values: Vec<DateTime<Utc>>,
        units: impl Into<String>,
    ) -> Self {
        Self::new(name, AxisValues::Time(values), units, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    /// Whether values denote cell centers rather than cell edges.
    pub fn centered(&self) -> bool {
        self.centered
    }

    pub fn values(&self) -> &AxisValues {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether this axis carries timestamps.
    pub fn is_temporal(&self) -> bool {
        matches!(self.values, AxisValues::Time(_))
    }

    pub fn get(&self, index: usize) -> Option<CoordValue> {
        self.values.get(index)
    }

    pub fn min(&self) -> Option<CoordValue> {
        self.values.min()
    }

    pub fn max(&self) -> Option<CoordValue> {
        self.values.max()
    }

    /// New axis covering a contiguous index range, same name/units/centering.
    pub fn slice(&self, range: Range<usize>) -> CoordinateAxis {
        CoordinateAxis {
            name: self.name.clone(),
            values: self.values.slice(range),
            units: self.units.clone(),
            centered: self.centered,
        }
    }

    /// New axis picked at the given positions, same name/units/centering.
    pub fn take(&self, indices: &[usize]) -> CoordinateAxis {
        CoordinateAxis {
            name: self.name.clone(),
            values: self.values.take(indices),
            units: self.units.clone(),
            centered: self.centered,
        }
    }

    /// Fail fast on unsorted values before any binary search touches them.
    pub fn validate_sorted(&self) -> GridResult<()> {
        if self.values.is_sorted_non_decreasing() {
            Ok(())
        } else {
            Err(GridError::UnsortedAxis(self.name.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(n: usize) -> Vec<DateTime<Utc>> {
        (0..n)
            .map(|i| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(i as i64))
            .collect()
    }

    #[test]
    fn test_numeric_axis_min_max() {
        let axis = CoordinateAxis::numeric("lat", vec![-30.0, 0.0, 30.0, 60.0], "degrees_north");
        assert_eq!(axis.len(), 4);
        assert_eq!(axis.min(), Some(CoordValue::Number(-30.0)));
        assert_eq!(axis.max(), Some(CoordValue::Number(60.0)));
        assert!(!axis.is_temporal());
    }

    #[test]
    fn test_time_axis_min_max() {
        let axis = CoordinateAxis::time("time", hours(5), "hours since 2024-01-01");
        assert!(axis.is_temporal());
        assert_eq!(axis.min(), axis.get(0));
        assert_eq!(axis.max(), axis.get(4));
    }

    #[test]
    fn test_slice_and_take_preserve_metadata() {
        let axis = CoordinateAxis::new(
            "lon",
            AxisValues::Numeric(vec![0.0, 1.0, 2.0, 3.0]),
            "degrees_east",
            false,
        );

        let sliced = axis.slice(1..3);
        assert_eq!(sliced.name(), "lon");
        assert_eq!(sliced.units(), "degrees_east");
        assert!(!sliced.centered());
        assert_eq!(sliced.values(), &AxisValues::Numeric(vec![1.0, 2.0]));

        let taken = axis.take(&[0, 3]);
        assert_eq!(taken.values(), &AxisValues::Numeric(vec![0.0, 3.0]));
    }

    #[test]
    fn test_validate_sorted() {
        let sorted = CoordinateAxis::numeric("x", vec![1.0, 1.0, 2.0], "m");
        assert!(sorted.validate_sorted().is_ok());

        let unsorted = CoordinateAxis::numeric("x", vec![2.0, 1.0, 3.0], "m");
        assert!(matches!(
            unsorted.validate_sorted(),
            Err(GridError::UnsortedAxis(name)) if name == "x"
        ));
    }

    #[test]
    fn test_coord_value_cross_domain_comparison() {
        let n = CoordValue::Number(1.0);
        let t = CoordValue::Time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(n.partial_cmp(&t), None);
        assert!(CoordValue::Number(1.0) < CoordValue::Number(2.0));
    }

    #[test]
    fn test_coord_value_from_iso8601() {
        let full = CoordValue::from_iso8601("2024-01-15T12:00:00Z").unwrap();
        let naive = CoordValue::from_iso8601("2024-01-15T12:00:00").unwrap();
        assert_eq!(full, naive);

        let date_only = CoordValue::from_iso8601("2024-01-15").unwrap();
        assert_eq!(
            date_only,
            CoordValue::Time(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );

        assert!(CoordValue::from_iso8601("not a date").is_err());
    }

    #[test]
    fn test_coord_value_serde_roundtrip() {
        let v = CoordValue::Number(42.5);
        let json = serde_json::to_string(&v).unwrap();
        let back: CoordValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
