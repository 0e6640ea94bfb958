//! Selection requests: per-axis filters over a grid's coordinate space.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use grid_core::{CoordValue, GridError, GridResult};

/// Elementwise predicate over a temporal axis's timestamps.
pub type TimePredicate = Box<dyn Fn(DateTime<Utc>) -> bool>;

/// Named month/season selection codes for temporal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetCode {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    /// March-April-May
    Mam,
    /// June-July-August
    Jja,
    /// September-October-November
    Son,
    /// December-January-February
    Djf,
}

impl PresetCode {
    /// Parse a three-letter code (case-insensitive). Anything outside the
    /// fixed set is an unrecognized selector.
    pub fn parse(code: &str) -> GridResult<Self> {
        match code.to_ascii_uppercase().as_str() {
            "JAN" => Ok(Self::Jan),
            "FEB" => Ok(Self::Feb),
            "MAR" => Ok(Self::Mar),
            "APR" => Ok(Self::Apr),
            "MAY" => Ok(Self::May),
            "JUN" => Ok(Self::Jun),
            "JUL" => Ok(Self::Jul),
            "AUG" => Ok(Self::Aug),
            "SEP" => Ok(Self::Sep),
            "OCT" => Ok(Self::Oct),
            "NOV" => Ok(Self::Nov),
            "DEC" => Ok(Self::Dec),
            "MAM" => Ok(Self::Mam),
            "JJA" => Ok(Self::Jja),
            "SON" => Ok(Self::Son),
            "DJF" => Ok(Self::Djf),
            _ => Err(GridError::unrecognized_selector(code)),
        }
    }

    /// Calendar months matched by this code.
    pub fn months(self) -> &'static [u32] {
        match self {
            Self::Jan => &[1],
            Self::Feb => &[2],
            Self::Mar => &[3],
            Self::Apr => &[4],
            Self::May => &[5],
            Self::Jun => &[6],
            Self::Jul => &[7],
            Self::Aug => &[8],
            Self::Sep => &[9],
            Self::Oct => &[10],
            Self::Nov => &[11],
            Self::Dec => &[12],
            Self::Mam => &[3, 4, 5],
            Self::Jja => &[6, 7, 8],
            Self::Son => &[9, 10, 11],
            Self::Djf => &[12, 1, 2],
        }
    }

    /// Whether a timestamp falls in a month matched by this code.
    pub fn matches(self, t: DateTime<Utc>) -> bool {
        self.months().contains(&t.month())
    }
}

/// One axis's filter inside a [`SelectionRequest`].
///
/// `Range` and `Value` are contiguous selections resolved by
/// [`compute_slices`](crate::compute_slices); `Predicate` and `Preset` are
/// elementwise selections resolved by [`select`](crate::select) and only
/// supported on temporal axes.
pub enum AxisSelection {
    /// `(lower, upper)` bounds in the axis's own value domain.
    Range(CoordValue, CoordValue),
    /// A single scalar, treated as a degenerate zero-width range expanded by
    /// a tiny epsilon (1e-6 for numeric axes, one second for temporal axes).
    /// The fixed increment is a compatibility approximation; for calendar
    /// axes a bare date matches only samples within one second of midnight.
    Value(CoordValue),
    /// Elementwise predicate over timestamps.
    Predicate(TimePredicate),
    /// Named month/season code.
    Preset(PresetCode),
}

impl AxisSelection {
    /// Range selection from anything convertible to coordinate values.
    pub fn range(lower: impl Into<CoordValue>, upper: impl Into<CoordValue>) -> Self {
        Self::Range(lower.into(), upper.into())
    }

    /// Single-value selection.
    pub fn value(v: impl Into<CoordValue>) -> Self {
        Self::Value(v.into())
    }

    /// Predicate selection from a closure over timestamps.
    pub fn predicate(f: impl Fn(DateTime<Utc>) -> bool + 'static) -> Self {
        Self::Predicate(Box::new(f))
    }

    /// Preset selection from a textual code; fails on unknown codes.
    pub fn preset(code: &str) -> GridResult<Self> {
        Ok(Self::Preset(PresetCode::parse(code)?))
    }
}

impl fmt::Debug for AxisSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(lo, hi) => write!(f, "Range({}, {})", lo, hi),
            Self::Value(v) => write!(f, "Value({})", v),
            Self::Predicate(_) => write!(f, "Predicate(..)"),
            Self::Preset(code) => write!(f, "Preset({:?})", code),
        }
    }
}

/// A per-axis selection request, keyed by axis name.
///
/// Axes not named in the request keep their full extent. Built fluently:
///
/// ```
/// use grid_select::SelectionRequest;
///
/// let request = SelectionRequest::new()
///     .range("lat", 30.0, 60.0)
///     .value("lon", 11.25);
/// ```
#[derive(Debug, Default)]
pub struct SelectionRequest {
    entries: Vec<(String, AxisSelection)>,
}

impl SelectionRequest {
    /// Empty request (selects every axis in full).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter for the named axis.
    pub fn with(mut self, axis: impl Into<String>, selection: AxisSelection) -> Self {
        self.entries.push((axis.into(), selection));
        self
    }

    /// Add a `(lower, upper)` range filter.
    pub fn range(
        self,
        axis: impl Into<String>,
        lower: impl Into<CoordValue>,
        upper: impl Into<CoordValue>,
    ) -> Self {
        self.with(axis, AxisSelection::range(lower, upper))
    }

    /// Add a single-value filter.
    pub fn value(self, axis: impl Into<String>, v: impl Into<CoordValue>) -> Self {
        self.with(axis, AxisSelection::value(v))
    }

    /// Look up the filter for an axis, if any.
    pub fn get(&self, axis: &str) -> Option<&AxisSelection> {
        self.entries
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, sel)| sel)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisSelection)> {
        self.entries.iter().map(|(name, sel)| (name.as_str(), sel))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_preset_parse_known_codes() {
        assert_eq!(PresetCode::parse("JAN").unwrap(), PresetCode::Jan);
        assert_eq!(PresetCode::parse("djf").unwrap(), PresetCode::Djf);
        assert_eq!(PresetCode::Jja.months(), &[6, 7, 8]);
    }

    #[test]
    fn test_preset_parse_unknown_code() {
        assert!(matches!(
            PresetCode::parse("FOO"),
            Err(GridError::UnrecognizedSelector(code)) if code == "FOO"
        ));
    }

    #[test]
    fn test_preset_matches_wraparound_season() {
        let dec = Utc.with_ymd_and_hms(2023, 12, 15, 0, 0, 0).unwrap();
        let feb = Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap();
        let jul = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();
        assert!(PresetCode::Djf.matches(dec));
        assert!(PresetCode::Djf.matches(feb));
        assert!(!PresetCode::Djf.matches(jul));
    }

    #[test]
    fn test_preset_serde_roundtrip() {
        let json = serde_json::to_string(&PresetCode::Son).unwrap();
        let back: PresetCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PresetCode::Son);
    }

    #[test]
    fn test_request_lookup() {
        let request = SelectionRequest::new()
            .range("lat", 30.0, 60.0)
            .value("lon", 11.25);
        assert!(request.get("lat").is_some());
        assert!(request.get("time").is_none());
        assert_eq!(request.iter().count(), 2);
    }
}
