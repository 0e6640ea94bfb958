//! Insertion-ordered mapping from axis name to coordinate axis.
//!
//! Axis declaration order determines dimension-to-axis correspondence in a
//! grid, so iteration order must be the insertion order bit-for-bit. This is
//! an explicit ordered structure, not a hash map.

use crate::axis::CoordinateAxis;
use crate::error::{GridError, GridResult};

/// The ordered set of coordinate axes of a grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSet {
    axes: Vec<CoordinateAxis>,
}

impl CoordinateSet {
    /// Create an empty coordinate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from axes in declaration order. Names must be unique.
    pub fn from_axes(axes: Vec<CoordinateAxis>) -> GridResult<Self> {
        let mut set = Self::new();
        for axis in axes {
            set.insert(axis)?;
        }
        Ok(set)
    }

    /// Append an axis as the next dimension.
    pub fn insert(&mut self, axis: CoordinateAxis) -> GridResult<()> {
        if self.contains(axis.name()) {
            return Err(GridError::DuplicateAxis(axis.name().to_string()));
        }
        self.axes.push(axis);
        Ok(())
    }

    /// Look up an axis by name.
    pub fn get(&self, name: &str) -> Option<&CoordinateAxis> {
        self.axes.iter().find(|a| a.name() == name)
    }

    /// Positional dimension index of the named axis.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of axes (= grid dimensionality).
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CoordinateAxis> {
        self.axes.iter()
    }

    /// Axis names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name())
    }

    /// Axis lengths in declaration order (the expected data shape).
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.len()).collect()
    }

    /// New set with the named axis removed, order of the rest preserved.
    pub fn without(&self, name: &str) -> CoordinateSet {
        CoordinateSet {
            axes: self
                .axes
                .iter()
                .filter(|a| a.name() != name)
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a CoordinateAxis;
    type IntoIter = std::slice::Iter<'a, CoordinateAxis>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes() -> CoordinateSet {
        CoordinateSet::from_axes(vec![
            CoordinateAxis::numeric("time", vec![0.0, 1.0, 2.0], "days"),
            CoordinateAxis::numeric("lat", vec![-45.0, 0.0, 45.0, 90.0], "degrees_north"),
            CoordinateAxis::numeric("lon", vec![0.0, 90.0], "degrees_east"),
        ])
        .unwrap()
    }

    #[test]
    fn test_order_is_insertion_order() {
        let coords = axes();
        let names: Vec<&str> = coords.names().collect();
        assert_eq!(names, vec!["time", "lat", "lon"]);
        assert_eq!(coords.shape(), vec![3, 4, 2]);
        assert_eq!(coords.position("lat"), Some(1));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut coords = axes();
        let dup = CoordinateAxis::numeric("lat", vec![1.0], "degrees_north");
        assert!(matches!(
            coords.insert(dup),
            Err(GridError::DuplicateAxis(name)) if name == "lat"
        ));
    }

    #[test]
    fn test_without_preserves_remaining_order() {
        let coords = axes().without("lat");
        let names: Vec<&str> = coords.names().collect();
        assert_eq!(names, vec!["time", "lon"]);
    }
}
