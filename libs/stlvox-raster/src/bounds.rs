//! # Bounding Box
//!
//! Running axis-aligned bounds over grid-space vertices. Each axis is
//! tracked on its own and stays unset until its first sample.

use glam::DVec3;
use serde::Serialize;

/// Closed range covered on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
}

impl AxisRange {
    fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Per-axis running minimum and maximum.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stlvox_raster::BoundingBox;
///
/// let mut bounds = BoundingBox::new();
/// assert!(bounds.is_empty());
/// bounds.merge(DVec3::new(5.0, 0.0, 1.0));
/// bounds.merge(DVec3::new(-2.0, 3.0, 1.0));
/// assert_eq!(bounds.min(), Some(DVec3::new(-2.0, 0.0, 1.0)));
/// assert_eq!(bounds.max(), Some(DVec3::new(5.0, 3.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoundingBox {
    axes: [Option<AxisRange>; 3],
}

impl BoundingBox {
    /// Creates a box with every axis unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the box to include `vertex`.
    ///
    /// An unset axis takes the vertex component as both its min and max.
    pub fn merge(&mut self, vertex: DVec3) {
        for (axis, value) in self.axes.iter_mut().zip(vertex.to_array()) {
            *axis = Some(match *axis {
                Some(range) => range.include(value),
                None => AxisRange::point(value),
            });
        }
    }

    /// Extends the box to cover another box.
    pub fn merge_box(&mut self, other: &BoundingBox) {
        for (axis, theirs) in self.axes.iter_mut().zip(other.axes) {
            *axis = match (*axis, theirs) {
                (Some(ours), Some(theirs)) => Some(ours.union(theirs)),
                (ours, theirs) => ours.or(theirs),
            };
        }
    }

    /// Returns true until the first vertex is merged.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(Option::is_none)
    }

    /// Range covered on axis `index` (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, index: usize) -> Option<AxisRange> {
        self.axes.get(index).copied().flatten()
    }

    /// Minimum corner, once every axis is set.
    pub fn min(&self) -> Option<DVec3> {
        self.corner(|range| range.min)
    }

    /// Maximum corner, once every axis is set.
    pub fn max(&self) -> Option<DVec3> {
        self.corner(|range| range.max)
    }

    fn corner(&self, pick: impl Fn(AxisRange) -> f64) -> Option<DVec3> {
        let [x, y, z] = self.axes;
        Some(DVec3::new(pick(x?), pick(y?), pick(z?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_box_has_no_corners() {
        let bounds = BoundingBox::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.min(), None);
        assert_eq!(bounds.max(), None);
        assert_eq!(bounds.axis(0), None);
    }

    #[test]
    fn first_sample_sets_both_ends() {
        let mut bounds = BoundingBox::new();
        bounds.merge(DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(bounds.min(), bounds.max());
        assert_eq!(
            bounds.axis(1),
            Some(AxisRange {
                min: -2.0,
                max: -2.0
            })
        );
    }

    #[test]
    fn bounds_do_not_depend_on_order() {
        let samples = [
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::new(-2.0, 0.0, 0.0),
            DVec3::new(5.0, 5.0, 5.0),
            DVec3::new(1.0, 2.0, 3.0),
        ];
        let mut forward = BoundingBox::new();
        samples.iter().for_each(|&v| forward.merge(v));
        let mut backward = BoundingBox::new();
        samples.iter().rev().for_each(|&v| backward.merge(v));

        assert_eq!(forward, backward);
        assert_eq!(forward.min(), Some(DVec3::new(-2.0, 0.0, 0.0)));
        assert_eq!(forward.max(), Some(DVec3::new(5.0, 5.0, 5.0)));
    }

    #[test]
    fn merge_box_unions_ranges() {
        let mut left = BoundingBox::new();
        left.merge(DVec3::new(0.0, 0.0, 0.0));
        let mut right = BoundingBox::new();
        right.merge(DVec3::new(-1.0, 4.0, 2.0));

        let mut empty = BoundingBox::new();
        empty.merge_box(&left);
        assert_eq!(empty, left);

        left.merge_box(&right);
        assert_eq!(left.min(), Some(DVec3::new(-1.0, 0.0, 0.0)));
        assert_eq!(left.max(), Some(DVec3::new(0.0, 4.0, 2.0)));

        let before = left;
        left.merge_box(&BoundingBox::new());
        assert_eq!(left, before);
    }

    #[test]
    fn axis_out_of_range_is_none() {
        let mut bounds = BoundingBox::new();
        bounds.merge(DVec3::ONE);
        assert_eq!(bounds.axis(3), None);
    }
}
