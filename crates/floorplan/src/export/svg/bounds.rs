//! Running bounding box over every emitted primitive.

use floorplan_core::geometry::{Bounds, Point};

/// Four running extrema, starting from the empty (+∞/−∞) sentinel.
///
/// # Examples
///
/// ```
/// # use floorplan::export::svg::BoundsAccumulator;
/// # use floorplan_core::geometry::Bounds;
/// let mut accumulator = BoundsAccumulator::new();
/// assert!(accumulator.is_empty());
///
/// accumulator.include(Bounds::new(-10.0, -10.0, 10.0, 10.0));
/// let framed = accumulator.finish(Bounds::new(0.0, 0.0, 800.0, 600.0), 50.0);
/// assert_eq!(framed, Bounds::new(-60.0, -60.0, 60.0, 60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAccumulator {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grows the extrema to contain `bounds`.
    pub fn include(&mut self, bounds: Bounds) {
        self.min_x = self.min_x.min(bounds.min_x());
        self.min_y = self.min_y.min(bounds.min_y());
        self.max_x = self.max_x.max(bounds.max_x());
        self.max_y = self.max_y.max(bounds.max_y());
    }

    pub fn include_point(&mut self, point: Point) {
        self.include(Bounds::new(point.x(), point.y(), point.x(), point.y()));
    }

    /// Returns `true` while nothing has been included.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// The accumulated content bounds, if anything was included.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.is_empty() {
            None
        } else {
            Some(Bounds::new(self.min_x, self.min_y, self.max_x, self.max_y))
        }
    }

    /// Content bounds (or `default_canvas` when empty) grown by `margin` on every side.
    pub fn finish(&self, default_canvas: Bounds, margin: f32) -> Bounds {
        self.bounds().unwrap_or(default_canvas).expand(margin)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_uses_default_canvas() {
        let accumulator = BoundsAccumulator::new();
        assert!(accumulator.bounds().is_none());
        assert_eq!(
            accumulator.finish(Bounds::new(0.0, 0.0, 800.0, 600.0), 50.0),
            Bounds::new(-50.0, -50.0, 850.0, 650.0)
        );
    }

    #[test]
    fn test_single_point_is_not_empty() {
        let mut accumulator = BoundsAccumulator::new();
        accumulator.include_point(Point::new(3.0, -4.0));
        assert_eq!(accumulator.bounds(), Some(Bounds::new(3.0, -4.0, 3.0, -4.0)));
    }

    #[test]
    fn test_include_merges() {
        let mut accumulator = BoundsAccumulator::new();
        accumulator.include(Bounds::new(0.0, 0.0, 10.0, 10.0));
        accumulator.include(Bounds::new(-5.0, 2.0, 3.0, 20.0));
        assert_eq!(accumulator.bounds(), Some(Bounds::new(-5.0, 0.0, 10.0, 20.0)));
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (-1e4f32..1e4, -1e4f32..1e4, 0f32..1e3, 0f32..1e3)
            .prop_map(|(x, y, width, height)| Bounds::new(x, y, x + width, y + height))
    }

    proptest! {
        #[test]
        fn prop_accumulated_bounds_contain_every_input(
            inputs in prop::collection::vec(bounds_strategy(), 1..20)
        ) {
            let mut accumulator = BoundsAccumulator::new();
            for bounds in &inputs {
                accumulator.include(*bounds);
            }
            let total = accumulator.bounds().unwrap();
            for bounds in &inputs {
                prop_assert!(total.contains(bounds));
            }
        }

        #[test]
        fn prop_margin_is_added_on_every_side(
            bounds in bounds_strategy(),
            margin in 0f32..200.0
        ) {
            let mut accumulator = BoundsAccumulator::new();
            accumulator.include(bounds);
            let framed = accumulator.finish(Bounds::new(0.0, 0.0, 800.0, 600.0), margin);
            prop_assert_eq!(framed, bounds.expand(margin));
        }
    }
}
