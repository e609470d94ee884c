//! Projection of points and sizes onto a single [`Axis`].

use crate::{
    direction::Axis,
    geometry::{Point, Size},
};

/// Magnitude of `size` along `axis`: the width for [`Axis::X`], the height for
/// [`Axis::Y`].
pub fn projection(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::X => size.width,
        Axis::Y => size.height,
    }
}

/// Coordinate of `point` along `axis`.
pub fn value(point: Point, axis: Axis) -> f64 {
    match axis {
        Axis::X => point.x,
        Axis::Y => point.y,
    }
}

impl Size {
    /// See [`projection`].
    pub fn projection(self, axis: Axis) -> f64 {
        projection(self, axis)
    }
}

impl Point {
    /// See [`value`].
    pub fn value_on(self, axis: Axis) -> f64 {
        value(self, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_picks_dimension() {
        let size = Size::new(200.0, 44.0);
        assert_eq!(projection(size, Axis::X), 200.0);
        assert_eq!(projection(size, Axis::Y), 44.0);
        assert_eq!(size.projection(Axis::X.counterpart()), 44.0);
    }

    #[test]
    fn test_value_picks_coordinate() {
        let point = Point::new(150.0, -3.0);
        assert_eq!(value(point, Axis::X), 150.0);
        assert_eq!(point.value_on(Axis::Y), -3.0);
    }
}
