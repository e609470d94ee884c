//! Local coordinate geometry for the slyder control.
//!
//! This module provides the points, displacement vectors and sizes that touch
//! events and rendering surfaces exchange. All values are `f64` and live in the
//! control's local coordinate space.
//!
//! # Key Types
//!
//! - [`Point`] - A location inside (or outside) the control, e.g. a touch
//! - [`Vector`] - A displacement between two points
//! - [`Size`] - The extent of the control or of one of its parts
//!
//! # Coordinate System
//!
//! The coordinate system uses:
//! - Origin (0, 0) at the top-left corner of the control
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed; a finger may leave the control while a
//!   gesture is still being tracked
//!
//! # Example
//!
//! ```
//! use slyder_ui::geometry::{Point, Size, Vector};
//!
//! let start = Point::new(10.0, 0.0);
//! let current = Point::new(60.0, 4.0);
//!
//! // Subtracting two points yields the displacement between them.
//! let translation: Vector = current - start;
//! assert_eq!(translation, Vector::new(50.0, 4.0));
//!
//! let bounds = Size::new(200.0, 44.0);
//! assert!(bounds.contains(current));
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A location in the control's local coordinate space.
///
/// # Examples
///
/// ```
/// use slyder_ui::geometry::Point;
///
/// let point = Point::new(100.0, 20.0);
/// let moved = point.offset(-10.0, 5.0);
/// assert_eq!(moved, Point::new(90.0, 25.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point from x and y coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offsets the point by the given deltas.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Interprets the point as a displacement from the origin.
    ///
    /// ```
    /// use slyder_ui::geometry::{Point, Vector};
    ///
    /// assert_eq!(Point::new(3.0, -4.0).to_vector(), Vector::new(3.0, -4.0));
    /// ```
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Returns `true` when both coordinates are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }
}

/// A displacement in the control's local coordinate space.
///
/// Vectors are what a gesture produces between its first touch and its latest
/// movement.
///
/// # Examples
///
/// ```
/// use slyder_ui::geometry::Vector;
///
/// let translation = Vector::new(30.0, -40.0);
/// assert_eq!(translation.length(), 50.0);
/// assert_eq!(-translation, Vector::new(-30.0, 40.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// The zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Creates a new vector from its components.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the vector.
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Returns `true` when both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// The extent of a rectangular area, anchored at the origin.
///
/// # Examples
///
/// ```
/// use slyder_ui::geometry::Size;
///
/// let size = Size::new(200.0, 44.0);
/// assert_eq!(size.scaled(0.5, 2.0), Size::new(100.0, 88.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The horizontal extent.
    pub width: f64,
    /// The vertical extent.
    pub height: f64,
}

impl Size {
    /// An empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size from width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scales the width and height independently.
    pub fn scaled(self, width_factor: f64, height_factor: f64) -> Self {
        Self {
            width: self.width * width_factor,
            height: self.height * height_factor,
        }
    }

    /// Returns `true` when the point lies inside the half-open rectangle
    /// `[0, width) x [0, height)`.
    pub fn contains(self, point: Point) -> bool {
        let within_x = point.x >= 0.0 && point.x < self.width;
        let within_y = point.y >= 0.0 && point.y < self.height;
        within_x && within_y
    }

    /// Returns `true` when either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.dx;
        self.y -= rhs.dy;
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Point::new(value[0], value[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Vector::new(dx, dy)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::new(width, height)
    }
}
