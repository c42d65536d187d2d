//! Basic geometric types shared by the scene model and the drawing primitives.
//!
//! All types here live in *export space*: the Y-down coordinate system of the
//! emitted SVG document. Scene (model) coordinates are Y-up and are converted
//! exactly once through [`Point::from_model`].

/// A 2D point in export space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a model-space coordinate pair into export space.
    ///
    /// X is unchanged, Y is negated.
    pub fn from_model(x: f32, y: f32) -> Self {
        Self::new(x, y).flip_y()
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Mirrors the point across the X axis.
    ///
    /// Applying this twice yields the original point. A zero Y stays
    /// positive zero so it never prints as `-0`.
    pub fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y + 0.0,
        }
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    /// Rotates this point around `center` by `degrees`, following the SVG
    /// `rotate()` convention (positive is clockwise on screen).
    pub fn rotate_around(self, center: Point, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self.sub_point(center);
        Self {
            x: center.x + d.x * cos - d.y * sin,
            y: center.y + d.x * sin + d.y * cos,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// The smaller of the two dimensions
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit extrema.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(min_point: Point, size: Size) -> Self {
        Self {
            min_x: min_point.x,
            min_y: min_point.y,
            max_x: min_point.x + size.width,
            max_y: min_point.y + size.height,
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let initial = Self::new(first.x, first.y, first.x, first.y);
        Some(points.fold(initial, |acc, point| acc.include_point(point)))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the centre of the bounds
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// The four corners, clockwise from the top-left.
    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds so that `point` lies inside.
    pub fn include_point(&self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Expands the bounds by `amount` on every side.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Axis-aligned bounds of this rectangle after rotating it around `center`.
    pub fn rotate_around(&self, center: Point, degrees: f32) -> Self {
        if degrees == 0.0 {
            return *self;
        }
        let rotated = self
            .corners()
            .map(|corner| corner.rotate_around(center, degrees));
        Self::from_points(rotated).unwrap_or(*self)
    }

    /// Returns `true` if `other` lies entirely inside these bounds.
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }
}
