//! Geometric primitives
//!
//! Minimal 2D types for gesture handling and hit testing. Every interactive
//! affordance in this system is a circle, so circular containment is the
//! only hit-test shape provided.

/// A point in 2D space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`
    pub fn offset_from(&self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// A circle, used for hit testing the counter and button affordances
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies inside (or on) the circle
    pub fn contains(&self, point: Point) -> bool {
        point.offset_from(self.center).length() <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 1.0);
        let v = a.offset_from(b);
        assert_eq!(v, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Point::new(10.0, 10.0), 5.0);

        assert!(circle.contains(Point::new(10.0, 10.0)));
        assert!(circle.contains(Point::new(13.0, 14.0))); // distance 5.0, on the rim
        assert!(!circle.contains(Point::new(10.0, 15.1)));
    }
}
