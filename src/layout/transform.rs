//! Rotation utilities for placing and orienting wheel items.
//!
//! ## Rotation Convention
//!
//! Rotation uses the SVG convention: clockwise positive angles in a y-down
//! coordinate system.
//! - 0° = no rotation
//! - 90° = rotated clockwise (up becomes right)
//! - 180° = upside down
//! - 270° = rotated counter-clockwise (up becomes left)
//!
//! The wheel engine rotates the "up" unit vector `(0, -1)` by each item's angle
//! to find the direction from the wheel center to the item center, so an item
//! that is itself rotated by the same angle faces away from the center.

use crate::layout::types::{BoundingBox, Point};

/// Unit vector pointing to 12 o'clock in y-down coordinates
pub const UP: Point = Point { x: 0.0, y: -1.0 };

/// Represents a 2D rotation transformation around a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransform {
    /// Rotation angle in radians (clockwise positive)
    pub angle_radians: f64,
    /// Center point of rotation
    pub center: Point,
}

impl RotationTransform {
    /// Create a new rotation transform from an angle in degrees.
    pub fn new(angle_degrees: f64, center: Point) -> Self {
        Self::from_radians(angle_degrees.to_radians(), center)
    }

    /// Create a new rotation transform from an angle in radians.
    pub fn from_radians(angle_radians: f64, center: Point) -> Self {
        Self {
            angle_radians,
            center,
        }
    }

    /// Rotation angle in degrees
    pub fn angle_degrees(&self) -> f64 {
        self.angle_radians.to_degrees()
    }

    /// Check if this is effectively a no-op (0° rotation).
    pub fn is_identity(&self) -> bool {
        self.angle_radians.abs() < f64::EPSILON
    }

    /// Rotate a vector (ignores the center).
    ///
    /// ```text
    /// x' = x * cos(θ) - y * sin(θ)
    /// y' = x * sin(θ) + y * cos(θ)
    /// ```
    pub fn rotate_vector(&self, v: Point) -> Point {
        if self.is_identity() {
            return v;
        }
        let (sin_a, cos_a) = self.angle_radians.sin_cos();
        Point {
            x: v.x * cos_a - v.y * sin_a,
            y: v.x * sin_a + v.y * cos_a,
        }
    }

    /// Rotate a point around the center.
    pub fn transform_point(&self, point: Point) -> Point {
        let d = self.rotate_vector(Point::new(
            point.x - self.center.x,
            point.y - self.center.y,
        ));
        self.center.offset(d.x, d.y)
    }

    /// Axis-aligned bounds of a rotated box ("loose bounds").
    ///
    /// The 4 corners are rotated and the AABB of the result is returned, which
    /// matches what an SVG/CSS transform would occupy on screen.
    pub fn transform_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        if self.is_identity() {
            return *bounds;
        }

        let corners = [
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.x, bounds.bottom()),
            Point::new(bounds.right(), bounds.bottom()),
        ];
        let rotated = corners.map(|p| self.transform_point(p));

        let min_x = rotated.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = rotated
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = rotated.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = rotated
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);

        BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_rotation() {
        let t = RotationTransform::new(0.0, Point { x: 50.0, y: 50.0 });
        assert!(t.is_identity());

        let p = Point { x: 100.0, y: 0.0 };
        assert_eq!(t.transform_point(p), p);
        assert_eq!(t.rotate_vector(UP), UP);
    }

    #[test]
    fn test_up_rotates_clockwise() {
        // 90° clockwise: 12 o'clock -> 3 o'clock
        let right = RotationTransform::new(90.0, Point::new(0.0, 0.0)).rotate_vector(UP);
        assert!(approx_eq(right.x, 1.0), "x: expected 1.0, got {}", right.x);
        assert!(approx_eq(right.y, 0.0), "y: expected 0.0, got {}", right.y);

        // 180°: 12 o'clock -> 6 o'clock
        let down = RotationTransform::new(180.0, Point::new(0.0, 0.0)).rotate_vector(UP);
        assert!(approx_eq(down.x, 0.0), "x: expected 0.0, got {}", down.x);
        assert!(approx_eq(down.y, 1.0), "y: expected 1.0, got {}", down.y);

        // -90°: 12 o'clock -> 9 o'clock
        let left = RotationTransform::new(-90.0, Point::new(0.0, 0.0)).rotate_vector(UP);
        assert!(approx_eq(left.x, -1.0), "x: expected -1.0, got {}", left.x);
        assert!(approx_eq(left.y, 0.0), "y: expected 0.0, got {}", left.y);
    }

    #[test]
    fn test_rotation_around_non_origin_center() {
        let t = RotationTransform::new(90.0, Point { x: 50.0, y: 50.0 });

        // 50 units right of center ends up 50 units below it
        let result = t.transform_point(Point { x: 100.0, y: 50.0 });
        assert!(approx_eq(result.x, 50.0), "x: expected 50.0, got {}", result.x);
        assert!(approx_eq(result.y, 100.0), "y: expected 100.0, got {}", result.y);
    }

    #[test]
    fn test_degrees_round_trip() {
        let t = RotationTransform::from_radians(std::f64::consts::FRAC_PI_2, Point::new(0.0, 0.0));
        assert!(approx_eq(t.angle_degrees(), 90.0));
    }

    #[test]
    fn test_loose_bounds_90_degrees() {
        let t = RotationTransform::new(90.0, Point { x: 50.0, y: 25.0 });
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let result = t.transform_bounds(&bounds);

        assert!(approx_eq(result.width, 50.0), "width: got {}", result.width);
        assert!(approx_eq(result.height, 100.0), "height: got {}", result.height);
        assert!(approx_eq(result.center().x, 50.0));
        assert!(approx_eq(result.center().y, 25.0));
    }

    #[test]
    fn test_loose_bounds_45_degrees() {
        // A square rotated 45° grows to its diagonal
        let t = RotationTransform::new(45.0, Point { x: 50.0, y: 50.0 });
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let result = t.transform_bounds(&bounds);

        let expected_size = 100.0 * std::f64::consts::SQRT_2;
        assert!(
            (result.width - expected_size).abs() < 0.1,
            "width: expected ~{}, got {}",
            expected_size,
            result.width
        );
        assert!(
            (result.height - expected_size).abs() < 0.1,
            "height: expected ~{}, got {}",
            expected_size,
            result.height
        );
    }
}
