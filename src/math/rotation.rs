//! Axis-angle rotation (Rodrigues' formula).
//!
//! `v' = v cos(a) + (k x v) sin(a) + k (k . v) (1 - cos(a))` for a unit axis `k`.

use super::{Point3, Vector3};

/// Precomputed rotation about a unit axis.
///
/// Evaluates the trigonometry once so that rotating a whole polyline costs
/// one cross and one dot product per point.
#[derive(Debug, Clone, Copy)]
pub struct AxisRotation {
    axis: Vector3,
    cos: f64,
    sin: f64,
}

impl AxisRotation {
    /// Creates a rotation about `axis` by `angle` radians.
    ///
    /// `axis` must already be unit length.
    #[must_use]
    pub fn new(axis: Vector3, angle: f64) -> Self {
        Self {
            axis,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Returns the rotation axis.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Rotates a free vector.
    #[must_use]
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let k = &self.axis;
        v * self.cos + k.cross(v) * self.sin + k * (k.dot(v) * (1.0 - self.cos))
    }

    /// Rotates `point` about the line through `pivot` along the axis.
    #[must_use]
    pub fn rotate_about(&self, point: &Point3, pivot: &Point3) -> Point3 {
        pivot + self.rotate_vector(&(point - pivot))
    }

    /// Rotates every point about the line through `pivot`.
    #[must_use]
    pub fn rotate_all(&self, points: &[Point3], pivot: &Point3) -> Vec<Point3> {
        points.iter().map(|p| self.rotate_about(p, pivot)).collect()
    }
}

/// Rotates a single point about the line through `pivot` along unit `axis`.
#[must_use]
pub fn rotate_point(point: &Point3, pivot: &Point3, axis: &Vector3, angle: f64) -> Point3 {
    AxisRotation::new(*axis, angle).rotate_about(point, pivot)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quarter_turn_about_z() {
        let r = AxisRotation::new(Vector3::z(), FRAC_PI_2);
        let v = r.rotate_vector(&Vector3::x());
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_offset_pivot() {
        // (2, 0, 0) about the vertical line through (1, 0, 0) by pi -> (0, 0, 0)
        let p = rotate_point(
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Vector3::z(),
            PI,
        );
        assert_relative_eq!(p, Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn points_on_axis_are_fixed() {
        let pivot = Point3::new(1.0, 2.0, 3.0);
        let axis = Vector3::new(1.0, 1.0, 0.0).normalize();
        let on_axis = pivot + axis * 5.0;
        let rotated = rotate_point(&on_axis, &pivot, &axis, 1.234);
        assert_relative_eq!(rotated, on_axis, epsilon = 1e-12);
    }

    #[test]
    fn matches_nalgebra_rotation() {
        let axis = Vector3::new(0.3, -0.5, 0.8).normalize();
        let angle = 0.77;
        let v = Vector3::new(1.5, 2.0, -0.25);
        let ours = AxisRotation::new(axis, angle).rotate_vector(&v);
        let reference =
            nalgebra::Rotation3::from_axis_angle(&nalgebra::Unit::new_normalize(axis), angle) * v;
        assert_relative_eq!(ours, reference, epsilon = 1e-12);
    }

    #[test]
    fn rotate_all_preserves_order_and_length() {
        let pts = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        let out = AxisRotation::new(Vector3::z(), FRAC_PI_2).rotate_all(&pts, &Point3::origin());
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out[1], Point3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}
