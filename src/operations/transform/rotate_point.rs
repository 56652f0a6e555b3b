use crate::error::Result;
use crate::geometry::ColorArc;
use crate::math::rotation::rotate_point;
use crate::math::{Point3, Vector3};
use crate::operations::validate;

/// Rotates a single point about an arc's apex without touching the arc.
///
/// The rotation axis is the normal of the plane through the arc's start,
/// apex and end (+X when they are colinear). Used to preview one picked
/// point under a live rotation.
pub struct RotatePoint<'a> {
    arc: &'a ColorArc,
    point: Point3,
    angle: f64,
}

impl<'a> RotatePoint<'a> {
    /// Creates a new `RotatePoint` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(arc: &'a ColorArc, point: Point3, angle: f64) -> Self {
        Self { arc, point, angle }
    }

    /// Executes the rotation, returning the moved point.
    ///
    /// # Errors
    ///
    /// Returns an error if the point or angle is not finite.
    pub fn execute(&self) -> Result<Point3> {
        validate::finite_point(&self.point, "point")?;
        validate::finite_value(self.angle, "angle")?;

        let axis = self.arc.apex_plane_normal().unwrap_or_else(Vector3::x);
        Ok(rotate_point(&self.point, self.arc.peak(), &axis, self.angle))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::config::ArcSettings;
    use crate::operations::build::BuildArc;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn half_turn_in_arc_plane_swaps_around_apex() {
        let arc = BuildArc::new(p(40.0, 50.0, 20.0), p(60.0, -30.0, 40.0), 0.3, 9)
            .execute(&ArcSettings::default())
            .unwrap();
        let start = *arc.start();
        let moved = RotatePoint::new(&arc, start, PI).execute().unwrap();
        // A half turn in-plane reflects through the apex.
        let expected = arc.peak() + (arc.peak() - start);
        assert_relative_eq!(moved, expected, epsilon = 1e-9);
    }

    #[test]
    fn apex_is_a_fixed_point() {
        let arc = BuildArc::new(p(40.0, 50.0, 20.0), p(60.0, -30.0, 40.0), 0.3, 9)
            .execute(&ArcSettings::default())
            .unwrap();
        let moved = RotatePoint::new(&arc, *arc.peak(), 1.3).execute().unwrap();
        assert_relative_eq!(moved, *arc.peak(), epsilon = 1e-12);
    }

    #[test]
    fn straight_arc_rotates_about_x() {
        let arc = BuildArc::new(p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), 1.0, 3)
            .execute(&ArcSettings::default())
            .unwrap();
        // Peak (0, 1, 0); rotating (0, 2, 0) about +X through it by pi/2 -> (0, 1, 1).
        let moved = RotatePoint::new(&arc, p(0.0, 2.0, 0.0), PI / 2.0)
            .execute()
            .unwrap();
        assert_relative_eq!(moved, p(0.0, 1.0, 1.0), epsilon = 1e-12);
    }
}
