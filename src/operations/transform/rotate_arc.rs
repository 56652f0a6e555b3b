use crate::error::Result;
use crate::geometry::{Anchor, ColorArc};
use crate::math::basis::normalized;
use crate::math::rotation::AxisRotation;
use crate::math::Vector3;
use crate::operations::validate;

/// Rotates a whole arc, returning a new one.
///
/// - [`Anchor::Chord`]: spins the arc about its chord line. Both endpoints
///   and the axis stay put; the plane of curvature turns.
/// - [`Anchor::Apex`]: pivots the arc on its apex, about the normal of the
///   plane through start, apex and end. The endpoints move and the chord
///   axis is recomputed from them.
pub struct RotateArc<'a> {
    arc: &'a ColorArc,
    angle: f64,
}

impl<'a> RotateArc<'a> {
    /// Creates a new `RotateArc` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(arc: &'a ColorArc, angle: f64) -> Self {
        Self { arc, angle }
    }

    /// Executes the rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is not finite.
    pub fn execute(&self) -> Result<ColorArc> {
        validate::finite_value(self.angle, "angle")?;
        Ok(match self.arc.anchor() {
            Anchor::Chord => spin_about_chord(self.arc, self.angle),
            Anchor::Apex { .. } => pivot_on_apex(self.arc, self.angle),
        })
    }
}

fn spin_about_chord(arc: &ColorArc, angle: f64) -> ColorArc {
    if arc.is_degenerate() {
        return arc.clone();
    }
    let start = *arc.start();
    let end = *arc.end();
    let rotation = AxisRotation::new(*arc.axis(), angle);

    let mut polyline = rotation.rotate_all(arc.polyline(), &start);
    let last = polyline.len() - 1;
    polyline[0] = start;
    polyline[last] = end;
    let peak = rotation.rotate_about(arc.peak(), &start);

    ColorArc::from_parts(polyline, *arc.axis(), peak, arc.anchor())
}

fn pivot_on_apex(arc: &ColorArc, angle: f64) -> ColorArc {
    let peak = *arc.peak();
    let normal = arc.apex_plane_normal().unwrap_or_else(Vector3::x);
    let rotation = AxisRotation::new(normal, angle);

    let polyline = rotation.rotate_all(arc.polyline(), &peak);
    let chord = polyline[polyline.len() - 1] - polyline[0];
    let axis = normalized(&chord).unwrap_or_else(|| rotation.rotate_vector(arc.axis()));

    ColorArc::from_parts(polyline, axis, peak, arc.anchor())
}
