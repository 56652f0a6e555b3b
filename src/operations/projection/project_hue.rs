use crate::error::Result;
use crate::geometry::{Anchor, ColorArc};
use crate::math::rotation::rotate_point;
use crate::math::{Point3, Vector3};
use crate::operations::validate;

/// Previews a hue rotation without rebuilding the arc.
///
/// - [`Anchor::Chord`]: the apex spun about the chord line.
/// - [`Anchor::Apex`]: the apex is pinned, so the preview is the start
///   point swung about the apex in the arc's own plane.
pub struct ProjectHue<'a> {
    arc: &'a ColorArc,
    hue: f64,
}

impl<'a> ProjectHue<'a> {
    /// Creates a new `ProjectHue` query.
    ///
    /// * `hue` - Rotation in radians.
    #[must_use]
    pub fn new(arc: &'a ColorArc, hue: f64) -> Self {
        Self { arc, hue }
    }

    /// Executes the query, returning the previewed point.
    ///
    /// # Errors
    ///
    /// Returns an error if the hue angle is not finite.
    pub fn execute(&self) -> Result<Point3> {
        validate::finite_value(self.hue, "hue")?;
        let arc = self.arc;
        Ok(match arc.anchor() {
            Anchor::Chord if arc.is_degenerate() => *arc.peak(),
            Anchor::Chord => rotate_point(arc.peak(), arc.start(), arc.axis(), self.hue),
            Anchor::Apex { .. } => {
                let normal = arc.apex_plane_normal().unwrap_or_else(Vector3::x);
                rotate_point(arc.start(), arc.peak(), &normal, self.hue)
            }
        })
    }
}
