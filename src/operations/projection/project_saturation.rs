use crate::config::ArcSettings;
use crate::error::Result;
use crate::geometry::{Anchor, CircleFit, ColorArc};
use crate::math::basis::normalized;
use crate::math::rotation::rotate_point;
use crate::math::{Point3, Vector3, ANGLE_TOLERANCE, TOLERANCE};
use crate::operations::validate;

/// Recomputes only the apex of an arc for a different saturation.
///
/// Constant time: the circle is re-fitted from the arc's stored endpoints and
/// only its midpoint is evaluated; the polyline is left alone. The new apex
/// stays on the same side of the chord as the current one, so an arc that
/// was spun keeps its orientation.
pub struct ProjectSaturation<'a> {
    arc: &'a ColorArc,
    saturation: f64,
    rotation: f64,
}

impl<'a> ProjectSaturation<'a> {
    /// Creates a new `ProjectSaturation` query.
    #[must_use]
    pub fn new(arc: &'a ColorArc, saturation: f64) -> Self {
        Self {
            arc,
            saturation,
            rotation: 0.0,
        }
    }

    /// Additionally rotates the projected apex by `angle` radians, the way
    /// [`RotateArc`](crate::operations::transform::RotateArc) would move it.
    #[must_use]
    pub fn with_rotation(mut self, angle: f64) -> Self {
        self.rotation = angle;
        self
    }

    /// Executes the query, returning the projected apex.
    ///
    /// Degenerate chords give the start point; full saturation gives the
    /// chord midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the saturation is outside `[0, 1]`, the rotation
    /// is not finite, or the settings are malformed.
    pub fn execute(&self, settings: &ArcSettings) -> Result<Point3> {
        settings.validate()?;
        validate::saturation(self.saturation)?;
        validate::finite_value(self.rotation, "rotation")?;

        let peak = match self.arc.anchor() {
            Anchor::Chord => self.chord_peak(settings),
            Anchor::Apex { chord_length } => self.apex_peak(chord_length, settings),
        };

        Ok(self.spin(peak))
    }

    fn chord_peak(&self, settings: &ArcSettings) -> Point3 {
        let arc = self.arc;
        let d = arc.chord_length();
        if d < TOLERANCE {
            return *arc.start();
        }
        let theta = settings.calibration.estimate_sweep(self.saturation, d);
        self.refit(arc.start(), arc.end(), theta, settings)
    }

    /// Re-derives the circle from the fixed chord length, centered on the
    /// current endpoints, independent of the apex the arc was built from.
    fn apex_peak(&self, chord_length: f64, settings: &ArcSettings) -> Point3 {
        let arc = self.arc;
        if chord_length < TOLERANCE {
            return *arc.peak();
        }
        let midpoint = arc.chord_midpoint();
        let axis = normalized(&(arc.end() - arc.start())).unwrap_or(*arc.axis());
        let half = axis * (chord_length / 2.0);
        let theta = settings
            .calibration
            .estimate_sweep(self.saturation, chord_length);
        self.refit(&(midpoint - half), &(midpoint + half), theta, settings)
    }

    fn refit(&self, start: &Point3, end: &Point3, theta: f64, settings: &ArcSettings) -> Point3 {
        let midpoint = nalgebra::center(start, end);
        let bulge: Vector3 = self
            .arc
            .bulge_direction()
            .unwrap_or_else(|| settings.references.toward_neutral(&midpoint));
        CircleFit::through(start, end, theta, Some(&bulge))
            .as_ref()
            .map_or(midpoint, CircleFit::peak)
    }

    /// Applies the same motion `RotateArc` would: a spin about the chord for
    /// chord arcs, a pivot on the apex in the arc's plane for apex arcs.
    fn spin(&self, peak: Point3) -> Point3 {
        let arc = self.arc;
        if self.rotation.abs() <= ANGLE_TOLERANCE {
            return peak;
        }
        match arc.anchor() {
            Anchor::Chord if arc.is_degenerate() => peak,
            Anchor::Chord => rotate_point(&peak, arc.start(), arc.axis(), self.rotation),
            Anchor::Apex { .. } => {
                let normal = arc.apex_plane_normal().unwrap_or_else(Vector3::x);
                rotate_point(&peak, arc.peak(), &normal, self.rotation)
            }
        }
    }
}
