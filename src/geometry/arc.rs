use crate::math::basis::{normalized, plane_normal, reject};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Which point of an arc stays fixed when the arc is rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Built from two endpoint colors. Rotation spins the arc about its chord,
    /// keeping both endpoints in place.
    Chord,
    /// Built from a single apex color over a fixed-length chord. Rotation
    /// pivots on the apex.
    Apex {
        /// Chord length shared by every apex arc, taken from the reference colors.
        chord_length: f64,
    },
}

/// A discretized color arc.
///
/// - `polyline` runs from the first endpoint to the second; both endpoints
///   are stored exactly as they were given.
/// - `axis` is the unit chord direction (a configured default when the
///   chord is degenerate).
/// - `peak` is the apex of the fitted circle at the midpoint angle.
///
/// Values are immutable; every transform returns a new arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorArc {
    polyline: Vec<Point3>,
    axis: Vector3,
    peak: Point3,
    anchor: Anchor,
}

impl ColorArc {
    /// Assembles an arc. `polyline` must hold at least two points.
    pub(crate) fn from_parts(
        polyline: Vec<Point3>,
        axis: Vector3,
        peak: Point3,
        anchor: Anchor,
    ) -> Self {
        debug_assert!(polyline.len() >= 2);
        Self {
            polyline,
            axis,
            peak,
            anchor,
        }
    }

    /// Same polyline and axis with a replaced apex and anchor.
    pub(crate) fn reanchored(self, peak: Point3, anchor: Anchor) -> Self {
        Self {
            peak,
            anchor,
            ..self
        }
    }

    /// The ordered sample points.
    #[must_use]
    pub fn polyline(&self) -> &[Point3] {
        &self.polyline
    }

    /// Unit chord direction.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// The apex point.
    #[must_use]
    pub fn peak(&self) -> &Point3 {
        &self.peak
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// First endpoint.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.polyline[0]
    }

    /// Second endpoint.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.polyline[self.polyline.len() - 1]
    }

    /// Number of sample points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polyline.len()
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }

    /// True when the endpoints coincide (within [`TOLERANCE`]).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.chord_length() < TOLERANCE
    }

    /// Midpoint of the chord.
    #[must_use]
    pub fn chord_midpoint(&self) -> Point3 {
        nalgebra::center(self.start(), self.end())
    }

    /// Unit direction from the chord toward the apex, or `None` for straight
    /// and degenerate arcs.
    #[must_use]
    pub fn bulge_direction(&self) -> Option<Vector3> {
        let chord = normalized(&(self.end() - self.start()))?;
        normalized(&reject(&(self.peak - self.chord_midpoint()), &chord))
    }

    /// Unit normal of the plane through the start, the apex and the end.
    ///
    /// `None` when the three are colinear (straight or degenerate arcs).
    #[must_use]
    pub fn apex_plane_normal(&self) -> Option<Vector3> {
        plane_normal(&(self.start() - self.peak), &(self.end() - self.peak))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn bowed() -> ColorArc {
        ColorArc::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            Vector3::x(),
            Point3::new(1.0, 1.0, 0.0),
            Anchor::Chord,
        )
    }

    #[test]
    fn accessors_read_endpoints() {
        let arc = bowed();
        assert_eq!(arc.point_count(), 3);
        assert_eq!(*arc.start(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(*arc.end(), Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(arc.chord_length(), 2.0);
        assert!(!arc.is_degenerate());
    }

    #[test]
    fn bulge_direction_points_at_peak() {
        let arc = bowed();
        assert_relative_eq!(arc.bulge_direction().unwrap(), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn straight_arc_has_no_bulge() {
        let arc = ColorArc::from_parts(
            vec![Point3::origin(), Point3::new(2.0, 0.0, 0.0)],
            Vector3::x(),
            Point3::new(1.0, 0.0, 0.0),
            Anchor::Chord,
        );
        assert!(arc.bulge_direction().is_none());
        assert!(arc.apex_plane_normal().is_none());
    }

    #[test]
    fn apex_plane_normal_of_bowed_arc() {
        // (start - peak) x (end - peak) = (-1, -1, 0) x (1, -1, 0) = (0, 0, 2)
        let normal = bowed().apex_plane_normal().unwrap();
        assert_relative_eq!(normal, Vector3::z(), epsilon = 1e-12);
    }
}
