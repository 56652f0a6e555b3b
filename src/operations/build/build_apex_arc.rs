use crate::config::ArcSettings;
use crate::error::Result;
use crate::geometry::{Anchor, CircleFit, ColorArc};
use crate::math::basis::{normalized, perpendicular_to};
use crate::math::Point3;
use crate::operations::validate;

use super::build_arc::chord_arc;

/// Builds a color arc around a single apex color.
///
/// The chord has the fixed length of the white-black span. It runs along the
/// neutral (vertical) direction and is placed so that the fitted arc peaks
/// exactly at `apex`, bowing toward the neutral line. When the apex sits on
/// the neutral line itself, the chord runs horizontally instead.
pub struct BuildApexArc {
    apex: Point3,
    saturation: f64,
    count: usize,
}

impl BuildApexArc {
    /// Creates a new `BuildApexArc` operation.
    #[must_use]
    pub fn new(apex: Point3, saturation: f64, count: usize) -> Self {
        Self {
            apex,
            saturation,
            count,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if `count < 2`, the apex is not finite, the
    /// saturation is outside `[0, 1]`, or the settings are malformed.
    pub fn execute(&self, settings: &ArcSettings) -> Result<ColorArc> {
        settings.validate()?;
        validate::finite_point(&self.apex, "apex")?;
        validate::saturation(self.saturation)?;
        validate::point_count(self.count)?;

        let apex = self.apex;
        let refs = &settings.references;
        let chord_length = refs.span();
        let anchor = Anchor::Apex { chord_length };

        let Some(vertical) = refs.neutral_direction() else {
            tracing::debug!(chord_length, "reference colors coincide, repeating apex");
            return Ok(ColorArc::from_parts(
                vec![apex; self.count],
                settings.default_axis,
                apex,
                anchor,
            ));
        };

        let (axis, bulge) = match normalized(&refs.toward_neutral(&apex)) {
            Some(bulge) => (vertical, bulge),
            None => {
                tracing::debug!("apex on the neutral line, using a horizontal chord");
                let axis = perpendicular_to(&vertical);
                (axis, vertical.cross(&axis))
            }
        };

        let half = axis * (chord_length / 2.0);
        let mut start = apex - half;
        let mut end = apex + half;

        // Slide the chord away from the apex by the sagitta of the fitted circle.
        let theta = settings.calibration.estimate_sweep(self.saturation, chord_length);
        if let Some(fit) = CircleFit::through(&start, &end, theta, Some(&bulge)) {
            let shift = apex - fit.peak();
            start += shift;
            end += shift;
        }

        let arc = chord_arc(&start, &end, self.saturation, self.count, Some(&bulge), settings);
        Ok(arc.reanchored(apex, anchor))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::config::{ReferencePoints, SweepCalibration};
    use crate::error::{ChromarcError, GeometryError, OperationError};
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn peak_is_exactly_the_apex() {
        let apex = p(55.0, 40.0, -20.0);
        let arc = BuildApexArc::new(apex, 0.4, 9)
            .execute(&ArcSettings::default())
            .unwrap();
        assert_eq!(*arc.peak(), apex);
        assert_relative_eq!(arc.polyline()[4], apex, epsilon = 1e-9);
        assert_relative_eq!(arc.chord_length(), 100.0, epsilon = 1e-9);
        assert_eq!(arc.anchor(), Anchor::Apex { chord_length: 100.0 });
    }

    #[test]
    fn chord_runs_along_the_neutral_direction() {
        let apex = p(55.0, 40.0, -20.0);
        let arc = BuildApexArc::new(apex, 0.4, 9)
            .execute(&ArcSettings::default())
            .unwrap();
        assert_relative_eq!(*arc.axis(), Vector3::x(), epsilon = 1e-12);
        // Bows toward the lightness axis: endpoints have more chroma than the apex.
        let apex_chroma = apex.y.hypot(apex.z);
        let start_chroma = arc.start().y.hypot(arc.start().z);
        assert!(start_chroma > apex_chroma);
    }

    #[test]
    fn full_saturation_is_centered_on_apex() {
        let apex = p(30.0, 10.0, 10.0);
        let arc = BuildApexArc::new(apex, 1.0, 5)
            .execute(&ArcSettings::default())
            .unwrap();
        assert_relative_eq!(*arc.start(), p(-20.0, 10.0, 10.0), epsilon = 1e-12);
        assert_relative_eq!(*arc.end(), p(80.0, 10.0, 10.0), epsilon = 1e-12);
        assert_relative_eq!(arc.polyline()[2], apex, epsilon = 1e-12);
    }

    #[test]
    fn apex_on_neutral_line_uses_horizontal_chord() {
        let apex = p(50.0, 0.0, 0.0);
        let arc = BuildApexArc::new(apex, 0.5, 7)
            .execute(&ArcSettings::default())
            .unwrap();
        assert!(arc.axis().dot(&Vector3::x()).abs() < 1e-9);
        assert_eq!(*arc.peak(), apex);
        assert_relative_eq!(arc.polyline()[3], apex, epsilon = 1e-9);
    }

    #[test]
    fn coincident_references_repeat_the_apex() {
        let refs = ReferencePoints::new(p(50.0, 0.0, 0.0), p(50.0, 0.0, 0.0));
        let settings = ArcSettings::from_references(refs)
            .with_calibration(SweepCalibration::default());
        let apex = p(20.0, 5.0, 5.0);
        let arc = BuildApexArc::new(apex, 0.5, 3).execute(&settings).unwrap();
        assert_eq!(arc.polyline(), &[apex; 3]);
        assert_eq!(*arc.peak(), apex);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let settings = ArcSettings::default();

        let too_few = BuildApexArc::new(p(1.0, 1.0, 1.0), 0.5, 0).execute(&settings);
        assert!(matches!(
            too_few,
            Err(ChromarcError::Operation(OperationError::InvalidInput(_)))
        ));

        let nan = BuildApexArc::new(p(50.0, f64::NAN, 0.0), 0.5, 5).execute(&settings);
        assert!(matches!(
            nan,
            Err(ChromarcError::Geometry(GeometryError::NonFinite { parameter: "apex" }))
        ));

        let out_of_range = BuildApexArc::new(p(50.0, 10.0, 0.0), 1.5, 5).execute(&settings);
        assert!(matches!(
            out_of_range,
            Err(ChromarcError::Geometry(GeometryError::ParameterOutOfRange { .. }))
        ));
    }
}
