use crate::config::ArcSettings;
use crate::error::Result;
use crate::geometry::{Anchor, CircleFit, ColorArc};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::validate;

/// Builds a color arc between two points.
///
/// The arc's curvature is estimated from the target saturation and the chord
/// length. With no bulge direction given, the arc bows toward the neutral
/// line through the reference points.
pub struct BuildArc {
    start: Point3,
    end: Point3,
    saturation: f64,
    count: usize,
    bulge: Option<Vector3>,
}

impl BuildArc {
    /// Creates a new `BuildArc` operation.
    ///
    /// * `saturation` - Curvature target in `[0, 1]`; `1.0` draws a straight chord.
    /// * `count` - Number of polyline points, at least 2.
    #[must_use]
    pub fn new(start: Point3, end: Point3, saturation: f64, count: usize) -> Self {
        Self {
            start,
            end,
            saturation,
            count,
            bulge: None,
        }
    }

    /// Sets the side of the chord the arc bows toward.
    ///
    /// Only the component perpendicular to the chord matters.
    #[must_use]
    pub fn with_bulge_direction(mut self, direction: Vector3) -> Self {
        self.bulge = Some(direction);
        self
    }

    /// Executes the operation, returning the discretized arc.
    ///
    /// # Errors
    ///
    /// Returns an error if `count < 2`, a coordinate or the chord length is
    /// not finite, the saturation is outside `[0, 1]`, or the settings are
    /// malformed.
    pub fn execute(&self, settings: &ArcSettings) -> Result<ColorArc> {
        settings.validate()?;
        validate::finite_point(&self.start, "start")?;
        validate::finite_point(&self.end, "end")?;
        validate::finite_value((self.end - self.start).norm(), "chord length")?;
        validate::saturation(self.saturation)?;
        validate::point_count(self.count)?;
        if let Some(bulge) = &self.bulge {
            validate::finite_vector(bulge, "bulge direction")?;
        }

        Ok(chord_arc(
            &self.start,
            &self.end,
            self.saturation,
            self.count,
            self.bulge.as_ref(),
            settings,
        ))
    }
}

/// Fits and samples the arc. Inputs are assumed validated.
pub(crate) fn chord_arc(
    start: &Point3,
    end: &Point3,
    saturation: f64,
    count: usize,
    bulge: Option<&Vector3>,
    settings: &ArcSettings,
) -> ColorArc {
    let chord = end - start;
    let d = chord.norm();
    if d < TOLERANCE {
        tracing::debug!(count, "degenerate chord, repeating start point");
        return ColorArc::from_parts(vec![*start; count], settings.default_axis, *start, Anchor::Chord);
    }
    let axis = chord / d;
    let midpoint = nalgebra::center(start, end);

    let theta = settings.calibration.estimate_sweep(saturation, d);
    let hint = bulge
        .copied()
        .unwrap_or_else(|| settings.references.toward_neutral(&midpoint));

    let (mut polyline, peak) = match CircleFit::through(start, end, theta, Some(&hint)) {
        Some(fit) => (fit.sample(count), fit.peak()),
        None => {
            tracing::debug!(saturation, theta, "no curvature, sampling the straight chord");
            (straight(start, &chord, count), midpoint)
        }
    };

    polyline[0] = *start;
    polyline[count - 1] = *end;
    ColorArc::from_parts(polyline, axis, peak, Anchor::Chord)
}

/// `count` points evenly spaced from `start` along `chord`.
#[allow(clippy::cast_precision_loss)]
fn straight(start: &Point3, chord: &Vector3, count: usize) -> Vec<Point3> {
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| start + chord * (i as f64 / last))
        .collect()
}
