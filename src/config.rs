use crate::error::{GeometryError, OperationError, Result};
use crate::math::basis::{normalized, reject};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Coefficients of the saturation-to-sweep rational approximation.
///
/// `theta(x) = (c0 + c1 x + c2 x^2) / (1 + c3 x + c4 x^2 + c5 x^3)` where `x`
/// is the chord-rescaled saturation. Calibrated offline; never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCalibration {
    /// The six fitted coefficients `c0..c5`.
    pub coefficients: [f64; 6],
    /// Chord length at which saturation is used unscaled.
    pub reference_length: f64,
}

impl SweepCalibration {
    /// Default fitted coefficients.
    pub const DEFAULT_COEFFICIENTS: [f64; 6] = [
        79.792_287_14,
        91.046_410_17,
        342.102_243_62,
        1_140.938_285_43,
        172.445_783_39,
        1_078.897_977_26,
    ];

    /// Creates a calibration from explicit coefficients and reference length.
    #[must_use]
    pub fn new(coefficients: [f64; 6], reference_length: f64) -> Self {
        Self {
            coefficients,
            reference_length,
        }
    }
}

impl Default for SweepCalibration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COEFFICIENTS, 50.0)
    }
}

/// The two extreme reference colors of the perceptual space, as points.
///
/// The line through them is the neutral (achromatic) axis. Arcs bulge toward
/// it by default, and the singular variant takes its chord length from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoints {
    pub white: Point3,
    pub black: Point3,
}

impl ReferencePoints {
    #[must_use]
    pub fn new(white: Point3, black: Point3) -> Self {
        Self { white, black }
    }

    /// Distance between the two reference points.
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.white - self.black).norm()
    }

    /// Midpoint of the reference points.
    #[must_use]
    pub fn gray(&self) -> Point3 {
        nalgebra::center(&self.white, &self.black)
    }

    /// Unit direction from black to white, or `None` if they coincide.
    #[must_use]
    pub fn neutral_direction(&self) -> Option<Vector3> {
        normalized(&(self.white - self.black))
    }

    /// Vector from `point` to its closest point on the neutral line.
    ///
    /// Zero when the reference points coincide or `point` is on the line.
    #[must_use]
    pub fn toward_neutral(&self, point: &Point3) -> Vector3 {
        match self.neutral_direction() {
            Some(dir) => -reject(&(point - self.black), &dir),
            None => Vector3::zeros(),
        }
    }
}

impl Default for ReferencePoints {
    fn default() -> Self {
        Self::new(Point3::new(100.0, 0.0, 0.0), Point3::origin())
    }
}

/// Immutable configuration shared by every arc operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSettings {
    /// Saturation-to-sweep approximation.
    pub calibration: SweepCalibration,
    /// Extreme colors of the space.
    pub references: ReferencePoints,
    /// Axis reported for arcs whose chord is degenerate.
    pub default_axis: Vector3,
}

impl ArcSettings {
    /// Builds settings whose reference length is half the white-black span
    /// (the black-to-gray distance), with the default coefficient table.
    ///
    /// Coincident references keep the default reference length.
    #[must_use]
    pub fn from_references(references: ReferencePoints) -> Self {
        let mut calibration = SweepCalibration::default();
        let half_span = references.span() / 2.0;
        if half_span >= TOLERANCE {
            calibration.reference_length = half_span;
        }
        Self {
            calibration,
            references,
            default_axis: Vector3::x(),
        }
    }

    /// Replaces the calibration table.
    #[must_use]
    pub fn with_calibration(mut self, calibration: SweepCalibration) -> Self {
        self.calibration = calibration;
        self
    }

    /// Replaces the degenerate-chord axis.
    #[must_use]
    pub fn with_default_axis(mut self, axis: Vector3) -> Self {
        self.default_axis = axis;
        self
    }

    /// Checks that every value is finite and the reference length positive.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite values, a non-positive reference length
    /// or a default axis that is not unit length.
    pub fn validate(&self) -> Result<()> {
        let cal = &self.calibration;
        if cal.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(GeometryError::NonFinite {
                parameter: "calibration coefficient",
            }
            .into());
        }
        if !cal.reference_length.is_finite() {
            return Err(GeometryError::NonFinite {
                parameter: "reference_length",
            }
            .into());
        }
        if cal.reference_length < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "reference length must be positive, got {}",
                cal.reference_length
            ))
            .into());
        }
        let refs = &self.references;
        if refs.white.coords.iter().chain(refs.black.coords.iter()).any(|c| !c.is_finite()) {
            return Err(GeometryError::NonFinite {
                parameter: "reference point",
            }
            .into());
        }
        if (self.default_axis.norm() - 1.0).abs() > 1e-9 {
            return Err(
                OperationError::InvalidInput("default axis must be unit length".into()).into(),
            );
        }
        Ok(())
    }
}

impl Default for ArcSettings {
    fn default() -> Self {
        Self::from_references(ReferencePoints::default())
    }
}
