use palette::white_point::D65;

use super::ColorModel;
use crate::math::{Point3, TOLERANCE};

/// CIELAB color under the D65 white point, double precision.
pub type Lab = palette::Lab<D65, f64>;

/// CIELAB as the perceptual space: the point is `(L, a, b)`.
///
/// Saturation follows the CIE definition `C / sqrt(C^2 + L^2)`, where `C`
/// is the chroma. The neutral line is the `L` axis from black `(0, 0, 0)`
/// to white `(100, 0, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabModel;

impl ColorModel for LabModel {
    type Color = Lab;

    fn point_of(&self, color: &Lab) -> Point3 {
        Point3::new(color.l, color.a, color.b)
    }

    fn color_of(&self, point: &Point3) -> Lab {
        Lab::new(point.x, point.y, point.z)
    }

    fn saturation_of(&self, color: &Lab) -> f64 {
        let chroma = color.a.hypot(color.b);
        let magnitude = chroma.hypot(color.l);
        if magnitude < TOLERANCE {
            return 0.0;
        }
        (chroma / magnitude).clamp(0.0, 1.0)
    }

    fn white(&self) -> Lab {
        Lab::new(100.0, 0.0, 0.0)
    }

    fn black(&self) -> Lab {
        Lab::new(0.0, 0.0, 0.0)
    }
}
