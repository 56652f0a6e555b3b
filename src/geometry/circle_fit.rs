use std::f64::consts::{PI, TAU};

use crate::math::basis::{normalized, perpendicular_to, reject, signed_angle_about};
use crate::math::rotation::AxisRotation;
use crate::math::{Point3, Vector3, ANGLE_TOLERANCE, TOLERANCE};

use super::sweep::resolve_sweep;

/// A circle fitted through a chord, framed so that `point_at(0.0)` is the
/// chord start and `point_at(sweep)` is the chord end.
///
/// `P(t) = center + radius * (cos(t) * e1 + sin(t) * e2)`
#[derive(Debug, Clone, Copy)]
pub struct CircleFit {
    center: Point3,
    radius: f64,
    e1: Vector3,
    e2: Vector3,
    sweep: f64,
}

impl CircleFit {
    /// Fits the circle whose arc from `start` to `end` spans the sweep
    /// estimated as `theta`.
    ///
    /// The in-plane basis is first chosen arbitrarily around the chord. When
    /// `bulge` has a component perpendicular to the chord, the circle is then
    /// twisted about the chord so that its apex lies on that side.
    ///
    /// Returns `None` when the chord is degenerate or `theta` resolves to a
    /// straight line.
    #[must_use]
    pub fn through(start: &Point3, end: &Point3, theta: f64, bulge: Option<&Vector3>) -> Option<Self> {
        let chord = end - start;
        let d = chord.norm();
        if d < TOLERANCE {
            return None;
        }
        let axis = chord / d;
        let target = resolve_sweep(theta)?;

        let radius = d / (2.0 * (target / 2.0).sin());
        let half = d / 2.0;
        let u = perpendicular_to(&axis);
        let h = (radius * radius - half * half).max(0.0).sqrt();
        let midpoint = nalgebra::center(start, end);
        let center = midpoint + u * h;

        let to_start = start - center;
        let e1 = to_start / to_start.norm();
        let to_end = end - center;
        let (mut e2, mut sweep) = match normalized(&reject(&to_end, &e1)) {
            Some(e2) => {
                let angle = to_end.dot(&e2).atan2(to_end.dot(&e1));
                (e2, angle.rem_euclid(TAU))
            }
            // Endpoints are antipodal: a half circle bowing away from the center offset.
            None => (-u, PI),
        };
        if target > PI && sweep < PI {
            e2 = -e2;
            sweep = TAU - sweep;
        }

        let mut fit = Self {
            center,
            radius,
            e1,
            e2,
            sweep,
        };

        let desired = bulge.and_then(|b| normalized(&reject(b, &axis)));
        let current = normalized(&reject(&(fit.peak() - midpoint), &axis));
        if let (Some(desired), Some(current)) = (desired, current) {
            let twist = signed_angle_about(&current, &desired, &axis);
            if twist.abs() > ANGLE_TOLERANCE {
                fit = fit.rotated(&AxisRotation::new(axis, twist), start);
            }
        }

        tracing::trace!(
            radius = fit.radius,
            sweep = fit.sweep,
            target,
            height = h,
            "fitted chord circle"
        );
        Some(fit)
    }

    /// Rigidly rotates the circle frame about the line through `pivot`.
    #[must_use]
    pub fn rotated(&self, rotation: &AxisRotation, pivot: &Point3) -> Self {
        Self {
            center: rotation.rotate_about(&self.center, pivot),
            radius: self.radius,
            e1: rotation.rotate_vector(&self.e1),
            e2: rotation.rotate_vector(&self.e2),
            sweep: self.sweep,
        }
    }

    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Resolved angular span from start to end, in `(0, 2pi)`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Evaluates the circle at `angle` radians from the chord start.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point3 {
        self.center + (self.e1 * angle.cos() + self.e2 * angle.sin()) * self.radius
    }

    /// The apex: the point at half the sweep.
    #[must_use]
    pub fn peak(&self) -> Point3 {
        self.point_at(self.sweep / 2.0)
    }

    /// Samples `count` points at evenly spaced angles over `[0, sweep]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, count: usize) -> Vec<Point3> {
        let last = count.saturating_sub(1).max(1) as f64;
        (0..count)
            .map(|i| self.point_at(self.sweep * i as f64 / last))
            .collect()
    }
}
