use super::{Vector3, PARALLEL_THRESHOLD, TOLERANCE};

/// Returns a unit vector perpendicular to the unit vector `axis`.
///
/// Uses +Z as the reference, switching to +Y when `axis` is nearly parallel
/// to +Z. Falls back to +X if the projection still vanishes.
#[must_use]
pub fn perpendicular_to(axis: &Vector3) -> Vector3 {
    let mut reference = Vector3::z();
    if axis.dot(&reference).abs() > PARALLEL_THRESHOLD {
        reference = Vector3::y();
    }
    normalized(&reject(&reference, axis)).unwrap_or_else(Vector3::x)
}

/// Unit normal of the plane spanned by `u` and `v`, or `None` when they are
/// (anti-)parallel or either is zero.
#[must_use]
pub fn plane_normal(u: &Vector3, v: &Vector3) -> Option<Vector3> {
    normalized(&u.cross(v))
}

/// Removes from `v` its component along the unit vector `axis`.
#[must_use]
pub fn reject(v: &Vector3, axis: &Vector3) -> Vector3 {
    v - axis * v.dot(axis)
}

/// Normalizes `v`, or `None` when its length is below [`TOLERANCE`].
#[must_use]
pub fn normalized(v: &Vector3) -> Option<Vector3> {
    let len = v.norm();
    (len >= TOLERANCE).then(|| v / len)
}

/// Signed angle that rotates `from` onto `to` about the unit `axis`.
///
/// Both vectors are expected to be perpendicular to `axis`. Result is in `(-pi, pi]`.
#[must_use]
pub fn signed_angle_about(from: &Vector3, to: &Vector3, axis: &Vector3) -> f64 {
    axis.dot(&from.cross(to)).atan2(from.dot(to))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn perpendicular_prefers_z() {
        let p = perpendicular_to(&Vector3::x());
        assert_relative_eq!(p, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_falls_back_to_y_near_z() {
        let axis = Vector3::new(0.01, 0.0, 1.0).normalize();
        let p = perpendicular_to(&axis);
        assert!(p.dot(&axis).abs() < 1e-12);
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
        assert!(p.y > 0.99);
    }

    #[test]
    fn plane_normal_of_parallel_vectors_is_none() {
        assert!(plane_normal(&Vector3::x(), &(Vector3::x() * -3.0)).is_none());
        assert!(plane_normal(&Vector3::zeros(), &Vector3::y()).is_none());
        assert_relative_eq!(
            plane_normal(&Vector3::x(), &Vector3::y()).unwrap(),
            Vector3::z(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn signed_angle_sign_follows_axis() {
        let a = signed_angle_about(&Vector3::x(), &Vector3::y(), &Vector3::z());
        assert_relative_eq!(a, FRAC_PI_2, epsilon = 1e-12);
        let b = signed_angle_about(&Vector3::x(), &Vector3::y(), &-Vector3::z());
        assert_relative_eq!(b, -FRAC_PI_2, epsilon = 1e-12);
    }
}
