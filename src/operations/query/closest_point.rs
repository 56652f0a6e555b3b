use crate::error::{OperationError, Result};
use crate::geometry::ColorArc;
use crate::math::Point3;
use crate::operations::validate;

/// Result of a closest point query on an arc polyline.
#[derive(Debug, Clone, Copy)]
pub struct ArcHit {
    /// Index of the segment's first polyline point.
    pub segment: usize,
    /// Position along the segment, in `[0, 1]`.
    pub parameter: f64,
    /// The closest point on the polyline.
    pub point: Point3,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on an arc's polyline to a picked location.
pub struct ClosestPointOnArc<'a> {
    arc: &'a ColorArc,
    point: Point3,
}

impl<'a> ClosestPointOnArc<'a> {
    /// Creates a new `ClosestPointOnArc` query.
    #[must_use]
    pub fn new(arc: &'a ColorArc, point: Point3) -> Self {
        Self { arc, point }
    }

    /// Executes the query.
    ///
    /// Ties keep the earliest segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the query point is not finite.
    pub fn execute(&self) -> Result<ArcHit> {
        validate::finite_point(&self.point, "point")?;

        self.arc
            .polyline()
            .windows(2)
            .enumerate()
            .map(|(segment, pair)| closest_on_segment(segment, &pair[0], &pair[1], &self.point))
            .reduce(|best, hit| if hit.distance < best.distance { hit } else { best })
            .ok_or_else(|| OperationError::InvalidInput("arc has no segments".into()).into())
    }
}

fn closest_on_segment(segment: usize, a: &Point3, b: &Point3, point: &Point3) -> ArcHit {
    let dir = b - a;
    let len_sq = dir.norm_squared();
    // Degenerate segments project onto their start.
    let parameter = if len_sq < 1e-24 {
        0.0
    } else {
        ((point - a).dot(&dir) / len_sq).clamp(0.0, 1.0)
    };
    let closest = a + dir * parameter;
    ArcHit {
        segment,
        parameter,
        point: closest,
        distance: (point - closest).norm(),
    }
}
