pub mod basis;
pub mod rotation;

/// 3D point type. Coordinates are perceptual color components.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Below this length a chord, radius vector or projection counts as zero.
pub const TOLERANCE: f64 = 1e-12;

/// Saturations this close to 1.0 produce no curvature.
pub const SATURATION_TOLERANCE: f64 = 1e-10;

/// Angles this close to zero (or a whole turn) count as no rotation.
pub const ANGLE_TOLERANCE: f64 = 1e-12;

/// `|dot|` above which a reference direction is considered parallel to an axis.
pub const PARALLEL_THRESHOLD: f64 = 0.99;
