mod rotate_arc;
mod rotate_point;

pub use rotate_arc::RotateArc;
pub use rotate_point::RotatePoint;
