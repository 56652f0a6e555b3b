mod arc;
pub mod circle_fit;
pub mod sweep;

pub use arc::{Anchor, ColorArc};
pub use circle_fit::CircleFit;
