//! The color-model seam: how colors become points and back.
//!
//! The arc operations only ever see points. A [`ColorModel`] supplies the
//! mapping, the saturation target of a color and the two reference colors;
//! [`ArcFactory`] wires a model to the operations.

mod factory;
mod lab;

pub use factory::ArcFactory;
pub use lab::{Lab, LabModel};

use crate::math::Point3;

/// Maps colors to and from points of a three-component perceptual space.
pub trait ColorModel {
    /// The color representation used by the caller.
    type Color;

    /// Position of `color` in the perceptual space.
    fn point_of(&self, color: &Self::Color) -> Point3;

    /// Color at `point`. Inverse of [`point_of`](Self::point_of).
    fn color_of(&self, point: &Point3) -> Self::Color;

    /// Scalar saturation of `color` in `[0, 1]`, used as a curvature target.
    fn saturation_of(&self, color: &Self::Color) -> f64;

    /// The lightest reference color.
    fn white(&self) -> Self::Color;

    /// The darkest reference color.
    fn black(&self) -> Self::Color;
}
