//! Color arcs: gradients that bend through a perceptual color space.
//!
//! A gradient between two colors is sampled along a circular arc whose
//! bulge grows as the requested saturation drops. Arcs are plain point
//! data; the operations under [`operations`] build, spin, preview and pick
//! on them, and [`color`] maps a concrete color model onto the points.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use color::{ArcFactory, ColorModel, Lab, LabModel};
pub use config::{ArcSettings, ReferencePoints, SweepCalibration};
pub use error::{ChromarcError, Result};
pub use geometry::{Anchor, ColorArc};
