use super::ColorModel;
use crate::config::{ArcSettings, ReferencePoints};
use crate::error::Result;
use crate::geometry::ColorArc;
use crate::operations::build::{BuildApexArc, BuildArc};

/// Builds arcs from colors of a [`ColorModel`].
///
/// The settings are derived once from the model's reference colors unless
/// given explicitly.
#[derive(Debug, Clone)]
pub struct ArcFactory<M: ColorModel> {
    model: M,
    settings: ArcSettings,
}

impl<M: ColorModel> ArcFactory<M> {
    /// Creates a factory whose reference points are the model's white and black.
    #[must_use]
    pub fn new(model: M) -> Self {
        let references = ReferencePoints::new(
            model.point_of(&model.white()),
            model.point_of(&model.black()),
        );
        Self {
            settings: ArcSettings::from_references(references),
            model,
        }
    }

    /// Creates a factory with explicit settings, e.g. an alternate calibration.
    #[must_use]
    pub fn with_settings(model: M, settings: ArcSettings) -> Self {
        Self { model, settings }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn settings(&self) -> &ArcSettings {
        &self.settings
    }

    /// Arc from `from` to `to` curved for `saturation`.
    ///
    /// # Errors
    ///
    /// See [`BuildArc::execute`].
    pub fn build_arc(
        &self,
        from: &M::Color,
        to: &M::Color,
        saturation: f64,
        count: usize,
    ) -> Result<ColorArc> {
        BuildArc::new(
            self.model.point_of(from),
            self.model.point_of(to),
            saturation,
            count,
        )
        .execute(&self.settings)
    }

    /// Arc from `from` to `to` curved for the saturation of `target`.
    ///
    /// # Errors
    ///
    /// See [`BuildArc::execute`].
    pub fn build_arc_toward(
        &self,
        from: &M::Color,
        to: &M::Color,
        target: &M::Color,
        count: usize,
    ) -> Result<ColorArc> {
        self.build_arc(from, to, self.model.saturation_of(target), count)
    }

    /// Arc peaking at `apex`.
    ///
    /// # Errors
    ///
    /// See [`BuildApexArc::execute`].
    pub fn build_apex_arc(&self, apex: &M::Color, saturation: f64, count: usize) -> Result<ColorArc> {
        BuildApexArc::new(self.model.point_of(apex), saturation, count).execute(&self.settings)
    }

    /// The arc's polyline as colors, in traversal order.
    #[must_use]
    pub fn colors_of(&self, arc: &ColorArc) -> Vec<M::Color> {
        arc.polyline().iter().map(|p| self.model.color_of(p)).collect()
    }

    /// The arc's apex as a color.
    #[must_use]
    pub fn peak_color(&self, arc: &ColorArc) -> M::Color {
        self.model.color_of(arc.peak())
    }
}
