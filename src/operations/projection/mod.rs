mod project_hue;
mod project_saturation;

pub use project_hue::ProjectHue;
pub use project_saturation::ProjectSaturation;
