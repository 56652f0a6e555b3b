mod build_apex_arc;
mod build_arc;

pub use build_apex_arc::BuildApexArc;
pub use build_arc::BuildArc;
