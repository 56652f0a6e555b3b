pub mod build;
pub mod projection;
pub mod query;
pub mod transform;
mod validate;
