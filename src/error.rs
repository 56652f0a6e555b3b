use thiserror::Error;

/// Top-level error type for chromarc.
#[derive(Debug, Error)]
pub enum ChromarcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while validating geometric inputs.
///
/// Degenerate configurations (coincident endpoints, parallel basis vectors)
/// are not errors; they resolve to fallback geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not finite")]
    NonFinite { parameter: &'static str },
}

/// Errors related to arc operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ChromarcError`].
pub type Result<T> = std::result::Result<T, ChromarcError>;
