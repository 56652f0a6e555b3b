//! Argument checks shared by the operations. They run before any geometry.

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Point3, Vector3};

pub(crate) fn finite_value(value: f64, parameter: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter }.into())
    }
}

pub(crate) fn finite_point(point: &Point3, parameter: &'static str) -> Result<()> {
    finite_vector(&point.coords, parameter)
}

pub(crate) fn finite_vector(vector: &Vector3, parameter: &'static str) -> Result<()> {
    if vector.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter }.into())
    }
}

pub(crate) fn saturation(value: f64) -> Result<()> {
    finite_value(value, "saturation")?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter: "saturation",
            value,
            min: 0.0,
            max: 1.0,
        }
        .into())
    }
}

pub(crate) fn point_count(count: usize) -> Result<()> {
    if count >= 2 {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!("an arc needs at least 2 points, got {count}")).into())
    }
}
