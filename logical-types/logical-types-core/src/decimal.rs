//! Decimal descriptor: precision/scale parameters and their validation.

use std::f64::consts::LOG10_2;

use crate::{
    error::LogicalTypeError,
    schema::{PhysicalType, SchemaNode},
};

pub const DECIMAL: &str = "decimal";
pub const PRECISION_PROP: &str = "precision";
pub const SCALE_PROP: &str = "scale";

/// Fixed-scale decimal number backed by `bytes` or `fixed`.
///
/// Invariants: `precision > 0` and `scale <= precision`. Equality and hashing
/// are defined by the `(precision, scale)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: u32,
    scale: u32,
}

impl DecimalType {
    pub fn new(precision: u32, scale: u32) -> Result<Self, LogicalTypeError> {
        check_parameters(i64::from(precision), i64::from(scale))
    }

    /// Build from the `precision` and optional `scale` properties of `schema`.
    ///
    /// `scale` defaults to `0` when absent.
    pub fn from_schema(schema: &dyn SchemaNode) -> Result<Self, LogicalTypeError> {
        let precision = schema.prop(PRECISION_PROP).ok_or_else(|| {
            LogicalTypeError::MissingRequiredProperty {
                logical_type: DECIMAL.to_string(),
                property: PRECISION_PROP.to_string(),
            }
        })?;
        let precision = parse_int(PRECISION_PROP, precision)?;
        let scale = match schema.prop(SCALE_PROP) {
            Some(scale) => parse_int(SCALE_PROP, scale)?,
            None => 0,
        };
        check_parameters(precision, scale)
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Check that `physical` can store every value of this decimal.
    pub fn validate_physical(&self, physical: PhysicalType) -> Result<(), LogicalTypeError> {
        let max = match physical {
            PhysicalType::Bytes => return Ok(()),
            PhysicalType::Fixed(size) => max_precision_for_fixed(size),
            other => {
                return Err(LogicalTypeError::IncompatiblePhysicalType {
                    logical_type: DECIMAL.to_string(),
                    physical_type: other.to_string(),
                });
            }
        };
        if self.precision > max {
            return Err(LogicalTypeError::invalid_parameter(
                DECIMAL,
                PRECISION_PROP,
                format!("{physical} cannot store {} digits (max {max})", self.precision),
            ));
        }
        Ok(())
    }
}

/// Largest number of decimal digits that `size` signed big-endian bytes can hold:
/// `floor(log10(2^(8 * size - 1) - 1))`.
pub fn max_precision_for_fixed(size: usize) -> u32 {
    if size == 0 {
        return 0;
    }
    let bits = size.saturating_mul(8) - 1;
    if bits < 128 {
        ((1u128 << bits) - 1).ilog10()
    } else {
        // 2^bits - 1 is never a power of ten, so the bound equals floor(bits * log10(2)).
        (bits as f64 * LOG10_2).floor() as u32
    }
}

fn parse_int(parameter: &str, raw: &str) -> Result<i64, LogicalTypeError> {
    raw.trim().parse::<i64>().map_err(|_| {
        LogicalTypeError::invalid_parameter(
            DECIMAL,
            parameter,
            format!("'{raw}' is not a decimal integer"),
        )
    })
}

fn check_parameters(precision: i64, scale: i64) -> Result<DecimalType, LogicalTypeError> {
    if precision <= 0 {
        return Err(LogicalTypeError::invalid_parameter(
            DECIMAL,
            PRECISION_PROP,
            format!("{precision} (must be positive)"),
        ));
    }
    if scale < 0 {
        return Err(LogicalTypeError::invalid_parameter(
            DECIMAL,
            SCALE_PROP,
            format!("{scale} (must not be negative)"),
        ));
    }
    if scale > precision {
        return Err(LogicalTypeError::invalid_parameter(
            DECIMAL,
            SCALE_PROP,
            format!("{scale} (greater than precision: {precision})"),
        ));
    }
    let precision = u32::try_from(precision).map_err(|_| {
        LogicalTypeError::invalid_parameter(
            DECIMAL,
            PRECISION_PROP,
            format!("{precision} (too large)"),
        )
    })?;
    Ok(DecimalType {
        precision,
        // scale <= precision, so it fits as well.
        scale: scale as u32,
    })
}
