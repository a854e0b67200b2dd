//! Logical type descriptors and their physical-type rules.

use std::fmt;

use crate::{
    decimal::{DECIMAL, DecimalType, PRECISION_PROP, SCALE_PROP},
    error::LogicalTypeError,
    schema::{LOGICAL_TYPE_PROP, PhysicalType, SchemaNode, SchemaNodeMut},
};

pub const UUID: &str = "uuid";
pub const DATE: &str = "date";
pub const TIME_MILLIS: &str = "time-millis";
pub const TIME_MICROS: &str = "time-micros";
pub const TIMESTAMP_MILLIS: &str = "timestamp-millis";
pub const TIMESTAMP_MICROS: &str = "timestamp-micros";

/// Semantic annotation layered on a schema's physical type.
///
/// Parameterless kinds are unit variants and compare by name. Names produced
/// by user-registered factories are carried as [`LogicalType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Decimal(DecimalType),
    Uuid,
    /// Calendar date without a time, as days since the epoch.
    Date,
    /// Time of day in milliseconds, without a date.
    TimeMillis,
    /// Time of day in microseconds, without a date.
    TimeMicros,
    /// Instant in milliseconds since the epoch.
    TimestampMillis,
    /// Instant in microseconds since the epoch.
    TimestampMicros,
    Unknown(String),
}

/// Which physical types a kind accepts.
enum PhysicalRule {
    Any,
    Exactly(PhysicalType),
    Decimal(DecimalType),
}

impl LogicalType {
    pub fn name(&self) -> &str {
        match self {
            LogicalType::Decimal(_) => DECIMAL,
            LogicalType::Uuid => UUID,
            LogicalType::Date => DATE,
            LogicalType::TimeMillis => TIME_MILLIS,
            LogicalType::TimeMicros => TIME_MICROS,
            LogicalType::TimestampMillis => TIMESTAMP_MILLIS,
            LogicalType::TimestampMicros => TIMESTAMP_MICROS,
            LogicalType::Unknown(name) => name,
        }
    }

    /// Parameterless descriptor for a built-in name. Returns `None` for
    /// `decimal` (which needs parameters) and for unrecognized names.
    pub fn parameterless(name: &str) -> Option<Self> {
        Some(match name {
            UUID => LogicalType::Uuid,
            DATE => LogicalType::Date,
            TIME_MILLIS => LogicalType::TimeMillis,
            TIME_MICROS => LogicalType::TimeMicros,
            TIMESTAMP_MILLIS => LogicalType::TimestampMillis,
            TIMESTAMP_MICROS => LogicalType::TimestampMicros,
            _ => return None,
        })
    }

    pub fn as_decimal(&self) -> Option<&DecimalType> {
        match self {
            LogicalType::Decimal(decimal) => Some(decimal),
            _ => None,
        }
    }

    fn physical_rule(&self) -> PhysicalRule {
        match self {
            LogicalType::Decimal(decimal) => PhysicalRule::Decimal(*decimal),
            LogicalType::Uuid => PhysicalRule::Exactly(PhysicalType::String),
            LogicalType::Date | LogicalType::TimeMillis => PhysicalRule::Exactly(PhysicalType::Int),
            LogicalType::TimeMicros
            | LogicalType::TimestampMillis
            | LogicalType::TimestampMicros => PhysicalRule::Exactly(PhysicalType::Long),
            LogicalType::Unknown(_) => PhysicalRule::Any,
        }
    }

    /// Check that the physical type of `schema` can represent this logical type.
    pub fn validate(&self, schema: &dyn SchemaNode) -> Result<(), LogicalTypeError> {
        let physical = schema.physical_type();
        match self.physical_rule() {
            PhysicalRule::Any => Ok(()),
            PhysicalRule::Exactly(expected) if expected == physical => Ok(()),
            PhysicalRule::Exactly(_) => Err(LogicalTypeError::IncompatiblePhysicalType {
                logical_type: self.name().to_string(),
                physical_type: physical.to_string(),
            }),
            PhysicalRule::Decimal(decimal) => decimal.validate_physical(physical),
        }
    }

    /// Properties written by [`attach_to`](Self::attach_to), in write order.
    pub fn props(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![(LOGICAL_TYPE_PROP, self.name().to_string())];
        if let LogicalType::Decimal(decimal) = self {
            props.push((PRECISION_PROP, decimal.precision().to_string()));
            props.push((SCALE_PROP, decimal.scale().to_string()));
        }
        props
    }

    /// Write this logical type's properties onto `schema`.
    ///
    /// Properties already present with the same value are left alone; a
    /// different existing value fails with `PropertyConflict` and nothing is
    /// written.
    pub fn attach_to(&self, schema: &mut dyn SchemaNodeMut) -> Result<(), LogicalTypeError> {
        let props = self.props();
        for (key, value) in &props {
            if let Some(existing) = schema.prop(key)
                && existing != value
            {
                return Err(LogicalTypeError::PropertyConflict {
                    logical_type: self.name().to_string(),
                    property: key.to_string(),
                    existing: existing.to_string(),
                });
            }
        }
        for (key, value) in props {
            schema.set_prop(key, value);
        }
        Ok(())
    }
}

impl From<DecimalType> for LogicalType {
    fn from(value: DecimalType) -> Self {
        LogicalType::Decimal(value)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Decimal(decimal) => {
                write!(f, "decimal({}, {})", decimal.precision(), decimal.scale())
            }
            other => f.write_str(other.name()),
        }
    }
}
