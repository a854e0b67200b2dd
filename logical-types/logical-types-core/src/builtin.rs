//! Factories for the built-in logical types.

use std::sync::Arc;

use crate::{
    decimal::{DECIMAL, DecimalType},
    error::LogicalTypeError,
    logical_type::{
        DATE, LogicalType, TIME_MICROS, TIME_MILLIS, TIMESTAMP_MICROS, TIMESTAMP_MILLIS, UUID,
    },
    registry::LogicalTypeFactory,
    schema::SchemaNode,
};

/// Reads `precision` and `scale` from the schema.
struct DecimalFactory;

/// Returns the same parameterless descriptor for every schema.
struct ParameterlessFactory(LogicalType);

impl LogicalTypeFactory for DecimalFactory {
    fn from_schema(&self, schema: &dyn SchemaNode) -> Result<LogicalType, LogicalTypeError> {
        DecimalType::from_schema(schema).map(LogicalType::Decimal)
    }
}

impl LogicalTypeFactory for ParameterlessFactory {
    fn from_schema(&self, _schema: &dyn SchemaNode) -> Result<LogicalType, LogicalTypeError> {
        Ok(self.0.clone())
    }
}

pub(crate) fn builtin_factories() -> Vec<(&'static str, Arc<dyn LogicalTypeFactory>)> {
    let mut factories: Vec<(&'static str, Arc<dyn LogicalTypeFactory>)> =
        vec![(DECIMAL, Arc::new(DecimalFactory))];
    for name in [
        UUID,
        DATE,
        TIME_MILLIS,
        TIME_MICROS,
        TIMESTAMP_MILLIS,
        TIMESTAMP_MICROS,
    ] {
        if let Some(logical_type) = LogicalType::parameterless(name) {
            factories.push((name, Arc::new(ParameterlessFactory(logical_type))));
        }
    }
    factories
}
