//! Logical type descriptors layered on schema physical types.
//!
//! This crate provides the [`SchemaNode`] interface consumed from the schema
//! host, the [`LogicalType`] descriptors with their physical-type rules, and
//! the [`LogicalTypeRegistry`] that resolves a schema's `logicalType`
//! annotation through registered factories. Byte encoding of decimal values
//! lives in `logical-types-decimal`.

mod builtin;
mod decimal;
mod error;
mod logical_type;
mod policy;
mod registry;
mod resolver;
mod schema;

pub use decimal::{DECIMAL, DecimalType, PRECISION_PROP, SCALE_PROP, max_precision_for_fixed};
pub use error::LogicalTypeError;
pub use logical_type::{
    DATE, LogicalType, TIME_MICROS, TIME_MILLIS, TIMESTAMP_MICROS, TIMESTAMP_MILLIS, UUID,
};
pub use policy::ResolvePolicy;
pub use registry::{LogicalTypeFactory, LogicalTypeRegistry, LogicalTypeRegistryBuilder};
pub use schema::{LOGICAL_TYPE_PROP, PhysicalType, SchemaDef, SchemaNode, SchemaNodeMut};
