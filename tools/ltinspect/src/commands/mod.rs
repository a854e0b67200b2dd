pub mod decode;
pub mod encode;
pub mod max_precision;
pub mod resolve;

use anyhow::{Context, Result};
use logical_types_core::{DecimalType, LogicalTypeRegistry, ResolvePolicy, SchemaDef};

/// Resolve `schema` strictly and require a validated decimal descriptor.
fn resolve_decimal(schema: &SchemaDef) -> Result<DecimalType> {
    let logical_type = LogicalTypeRegistry::global()
        .resolve(schema, ResolvePolicy::Strict)?
        .context("schema has no logicalType")?;
    logical_type.validate(schema)?;
    logical_type
        .as_decimal()
        .copied()
        .with_context(|| format!("expected a decimal schema, found {logical_type}"))
}
