//! Resolution of a schema node's `logicalType` annotation into a descriptor.

use tracing::trace;

use crate::{
    error::LogicalTypeError,
    logical_type::LogicalType,
    policy::ResolvePolicy,
    registry::LogicalTypeRegistry,
    schema::{LOGICAL_TYPE_PROP, SchemaNode},
};

impl LogicalTypeRegistry {
    /// Resolve the logical type declared on `schema`.
    ///
    /// Returns `Ok(None)` when the schema has no `logicalType` property, or
    /// when the name is unregistered and `policy` is
    /// [`Lenient`](ResolvePolicy::Lenient). Factory errors are returned as-is
    /// under either policy. The descriptor is not validated against the
    /// physical type; call [`LogicalType::validate`] for that.
    pub fn resolve(
        &self,
        schema: &dyn SchemaNode,
        policy: ResolvePolicy,
    ) -> Result<Option<LogicalType>, LogicalTypeError> {
        let Some(name) = schema.prop(LOGICAL_TYPE_PROP) else {
            return Ok(None);
        };

        match self.lookup(name) {
            Some(factory) => {
                let logical_type = factory.from_schema(schema)?;
                trace!(logical_type = name, resolved = %logical_type, "resolved logical type");
                Ok(Some(logical_type))
            }
            None => match policy {
                ResolvePolicy::Strict => Err(LogicalTypeError::UnknownLogicalType {
                    name: name.to_string(),
                }),
                ResolvePolicy::Lenient => {
                    trace!(logical_type = name, "ignoring unregistered logical type");
                    Ok(None)
                }
            },
        }
    }
}
