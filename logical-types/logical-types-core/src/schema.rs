//! Host-facing schema node interface and a minimal concrete node.

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

/// Property key selecting the logical type of a schema node.
pub const LOGICAL_TYPE_PROP: &str = "logicalType";

/// Underlying physical type of a schema node, independent of any logical annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    Null,
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    Float,
    Double,
    /// Variable-length byte sequence.
    Bytes,
    String,
    /// Fixed-length byte sequence of the given size.
    Fixed(usize),
    Record,
    Enum,
    Array,
    Map,
    Union,
}

impl PhysicalType {
    pub fn type_name(&self) -> &'static str {
        match self {
            PhysicalType::Null => "null",
            PhysicalType::Boolean => "boolean",
            PhysicalType::Int => "int",
            PhysicalType::Long => "long",
            PhysicalType::Float => "float",
            PhysicalType::Double => "double",
            PhysicalType::Bytes => "bytes",
            PhysicalType::String => "string",
            PhysicalType::Fixed(_) => "fixed",
            PhysicalType::Record => "record",
            PhysicalType::Enum => "enum",
            PhysicalType::Array => "array",
            PhysicalType::Map => "map",
            PhysicalType::Union => "union",
        }
    }

    /// Parse a type name. `fixed` takes its size from `fixed_size` and yields
    /// `None` without one; unrecognized names yield `None`.
    pub fn from_type_name(name: &str, fixed_size: Option<usize>) -> Option<Self> {
        Some(match name {
            "null" => PhysicalType::Null,
            "boolean" => PhysicalType::Boolean,
            "int" => PhysicalType::Int,
            "long" => PhysicalType::Long,
            "float" => PhysicalType::Float,
            "double" => PhysicalType::Double,
            "bytes" => PhysicalType::Bytes,
            "string" => PhysicalType::String,
            "fixed" => PhysicalType::Fixed(fixed_size?),
            "record" => PhysicalType::Record,
            "enum" => PhysicalType::Enum,
            "array" => PhysicalType::Array,
            "map" => PhysicalType::Map,
            "union" => PhysicalType::Union,
            _ => return None,
        })
    }
}

impl Display for PhysicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalType::Fixed(size) => write!(f, "fixed({size})"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Read-only view of a schema node, implemented by the schema host.
pub trait SchemaNode {
    /// Return the string value of property `name`, if present.
    fn prop(&self, name: &str) -> Option<&str>;

    fn has_prop(&self, name: &str) -> bool {
        self.prop(name).is_some()
    }

    fn physical_type(&self) -> PhysicalType;
}

/// Schema node that accepts new properties.
pub trait SchemaNodeMut: SchemaNode {
    fn set_prop(&mut self, name: &str, value: String);
}

/// Minimal schema node: a physical type plus a string property bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    pub physical_type: PhysicalType,
    pub props: BTreeMap<String, String>,
}

impl SchemaDef {
    pub fn new(physical_type: PhysicalType) -> Self {
        Self {
            physical_type,
            props: BTreeMap::new(),
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }
}

impl SchemaNode for SchemaDef {
    fn prop(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    fn physical_type(&self) -> PhysicalType {
        self.physical_type
    }
}

impl SchemaNodeMut for SchemaDef {
    fn set_prop(&mut self, name: &str, value: String) {
        self.props.insert(name.to_string(), value);
    }
}
