//! Error types for logical type registration, resolution, and validation.

/// Error returned by registry, resolver, descriptor, and codec operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicalTypeError {
    /// A factory was registered under an unusable name.
    #[error("invalid logical type registration: {detail}")]
    InvalidRegistration { detail: String },

    /// A property required to build the descriptor is absent from the schema.
    #[error("invalid {logical_type}: missing {property}")]
    MissingRequiredProperty {
        logical_type: String,
        property: String,
    },

    /// A descriptor parameter is out of its valid domain.
    #[error("invalid {logical_type} {parameter}: {detail}")]
    InvalidParameter {
        logical_type: String,
        parameter: String,
        detail: String,
    },

    /// The schema's physical type cannot carry the logical type.
    #[error("logical type {logical_type} cannot be used with an underlying {physical_type} type")]
    IncompatiblePhysicalType {
        logical_type: String,
        physical_type: String,
    },

    /// Attaching would overwrite a property the schema already carries.
    #[error("{property} is already set to '{existing}', cannot attach {logical_type}")]
    PropertyConflict {
        logical_type: String,
        property: String,
        existing: String,
    },

    /// The schema names a logical type with no registered factory.
    #[error("unknown logical type: {name}")]
    UnknownLogicalType { name: String },

    /// A value does not fit the requested representation.
    #[error("value out of range: {detail}")]
    ValueOutOfRange { detail: String },
}

impl LogicalTypeError {
    pub(crate) fn invalid_parameter(
        logical_type: &str,
        parameter: &str,
        detail: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            logical_type: logical_type.to_string(),
            parameter: parameter.to_string(),
            detail: detail.into(),
        }
    }
}
