use logical_types_core::{
    DecimalType, LogicalType, LogicalTypeError, PhysicalType, SchemaDef, SchemaNode,
};

fn node(physical: PhysicalType) -> SchemaDef {
    SchemaDef::new(physical)
}

#[test]
fn parameterless_kinds_accept_only_their_physical_type() {
    let cases = [
        (LogicalType::Uuid, PhysicalType::String),
        (LogicalType::Date, PhysicalType::Int),
        (LogicalType::TimeMillis, PhysicalType::Int),
        (LogicalType::TimeMicros, PhysicalType::Long),
        (LogicalType::TimestampMillis, PhysicalType::Long),
        (LogicalType::TimestampMicros, PhysicalType::Long),
    ];
    let all = [
        PhysicalType::Null,
        PhysicalType::Boolean,
        PhysicalType::Int,
        PhysicalType::Long,
        PhysicalType::Float,
        PhysicalType::Double,
        PhysicalType::Bytes,
        PhysicalType::String,
        PhysicalType::Fixed(16),
        PhysicalType::Record,
    ];

    for (logical_type, accepted) in cases {
        for physical in all {
            let result = logical_type.validate(&node(physical));
            if physical == accepted {
                assert!(result.is_ok(), "{logical_type} should accept {physical}");
            } else {
                assert!(
                    matches!(result, Err(LogicalTypeError::IncompatiblePhysicalType { .. })),
                    "{logical_type} should reject {physical}"
                );
            }
        }
    }
}

#[test]
fn incompatible_error_names_both_types() {
    let err = LogicalType::TimestampMillis
        .validate(&node(PhysicalType::Int))
        .unwrap_err();
    assert_eq!(
        err,
        LogicalTypeError::IncompatiblePhysicalType {
            logical_type: "timestamp-millis".to_string(),
            physical_type: "int".to_string(),
        }
    );
    assert!(err.to_string().contains("timestamp-millis"));
}

#[test]
fn unknown_kind_accepts_any_physical_type() {
    let custom = LogicalType::Unknown("geo-point".to_string());
    assert!(custom.validate(&node(PhysicalType::Record)).is_ok());
    assert!(custom.validate(&node(PhysicalType::Int)).is_ok());
    assert_eq!(custom.name(), "geo-point");
}

#[test]
fn decimal_validate_checks_backing_and_fixed_capacity() {
    let decimal = LogicalType::Decimal(DecimalType::new(12, 0).unwrap());

    assert!(decimal.validate(&node(PhysicalType::Bytes)).is_ok());
    assert!(decimal.validate(&node(PhysicalType::Fixed(8))).is_ok());
    assert!(matches!(
        decimal.validate(&node(PhysicalType::Fixed(4))),
        Err(LogicalTypeError::InvalidParameter { .. })
    ));
    assert!(matches!(
        decimal.validate(&node(PhysicalType::Long)),
        Err(LogicalTypeError::IncompatiblePhysicalType { .. })
    ));
}

#[test]
fn parameterless_lookup_by_name() {
    assert_eq!(LogicalType::parameterless("date"), Some(LogicalType::Date));
    assert_eq!(
        LogicalType::parameterless("timestamp-micros"),
        Some(LogicalType::TimestampMicros)
    );
    assert_eq!(LogicalType::parameterless("decimal"), None);
    assert_eq!(LogicalType::parameterless("Date"), None);
}

#[test]
fn display_includes_decimal_parameters() {
    let decimal = LogicalType::from(DecimalType::new(9, 2).unwrap());
    assert_eq!(decimal.to_string(), "decimal(9, 2)");
    assert_eq!(LogicalType::TimeMicros.to_string(), "time-micros");
}

#[test]
fn attach_writes_logical_type_property() {
    let mut schema = node(PhysicalType::Int);
    LogicalType::Date.attach_to(&mut schema).unwrap();

    assert_eq!(schema.prop("logicalType"), Some("date"));
    assert_eq!(schema.props.len(), 1);
}

#[test]
fn attach_writes_decimal_parameters() {
    let mut schema = node(PhysicalType::Bytes);
    LogicalType::Decimal(DecimalType::new(9, 2).unwrap())
        .attach_to(&mut schema)
        .unwrap();

    assert_eq!(schema.prop("logicalType"), Some("decimal"));
    assert_eq!(schema.prop("precision"), Some("9"));
    assert_eq!(schema.prop("scale"), Some("2"));
}

#[test]
fn attach_is_idempotent_for_matching_properties() {
    let mut schema = node(PhysicalType::Bytes);
    let decimal = LogicalType::Decimal(DecimalType::new(9, 2).unwrap());
    decimal.attach_to(&mut schema).unwrap();
    let once = schema.clone();

    decimal.attach_to(&mut schema).unwrap();
    assert_eq!(schema, once);
}

#[test]
fn attach_conflicting_logical_type_fails_without_writing() {
    let mut schema = node(PhysicalType::Long).with_prop("logicalType", "timestamp-millis");
    let before = schema.clone();

    let err = LogicalType::TimestampMicros
        .attach_to(&mut schema)
        .unwrap_err();
    assert_eq!(
        err,
        LogicalTypeError::PropertyConflict {
            logical_type: "timestamp-micros".to_string(),
            property: "logicalType".to_string(),
            existing: "timestamp-millis".to_string(),
        }
    );
    assert_eq!(schema, before);
}

#[test]
fn attach_conflicting_decimal_scale_fails() {
    let mut schema = node(PhysicalType::Bytes).with_prop("scale", "4");
    let err = LogicalType::Decimal(DecimalType::new(9, 2).unwrap())
        .attach_to(&mut schema)
        .unwrap_err();
    assert!(matches!(
        err,
        LogicalTypeError::PropertyConflict { ref property, .. } if property == "scale"
    ));
    assert!(!schema.has_prop("logicalType"));
}

#[test]
fn attach_keeps_unrelated_properties() {
    let mut schema = node(PhysicalType::String).with_prop("doc", "order id");
    LogicalType::Uuid.attach_to(&mut schema).unwrap();

    assert_eq!(schema.prop("doc"), Some("order id"));
    assert_eq!(schema.prop("logicalType"), Some("uuid"));
}
