use logical_types_core::{
    DecimalType, LogicalType, LogicalTypeError, LogicalTypeRegistry, PhysicalType,
    ResolvePolicy, SchemaDef,
};
use logical_types_decimal::DecimalCodec;
use rust_decimal::Decimal;

fn resolve_decimal(schema: &SchemaDef) -> DecimalType {
    let logical_type = LogicalTypeRegistry::with_builtins()
        .resolve(schema, ResolvePolicy::Strict)
        .unwrap()
        .expect("schema carries a logical type");
    logical_type.validate(schema).unwrap();
    *logical_type.as_decimal().expect("decimal logical type")
}

#[test]
fn bytes_decimal_schema_round_trips_value() {
    let schema = SchemaDef::new(PhysicalType::Bytes)
        .with_prop("logicalType", "decimal")
        .with_prop("precision", "9")
        .with_prop("scale", "2");
    let decimal = resolve_decimal(&schema);
    assert_eq!(decimal, DecimalType::new(9, 2).unwrap());

    let value = Decimal::new(1234567, 2);
    let bytes = decimal.encode(&value, schema.physical_type).unwrap();
    assert_eq!(bytes.as_ref(), &[0x12, 0xD6, 0x87]);
    assert_eq!(decimal.decode(&bytes).unwrap(), value);
}

#[test]
fn fixed_decimal_schema_pads_to_size() {
    let schema = SchemaDef::new(PhysicalType::Fixed(4))
        .with_prop("logicalType", "decimal")
        .with_prop("precision", "9")
        .with_prop("scale", "2");
    let decimal = resolve_decimal(&schema);

    let value = Decimal::new(-1234567, 2);
    let bytes = decimal.encode(&value, schema.physical_type).unwrap();
    assert_eq!(bytes.as_ref(), &[0xFF, 0xED, 0x29, 0x79]);
    assert_eq!(decimal.decode(&bytes).unwrap(), value);
}

#[test]
fn fixed_schema_too_small_for_precision_fails_validation() {
    let schema = SchemaDef::new(PhysicalType::Fixed(4))
        .with_prop("logicalType", "decimal")
        .with_prop("precision", "12");
    let logical_type = LogicalTypeRegistry::with_builtins()
        .resolve(&schema, ResolvePolicy::Strict)
        .unwrap()
        .unwrap();

    assert!(matches!(
        logical_type.validate(&schema),
        Err(LogicalTypeError::InvalidParameter { .. })
    ));

    let LogicalType::Decimal(decimal) = logical_type else {
        panic!("expected decimal");
    };
    assert!(matches!(
        decimal.encode(&Decimal::ONE, schema.physical_type),
        Err(LogicalTypeError::InvalidParameter { .. })
    ));
}

#[test]
fn encode_rejects_values_exceeding_precision() {
    let decimal = DecimalType::new(5, 2).unwrap();
    assert!(decimal
        .encode(&Decimal::new(99999, 2), PhysicalType::Bytes)
        .is_ok());
    assert!(matches!(
        decimal.encode(&Decimal::new(123456, 2), PhysicalType::Bytes),
        Err(LogicalTypeError::ValueOutOfRange { .. })
    ));
}

#[test]
fn encode_rejects_non_byte_backing() {
    let decimal = DecimalType::new(9, 2).unwrap();
    assert!(matches!(
        decimal.encode(&Decimal::ONE, PhysicalType::Long),
        Err(LogicalTypeError::IncompatiblePhysicalType { .. })
    ));
}

#[test]
fn decode_uses_descriptor_scale() {
    let decimal = DecimalType::new(4, 3).unwrap();
    assert_eq!(decimal.decode(&[0xFF]).unwrap(), Decimal::new(-1, 3));
}

#[test]
fn scale_beyond_decimal_range_round_trips_short_values() {
    let decimal = DecimalType::new(38, 30).unwrap();
    for value in [Decimal::ONE, Decimal::new(5, 1), Decimal::new(-5, 1)] {
        let bytes = decimal.encode(&value, PhysicalType::Bytes).unwrap();
        assert_eq!(decimal.decode(&bytes).unwrap(), value);
    }
}
