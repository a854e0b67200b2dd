//! Byte codec for the `decimal` logical type.
//!
//! Values are [`rust_decimal::Decimal`]; on the wire they are the unscaled
//! integer (`value * 10^scale`) as big-endian two's-complement bytes. The
//! whole byte sequence is one signed integer, so `[0xFF]` is `-1`.
//!
//! [`encode_decimal`] / [`decode_decimal`] take the scale explicitly;
//! [`DecimalCodec`] binds them to a [`DecimalType`] descriptor and its backing
//! physical type.

mod codec;

use bytes::Bytes;
use logical_types_core::{DecimalType, LogicalTypeError, PhysicalType};
use rust_decimal::Decimal;

pub use codec::{decode_decimal, encode_decimal};

/// Encode/decode decimal values using a descriptor's precision and scale.
pub trait DecimalCodec {
    /// Encode `value` for a schema whose physical type is `physical`.
    ///
    /// `fixed(N)` produces exactly `N` bytes; `bytes` produces the shortest
    /// encoding. Values with more unscaled digits than the precision fail
    /// with `ValueOutOfRange`.
    fn encode(&self, value: &Decimal, physical: PhysicalType) -> Result<Bytes, LogicalTypeError>;

    fn decode(&self, bytes: &[u8]) -> Result<Decimal, LogicalTypeError>;
}

impl DecimalCodec for DecimalType {
    fn encode(&self, value: &Decimal, physical: PhysicalType) -> Result<Bytes, LogicalTypeError> {
        self.validate_physical(physical)?;
        let target_len = match physical {
            PhysicalType::Fixed(size) => Some(size),
            _ => None,
        };

        let unscaled = codec::unscaled_value(value, self.scale())?;
        let digits = codec::digit_count(unscaled);
        if digits > self.precision() {
            return Err(LogicalTypeError::ValueOutOfRange {
                detail: format!(
                    "{value} has {digits} digits at scale {}, precision is {}",
                    self.scale(),
                    self.precision()
                ),
            });
        }
        encode_decimal(value, self.scale(), target_len)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Decimal, LogicalTypeError> {
        decode_decimal(bytes, self.scale())
    }
}
