//! Conversion between decimal values and big-endian two's-complement bytes.

use bytes::{BufMut, Bytes, BytesMut};
use logical_types_core::LogicalTypeError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Widest unscaled integer handled by the codec (`i128`).
const MAX_UNSCALED_BYTES: usize = 16;

/// Largest scale [`Decimal`] can hold.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Encode `value` as a big-endian two's-complement unscaled integer at `scale`.
///
/// The value is first rounded to `scale` fractional digits (half away from
/// zero). Without `target_len` the shortest encoding is produced; with it the
/// encoding is sign-extended to exactly `target_len` bytes.
pub fn encode_decimal(
    value: &Decimal,
    scale: u32,
    target_len: Option<usize>,
) -> Result<Bytes, LogicalTypeError> {
    let unscaled = unscaled_value(value, scale)?;
    encode_unscaled(unscaled, target_len)
}

/// Decode `bytes` as one big-endian two's-complement integer divided by `10^scale`.
///
/// An empty slice decodes to zero. Scales above [`MAX_DECIMAL_SCALE`] are
/// accepted when the digits past that scale are all zero.
pub fn decode_decimal(bytes: &[u8], scale: u32) -> Result<Decimal, LogicalTypeError> {
    let (unscaled, scale) = drop_trailing_zeros(decode_unscaled(bytes)?, scale);
    Decimal::try_from_i128_with_scale(unscaled, scale).map_err(|e| {
        LogicalTypeError::ValueOutOfRange {
            detail: format!("{unscaled} at scale {scale} is not representable: {e}"),
        }
    })
}

/// `value * 10^scale`, rounded to an integer.
pub(crate) fn unscaled_value(value: &Decimal, scale: u32) -> Result<i128, LogicalTypeError> {
    let rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    let shift = scale - rounded.scale();
    10i128
        .checked_pow(shift)
        .and_then(|factor| rounded.mantissa().checked_mul(factor))
        .ok_or_else(|| LogicalTypeError::ValueOutOfRange {
            detail: format!("{value} at scale {scale} exceeds {MAX_UNSCALED_BYTES} bytes"),
        })
}

/// Lower `scale` toward [`MAX_DECIMAL_SCALE`] while the dropped digit is zero.
fn drop_trailing_zeros(mut unscaled: i128, mut scale: u32) -> (i128, u32) {
    while scale > MAX_DECIMAL_SCALE && unscaled % 10 == 0 {
        unscaled /= 10;
        scale -= 1;
    }
    (unscaled, scale)
}

pub(crate) fn digit_count(unscaled: i128) -> u32 {
    unscaled.unsigned_abs().checked_ilog10().map_or(1, |d| d + 1)
}

fn encode_unscaled(unscaled: i128, target_len: Option<usize>) -> Result<Bytes, LogicalTypeError> {
    let full = unscaled.to_be_bytes();
    let minimal = &full[redundant_sign_bytes(&full)..];
    let len = match target_len {
        None => minimal.len(),
        Some(len) if len >= minimal.len() => len,
        Some(len) => {
            return Err(LogicalTypeError::ValueOutOfRange {
                detail: format!(
                    "unscaled value {unscaled} needs {} bytes, target length is {len}",
                    minimal.len()
                ),
            });
        }
    };

    let sign = if unscaled < 0 { 0xFF } else { 0x00 };
    let mut out = BytesMut::with_capacity(len);
    out.put_bytes(sign, len - minimal.len());
    out.put_slice(minimal);
    Ok(out.freeze())
}

/// Number of leading bytes that only repeat the sign carried by the byte after them.
fn redundant_sign_bytes(bytes: &[u8]) -> usize {
    bytes
        .windows(2)
        .take_while(|pair| {
            (pair[0] == 0x00 && pair[1] & 0x80 == 0) || (pair[0] == 0xFF && pair[1] & 0x80 != 0)
        })
        .count()
}

fn decode_unscaled(bytes: &[u8]) -> Result<i128, LogicalTypeError> {
    let Some(first) = bytes.first() else {
        return Ok(0);
    };
    let sign = if first & 0x80 != 0 { 0xFF } else { 0x00 };

    // Bytes beyond the i128 width must be pure sign extension.
    let excess = bytes.len().saturating_sub(MAX_UNSCALED_BYTES);
    let (head, tail) = bytes.split_at(excess);
    let tail_sign = if tail[0] & 0x80 != 0 { 0xFF } else { 0x00 };
    if head.iter().any(|&b| b != sign) || (excess > 0 && tail_sign != sign) {
        return Err(LogicalTypeError::ValueOutOfRange {
            detail: format!(
                "{}-byte unscaled value exceeds {MAX_UNSCALED_BYTES} bytes",
                bytes.len()
            ),
        });
    }

    let mut buf = [sign; MAX_UNSCALED_BYTES];
    buf[MAX_UNSCALED_BYTES - tail.len()..].copy_from_slice(tail);
    Ok(i128::from_be_bytes(buf))
}
