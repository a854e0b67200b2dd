use anyhow::{Context, Result, bail};

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse a hex string, ignoring an optional `0x` prefix and whitespace.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .trim()
        .trim_start_matches("0x")
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if !digits.is_ascii() {
        bail!("hex input contains non-ASCII characters: '{text}'");
    }
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits: '{text}'");
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair)?;
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte '{pair}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_pairs() {
        assert_eq!(to_hex(&[0x00, 0x12, 0xd6, 0x87]), "0012d687");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn parses_with_prefix_and_spaces() {
        assert_eq!(from_hex("0xff 80").unwrap(), vec![0xff, 0x80]);
    }

    #[test]
    fn rejects_odd_length() {
        assert!(from_hex("abc").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(from_hex("zz").is_err());
    }

    #[test]
    fn rejects_non_ascii_input() {
        assert!(from_hex("aéa").is_err());
        assert!(from_hex("é0").is_err());
    }
}
