//! Hex encoding shared by the 160-bit identifier types.

use crate::error::AmmError;

/// Width of an address in bytes (160 bits).
pub const ADDRESS_LEN: usize = 20;

/// Parses `0x`-prefixed (or bare) hex into a 20-byte address.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; ADDRESS_LEN], AmmError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let mut out = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| AmmError::InvalidConfiguration("address must be 20 hex-encoded bytes"))?;
    Ok(out)
}

/// Renders an address as `0x` followed by 40 lowercase hex digits.
pub(crate) fn to_hex(bytes: &[u8; ADDRESS_LEN]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_prefix_and_bare() {
        let Ok(a) = parse_hex("0x0101010101010101010101010101010101010101") else {
            panic!("expected Ok");
        };
        let Ok(b) = parse_hex("0101010101010101010101010101010101010101") else {
            panic!("expected Ok");
        };
        assert_eq!(a, [1u8; ADDRESS_LEN]);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(parse_hex("0x0101").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(parse_hex("0xzz01010101010101010101010101010101010101").is_err());
    }

    #[test]
    fn render_is_lowercase_prefixed() {
        assert_eq!(
            to_hex(&[0xABu8; ADDRESS_LEN]),
            "0xabababababababababababababababababababab"
        );
    }
}
