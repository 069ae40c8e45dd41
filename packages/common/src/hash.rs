//! Keccak-256 hashing and 32-byte value helpers.
//!
//! The swap protocol identifies every locked transaction by the Keccak-256
//! digest of its preimage. This is the original Keccak padding as used on
//! EVM chains, NOT the NIST FIPS-202 SHA3 variant — the two produce
//! different digests for the same input.

use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

/// Compute the Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Interpret a message-supplied `Binary` as a fixed 32-byte value.
///
/// Returns `Err(actual_length)` when the payload is not exactly 32 bytes so
/// callers can surface their own error type.
pub fn to_bytes32(value: &Binary) -> Result<[u8; 32], usize> {
    value.as_slice().try_into().map_err(|_| value.len())
}

/// Render a 32-byte value as a 0x-prefixed hex string (for attributes).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string (with or without 0x prefix) into a 32-byte array.
pub fn hex_to_bytes32(s: &str) -> Result<[u8; 32], &'static str> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }
    let raw = hex::decode(s).map_err(|_| "Invalid hex character")?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&raw);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// keccak256 must use the original Keccak padding, not SHA3-256.
    /// keccak256("hello") = 0x1c8aff95...; sha3_256("hello") would start 0x3338be69.
    #[test]
    fn test_keccak256_known_vector() {
        let digest = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&digest),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    /// Empty input vector — keccak256("") is a well-known constant.
    #[test]
    fn test_keccak256_empty() {
        let digest = keccak256(b"");
        assert_eq!(
            bytes32_to_hex(&digest),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    /// A 32-byte all-zero preimage, the smallest value a swap can commit to.
    #[test]
    fn test_keccak256_zero_preimage() {
        let digest = keccak256(&[0u8; 32]);
        assert_eq!(
            bytes32_to_hex(&digest),
            "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = keccak256(b"roundtrip");
        let encoded = bytes32_to_hex(&original);
        assert_eq!(hex_to_bytes32(&encoded).unwrap(), original);
        assert_eq!(hex_to_bytes32(&encoded[2..]).unwrap(), original);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(hex_to_bytes32("0x1234").is_err());
        assert!(hex_to_bytes32(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_to_bytes32_length_check() {
        let ok = Binary::from(vec![7u8; 32]);
        assert_eq!(to_bytes32(&ok).unwrap(), [7u8; 32]);

        let short = Binary::from(vec![7u8; 31]);
        assert_eq!(to_bytes32(&short), Err(31));
    }
}
