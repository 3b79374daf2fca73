use ring::digest::{Context, SHA256};

use crate::error::{MinerError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

/// Current unix time in seconds, as the 32-bit header field.
pub fn current_timestamp() -> Result<u32> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MinerError::Crypto(format!("System time error: {e}")))?
        .as_secs();

    // The header timestamp is a fixed-width 32-bit field
    if seconds > u32::MAX as u64 {
        return Err(MinerError::EncodingOverflow(
            "Timestamp does not fit in 32 bits".to_string(),
        ));
    }

    Ok(seconds as u32)
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn double_sha256_digest(data: &[u8]) -> Vec<u8> {
    sha256_digest(sha256_digest(data).as_slice())
}

/// Hex decoding with whole-pair semantics: bytes are consumed two hex
/// digits at a time and decoding stops at the first incomplete or invalid
/// pair. A dangling trailing digit is dropped rather than rejected.
///
/// The header hash depends on this exact behavior when numeric fields are
/// rendered through their decimal string form.
pub fn lenient_hex_decode(text: &str) -> Vec<u8> {
    let chars = text.as_bytes();
    let mut bytes = Vec::with_capacity(chars.len() / 2);
    let mut i = 0;
    while i + 1 < chars.len() {
        let high = (chars[i] as char).to_digit(16);
        let low = (chars[i + 1] as char).to_digit(16);
        match (high, low) {
            (Some(h), Some(l)) => bytes.push(((h << 4) | l) as u8),
            _ => break,
        }
        i += 2;
    }
    bytes
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| MinerError::Config(format!("Invalid base58 encoding: {e}")))
}

fn checksum(payload: &[u8]) -> Vec<u8> {
    double_sha256_digest(payload)[0..ADDRESS_CHECK_SUM_LEN].to_vec()
}

/// Validate a base58check payout address (version byte + payload + checksum).
pub fn validate_payout_address(address: &str) -> bool {
    let payload = match base58_decode(address) {
        Ok(payload) => payload,
        Err(_) => return false,
    };

    if payload.len() < ADDRESS_CHECK_SUM_LEN + 1 {
        return false;
    }

    let actual_checksum = &payload[payload.len() - ADDRESS_CHECK_SUM_LEN..];
    let target_checksum = checksum(&payload[..payload.len() - ADDRESS_CHECK_SUM_LEN]);
    actual_checksum.eq(target_checksum.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_digest_length() {
        let digest = sha256_digest(b"blockforge");
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn test_double_sha256_differs_from_single() {
        let single = sha256_digest(b"data");
        let double = double_sha256_digest(b"data");
        assert_eq!(double, sha256_digest(&single));
        assert_ne!(single, double);
    }

    #[test]
    fn test_lenient_hex_decode_even() {
        assert_eq!(lenient_hex_decode("00ff10"), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_lenient_hex_decode_dangling_digit() {
        // "123" decodes the pair "12" and drops the dangling "3"
        assert_eq!(lenient_hex_decode("123"), vec![0x12]);
        assert_eq!(lenient_hex_decode("1"), Vec::<u8>::new());
    }

    #[test]
    fn test_lenient_hex_decode_stops_at_invalid_pair() {
        assert_eq!(lenient_hex_decode("ab zz cd"), vec![0xab]);
        assert_eq!(lenient_hex_decode("zz"), Vec::<u8>::new());
    }

    #[test]
    fn test_validate_payout_address() {
        // Valid base58check p2pkh address
        assert!(validate_payout_address("19oMRmCWMYuhnP5W61ABrjjxHc6RphZh11"));
        // Corrupted checksum
        assert!(!validate_payout_address("19oMRmCWMYuhnP5W61ABrjjxHc6RphZh12"));
        // Not base58 at all
        assert!(!validate_payout_address("0OIl"));
        // Too short to carry a checksum
        assert!(!validate_payout_address("1"));
    }
}
