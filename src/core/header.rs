use crate::error::{MinerError, Result};
use crate::utils::{double_sha256_digest, lenient_hex_decode};
use data_encoding::HEXLOWER;

/// Length of the canonical textual header form:
/// 0x + 8 (version) + 64 (prev hash) + 64 (merkle root)
/// + 0x + 8 (timestamp) + 8 (bits) + 0x + 8 (nonce)
pub const ENCODED_HEADER_LEN: usize = 166;

/// Canonical block header
///
/// Constructed once per block attempt with nonce 0; the nonce is the only
/// field mutated, monotonically, during the proof-of-work search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    version: u32,
    prev_block_hash: String,
    merkle_root: String,
    timestamp: u32,
    bits: u32,
    nonce: u32,
}

impl BlockHeader {
    pub fn new(
        version: u32,
        prev_block_hash: &str,
        merkle_root: &str,
        timestamp: u32,
        bits: u32,
    ) -> BlockHeader {
        BlockHeader {
            version,
            prev_block_hash: prev_block_hash.to_string(),
            merkle_root: merkle_root.to_string(),
            timestamp,
            bits,
            nonce: 0,
        }
    }

    pub fn get_version(&self) -> u32 {
        self.version
    }

    pub fn get_prev_block_hash(&self) -> &str {
        self.prev_block_hash.as_str()
    }

    pub fn get_merkle_root(&self) -> &str {
        self.merkle_root.as_str()
    }

    pub fn get_timestamp(&self) -> u32 {
        self.timestamp
    }

    pub fn get_bits(&self) -> u32 {
        self.bits
    }

    pub fn get_nonce(&self) -> u32 {
        self.nonce
    }

    pub fn set_nonce(&mut self, nonce: u32) {
        self.nonce = nonce;
    }

    /// Canonical fixed-width textual form.
    ///
    /// Numeric fields render as fixed-width lowercase hex; hash fields are
    /// space-padded to 64 characters and never truncated. An oversized hash
    /// string is a caller error.
    pub fn encode(&self) -> Result<String> {
        if self.prev_block_hash.len() > 64 {
            return Err(MinerError::EncodingOverflow(format!(
                "Previous block hash is {} chars, limit is 64",
                self.prev_block_hash.len()
            )));
        }
        if self.merkle_root.len() > 64 {
            return Err(MinerError::EncodingOverflow(format!(
                "Merkle root is {} chars, limit is 64",
                self.merkle_root.len()
            )));
        }

        Ok(format!(
            "0x{:08x}{:<64}{:<64}0x{:08x}{:08x}0x{:08x}",
            self.version,
            self.prev_block_hash,
            self.merkle_root,
            self.timestamp,
            self.bits,
            self.nonce
        ))
    }

    /// Recover a header from its canonical textual form.
    pub fn decode(text: &str) -> Result<BlockHeader> {
        if !text.is_ascii() || text.len() != ENCODED_HEADER_LEN {
            return Err(MinerError::Serialization(format!(
                "Encoded header must be {ENCODED_HEADER_LEN} ASCII chars, got {}",
                text.len()
            )));
        }
        if &text[0..2] != "0x" || &text[138..140] != "0x" || &text[156..158] != "0x" {
            return Err(MinerError::Serialization(
                "Encoded header is missing a 0x field marker".to_string(),
            ));
        }

        let parse_u32 = |field: &str, name: &str| {
            u32::from_str_radix(field, 16).map_err(|e| {
                MinerError::Serialization(format!("Invalid hex in header {name}: {e}"))
            })
        };

        Ok(BlockHeader {
            version: parse_u32(&text[2..10], "version")?,
            prev_block_hash: text[10..74].trim_end().to_string(),
            merkle_root: text[74..138].trim_end().to_string(),
            timestamp: parse_u32(&text[140..148], "timestamp")?,
            bits: parse_u32(&text[148..156], "bits")?,
            nonce: parse_u32(&text[158..166], "nonce")?,
        })
    }

    /// Double-SHA-256 digest of the header, as a lowercase hex string.
    ///
    /// Field bytes follow a fixed convention: numeric fields contribute
    /// their decimal string interpreted as hex pairs, hash fields their hex
    /// decoding, both with lenient whole-pair semantics. The convention is
    /// load-bearing for reproducibility and must not be "corrected" to a
    /// binary layout.
    pub fn hash(&self) -> String {
        let mut buffer = decimal_hex_bytes(self.version);
        buffer.extend(lenient_hex_decode(self.prev_block_hash.as_str()));
        buffer.extend(lenient_hex_decode(self.merkle_root.as_str()));
        buffer.extend(decimal_hex_bytes(self.timestamp));
        buffer.extend(decimal_hex_bytes(self.bits));
        buffer.extend(decimal_hex_bytes(self.nonce));

        HEXLOWER.encode(double_sha256_digest(buffer.as_slice()).as_slice())
    }
}

// Decimal string form of the value, interpreted as hex pairs.
fn decimal_hex_bytes(value: u32) -> Vec<u8> {
    lenient_hex_decode(value.to_string().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREV: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    fn sample_header() -> BlockHeader {
        BlockHeader::new(1, PREV, "ab".repeat(32).as_str(), 1_700_000_000, 0x1f00ffff)
    }

    #[test]
    fn test_new_header_starts_at_nonce_zero() {
        assert_eq!(sample_header().get_nonce(), 0);
    }

    #[test]
    fn test_encode_layout() {
        let mut header = BlockHeader::new(1, PREV, "abcd", 0x65432100, 0x1f00ffff);
        header.set_nonce(0x0000002a);
        let encoded = header.encode().unwrap();

        assert_eq!(encoded.len(), ENCODED_HEADER_LEN);
        assert_eq!(&encoded[0..10], "0x00000001");
        assert_eq!(&encoded[10..74], PREV);
        // Short merkle root is space-padded to 64 chars, never truncated
        assert_eq!(&encoded[74..78], "abcd");
        assert_eq!(&encoded[78..138], " ".repeat(60));
        assert_eq!(&encoded[138..148], "0x65432100");
        assert_eq!(&encoded[148..156], "1f00ffff");
        assert_eq!(&encoded[156..166], "0x0000002a");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut header = sample_header();
        header.set_nonce(417);
        let decoded = BlockHeader::decode(header.encode().unwrap().as_str()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_round_trip_with_short_merkle_root() {
        let header = BlockHeader::new(7, PREV, "abcd", 42, 0x0000ffff);
        let decoded = BlockHeader::decode(header.encode().unwrap().as_str()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_oversized_hash_field_is_an_encoding_overflow() {
        let header = BlockHeader::new(1, "0".repeat(65).as_str(), "ab", 0, 0);
        assert!(matches!(
            header.encode(),
            Err(MinerError::EncodingOverflow(_))
        ));

        let header = BlockHeader::new(1, PREV, "0".repeat(70).as_str(), 0, 0);
        assert!(matches!(
            header.encode(),
            Err(MinerError::EncodingOverflow(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_length_and_markers() {
        assert!(BlockHeader::decode("0x0001").is_err());

        let mut broken = sample_header().encode().unwrap();
        broken.replace_range(0..2, "zz");
        assert!(BlockHeader::decode(broken.as_str()).is_err());
    }

    #[test]
    fn test_hash_is_hex_and_deterministic() {
        let header = sample_header();
        let first = header.hash();
        assert_eq!(first, header.hash());
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_nonce_changes_the_hash() {
        let mut header = sample_header();
        let before = header.hash();
        header.set_nonce(1);
        assert_ne!(before, header.hash());
    }

    #[test]
    fn test_hash_field_byte_convention() {
        let header = sample_header();

        // The same buffer assembled by hand through the documented
        // decimal-as-hex convention must produce the same digest
        let mut buffer = lenient_hex_decode("1"); // version 1 -> decimal "1" -> no whole pair
        assert!(buffer.is_empty());
        buffer.extend(lenient_hex_decode(PREV));
        buffer.extend(lenient_hex_decode("ab".repeat(32).as_str()));
        buffer.extend(lenient_hex_decode("1700000000"));
        buffer.extend(lenient_hex_decode(format!("{}", 0x1f00ffffu32).as_str()));
        buffer.extend(lenient_hex_decode("0"));

        let expected = HEXLOWER.encode(double_sha256_digest(buffer.as_slice()).as_slice());
        assert_eq!(header.hash(), expected);
    }
}
