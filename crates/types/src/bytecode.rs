use ethers::types::H256;
use sha2::{Digest, Sha256};

/// Version tag occupying the first two bytes of every bytecode hash.
const BYTECODE_HASH_VERSION: [u8; 2] = [1, 0];

const MAX_BYTECODE_LENGTH_IN_WORDS: usize = (1 << 16) - 1;
const MAX_BYTECODE_LENGTH_BYTES: usize = MAX_BYTECODE_LENGTH_IN_WORDS * 32;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InvalidBytecodeError {
    #[error("Bytecode too long: {0} bytes, while max {1} allowed")]
    BytecodeTooLong(usize, usize),
    #[error("Bytecode has even number of 32-byte words")]
    BytecodeLengthInWordsIsEven,
    #[error("Bytecode length is not divisible by 32")]
    BytecodeLengthIsNotDivisibleBy32,
}

pub fn validate_bytecode(code: &[u8]) -> Result<(), InvalidBytecodeError> {
    let bytecode_len = code.len();

    if bytecode_len > MAX_BYTECODE_LENGTH_BYTES {
        return Err(InvalidBytecodeError::BytecodeTooLong(
            bytecode_len,
            MAX_BYTECODE_LENGTH_BYTES,
        ));
    }

    if bytecode_len % 32 != 0 {
        return Err(InvalidBytecodeError::BytecodeLengthIsNotDivisibleBy32);
    }

    let bytecode_len_words = bytecode_len / 32;

    if bytecode_len_words % 2 == 0 {
        return Err(InvalidBytecodeError::BytecodeLengthInWordsIsEven);
    }

    Ok(())
}

/// Hashes the provided L2 bytecode into its canonical 32-byte form:
/// a 2-byte version tag, the big-endian length in 32-byte words, and
/// the tail of the SHA-256 digest of the bytecode.
pub fn hash_bytecode(code: &[u8]) -> Result<H256, InvalidBytecodeError> {
    validate_bytecode(code)?;

    let mut hasher = Sha256::new();
    hasher.update(code);
    let mut output: [u8; 32] = hasher.finalize().into();

    let len_in_words = (code.len() / 32) as u16;
    output[..2].copy_from_slice(&BYTECODE_HASH_VERSION);
    output[2..4].copy_from_slice(&len_in_words.to_be_bytes());

    Ok(H256(output))
}

pub fn bytecode_len_in_words(bytecode_hash: &H256) -> u16 {
    u16::from_be_bytes([bytecode_hash[2], bytecode_hash[3]])
}

pub fn bytecode_len_in_bytes(bytecode_hash: H256) -> usize {
    bytecode_len_in_words(&bytecode_hash) as usize * 32
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn hashing_rejects_malformed_bytecode() {
        assert_eq!(
            hash_bytecode(&[0xab; 33]).unwrap_err(),
            InvalidBytecodeError::BytecodeLengthIsNotDivisibleBy32
        );
        assert_eq!(
            hash_bytecode(&[0xab; 64]).unwrap_err(),
            InvalidBytecodeError::BytecodeLengthInWordsIsEven
        );
        // Zero words is even as well, so empty bytecode is rejected too.
        assert_eq!(
            hash_bytecode(&[]).unwrap_err(),
            InvalidBytecodeError::BytecodeLengthInWordsIsEven
        );
        assert_eq!(
            hash_bytecode(&vec![0; MAX_BYTECODE_LENGTH_BYTES + 32]).unwrap_err(),
            InvalidBytecodeError::BytecodeTooLong(
                MAX_BYTECODE_LENGTH_BYTES + 32,
                MAX_BYTECODE_LENGTH_BYTES
            )
        );
    }

    #[test]
    fn hash_layout_is_stable() {
        let hash = hash_bytecode(&[0; 32]).unwrap();
        assert_eq!(
            hash,
            H256::from_str("0x01000001f862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925")
                .unwrap()
        );

        let hash = hash_bytecode(&[0x11; 96]).unwrap();
        assert_eq!(
            hash,
            H256::from_str("0x01000003fd90e61d4f742a526bbebc7c3eee9573da8205b5c9c381c2ae06f3a0")
                .unwrap()
        );
    }

    #[test]
    fn word_count_is_recoverable_from_hash() {
        for words in [1_usize, 3, 255, 1023] {
            let hash = hash_bytecode(&vec![0xcd; words * 32]).unwrap();
            assert_eq!(hash[0], 1);
            assert_eq!(hash[1], 0);
            assert_eq!(bytecode_len_in_words(&hash) as usize, words);
            assert_eq!(bytecode_len_in_bytes(hash), words * 32);
        }
    }
}
