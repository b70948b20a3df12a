//! Lenient Base32 decoding for TOTP shared secrets
//!
//! Authenticator apps and provisioning pages reformat secrets freely
//! (spaces every four characters, lowercase, trailing `=`), so decoding
//! never fails:
//! 1. Remove all whitespace characters
//! 2. Uppercase
//! 3. Accumulate 5 bits per RFC 4648 alphabet character, emitting a byte
//!    whenever 8 or more bits are buffered
//!
//! Padding and any character outside the alphabet are skipped. Leftover
//! bits that do not fill a byte are discarded.

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PADDING: char = '=';

/// Clean whitespace from input string and uppercase it
fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Index of an uppercase character in the RFC 4648 alphabet
fn symbol_value(c: char) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|&symbol| char::from(symbol) == c)
        .map(|index| index as u8)
}

/// Decode a Base32 string to bytes, skipping anything that is not a symbol
pub fn decode_base32(input: &str) -> Vec<u8> {
    let cleaned = clean(input);
    let mut bytes = Vec::with_capacity(cleaned.len() * 5 / 8);

    // At most 12 bits are ever buffered: 7 leftover + 5 new
    let mut buffer: u32 = 0;
    let mut buffered_bits: u32 = 0;

    for value in cleaned.chars().filter_map(symbol_value) {
        buffer = ((buffer << 5) | u32::from(value)) & 0xFFF;
        buffered_bits += 5;

        if buffered_bits >= 8 {
            buffered_bits -= 8;
            bytes.push((buffer >> buffered_bits) as u8);
        }
    }

    bytes
}

/// Count characters that [`decode_base32`] drops without a trace
///
/// Whitespace and `=` padding are expected noise and are not counted.
pub fn skipped_characters(input: &str) -> usize {
    clean(input)
        .chars()
        .filter(|&c| c != PADDING && symbol_value(c).is_none())
        .count()
}

/// Canonical form of a secret: no whitespace, uppercase, no trailing padding
pub fn normalize_secret(input: &str) -> String {
    clean(input).trim_end_matches(PADDING).to_string()
}
