//! Deterministic string hashing and alphabetic identifiers.
//!
//! Display names and runtime-variable names embed a short identifier derived
//! from a 32-bit hash. The hash scans UTF-16 code units from the last to the
//! first, multiplying by 33 and XOR-ing each unit in; the scan direction and
//! the code-unit encoding are part of the output contract, since changing
//! either changes every generated class name.
//!
//! No collision resolution is performed.

/// Default seed for [`hash`].
pub const DEFAULT_SEED: u32 = 5381;

const ALPHABET_LEN: u32 = 52;

/// Hashes `input` starting from `seed`.
///
/// ```rust
/// use acss::hash::{hash, DEFAULT_SEED};
///
/// assert_eq!(hash(DEFAULT_SEED, ""), DEFAULT_SEED);
/// assert_eq!(hash(DEFAULT_SEED, "a"), 177_604);
/// ```
pub fn hash(seed: u32, input: &str) -> u32 {
    let units: Vec<u16> = input.encode_utf16().collect();
    units
        .iter()
        .rev()
        .fold(seed, |h, &unit| h.wrapping_mul(33) ^ u32::from(unit))
}

/// Encodes `code` in base 52 using `a-z` then `A-Z`, most significant first.
///
/// ```rust
/// use acss::hash::to_identifier;
///
/// assert_eq!(to_identifier(0), "a");
/// assert_eq!(to_identifier(51), "Z");
/// assert_eq!(to_identifier(52), "ba");
/// ```
pub fn to_identifier(code: u32) -> String {
    let mut digits = Vec::new();
    let mut x = code;
    loop {
        digits.push(alphabetic_char(x % ALPHABET_LEN));
        x /= ALPHABET_LEN;
        if x == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Hashes `input` and encodes the result as an identifier.
pub fn identifier(seed: u32, input: &str) -> String {
    to_identifier(hash(seed, input))
}

fn alphabetic_char(code: u32) -> char {
    // code < 52, so both branches stay within ASCII letters
    let byte = if code < 26 { code + 97 } else { code + 39 };
    char::from(byte as u8)
}
