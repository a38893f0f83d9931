//! Short code generation.
//!
//! Codes are produced by drawing 128 random bits (a v4 UUID) and encoding the
//! value in base62. Uniqueness rests on the collision probability of two
//! random 128-bit draws plus the UNIQUE constraint the store enforces at
//! insert time; the service performs no re-check and no retry.

use uuid::Uuid;

/// Base62 alphabet, digit 0 first. Remainders 0-61 index into this table.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generates a random short code from 128 bits of entropy.
///
/// Output length varies with the magnitude of the drawn value, typically
/// 20-22 characters. No padding, no separators.
pub fn generate_code() -> String {
    base62_encode(Uuid::new_v4().as_u128())
}

/// Encodes an unsigned 128-bit integer in base62, most-significant digit first.
///
/// Zero encodes as `"0"`.
pub fn base62_encode(mut number: u128) -> String {
    if number == 0 {
        return (BASE62_ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(22);
    while number > 0 {
        digits.push(BASE62_ALPHABET[(number % 62) as usize]);
        number /= 62;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_not_empty() {
        assert!(!generate_code().is_empty());
    }

    #[test]
    fn test_generate_code_alphabet_only() {
        for _ in 0..10_000 {
            let code = generate_code();
            assert!(
                code.bytes().all(|b| BASE62_ALPHABET.contains(&b)),
                "code '{}' contains characters outside 0-9A-Za-z",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_no_collisions() {
        let mut codes = HashSet::new();

        for _ in 0..10_000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 10_000);
    }

    #[test]
    fn test_generate_code_length_for_128_bits() {
        // u128::MAX is 22 base62 digits; a random draw is almost never
        // shorter than 20.
        let code = generate_code();
        assert!(code.len() <= 22);
    }

    #[test]
    fn test_base62_encode_zero() {
        assert_eq!(base62_encode(0), "0");
    }

    #[test]
    fn test_base62_encode_single_digits() {
        assert_eq!(base62_encode(9), "9");
        assert_eq!(base62_encode(10), "A");
        assert_eq!(base62_encode(35), "Z");
        assert_eq!(base62_encode(36), "a");
        assert_eq!(base62_encode(61), "z");
    }

    #[test]
    fn test_base62_encode_carries() {
        assert_eq!(base62_encode(62), "10");
        assert_eq!(base62_encode(62 * 62), "100");
        assert_eq!(base62_encode(62 + 1), "11");
    }

    #[test]
    fn test_base62_encode_known_value() {
        // 1 * 62^2 + 2 * 62 + 3 = 3971
        assert_eq!(base62_encode(3971), "123");
    }

    #[test]
    fn test_base62_encode_max_is_22_digits() {
        assert_eq!(base62_encode(u128::MAX).len(), 22);
    }
}
