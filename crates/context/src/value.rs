//! Byte encodings of the primitive values stored by typed accessors.
//!
//! | Type        | Stored bytes                                        |
//! |-------------|-----------------------------------------------------|
//! | integer     | big-endian magnitude, minimal length, sign dropped  |
//! | bool        | `0x01` / `0x00`; any non-zero magnitude reads true  |
//! | string      | raw UTF-8                                           |
//! | string list | elements joined with `*;*`, no escaping             |
//! | bytes       | unchanged                                           |

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Separator between string-list elements.
///
/// Not escaped: an element containing it splits into two on read.
pub const LIST_DELIMITER: &str = "*;*";

pub fn encode_int(value: &BigInt) -> Vec<u8> {
    let magnitude = value.magnitude();
    if magnitude.is_zero() {
        return Vec::new();
    }
    magnitude.to_bytes_be()
}

pub fn decode_int(bytes: &[u8]) -> BigInt {
    BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_be(bytes))
}

pub fn encode_bool(value: bool) -> Vec<u8> {
    vec![u8::from(value)]
}

pub fn decode_bool(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| *b != 0)
}

pub fn encode_strings<S: AsRef<str>>(values: &[S]) -> Vec<u8> {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<&str>>()
        .join(LIST_DELIMITER)
        .into_bytes()
}

pub fn decode_strings(text: &str) -> Vec<String> {
    text.split(LIST_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_minimal_big_endian() {
        assert_eq!(encode_int(&BigInt::from(0)), Vec::<u8>::new());
        assert_eq!(encode_int(&BigInt::from(11)), vec![0x0B]);
        assert_eq!(encode_int(&BigInt::from(256)), vec![0x01, 0x00]);
        assert_eq!(encode_int(&BigInt::from(1234456)), vec![0x12, 0xD6, 0x18]);
    }

    #[test]
    fn test_int_drops_sign() {
        assert_eq!(encode_int(&BigInt::from(-256)), vec![0x01, 0x00]);
        assert_eq!(decode_int(&[0x01, 0x00]), BigInt::from(256));
    }

    #[test]
    fn test_decode_int_leading_zeros() {
        assert_eq!(decode_int(&[]), BigInt::from(0));
        assert_eq!(decode_int(&[0x00, 0x00, 0x05]), BigInt::from(5));
    }

    #[test]
    fn test_bool() {
        assert_eq!(encode_bool(true), vec![0x01]);
        assert_eq!(encode_bool(false), vec![0x00]);
        assert!(decode_bool(&[0x01]));
        assert!(decode_bool(&[0x00, 0x02]));
        assert!(!decode_bool(&[0x00]));
        assert!(!decode_bool(&[]));
    }

    #[test]
    fn test_strings() {
        assert_eq!(encode_strings(&["hello", "world"]), b"hello*;*world");
        assert_eq!(decode_strings("hello*;*world"), vec!["hello", "world"]);
        assert_eq!(decode_strings(""), vec![""]);
    }
}
