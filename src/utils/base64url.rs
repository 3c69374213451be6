//! Base64URL encoding/decoding per RFC 4648
//!
//! URL-safe alphabet, no padding. Thin wrapper around the `base64` crate
//! that maps failures into [`Error::FormatInvalidBase64`].

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    decode_bytes(input).and_then(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!").is_err());
        // A single trailing symbol can never encode a whole byte
        assert!(decode_bytes("A").is_err());
        assert!(decode_bytes("SGVsbG8=").is_err());
        assert!(decode_bytes("ab+/").is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let encoded = encode_bytes(&[0xff, 0xfe]);
        assert!(decode_bytes(&encoded).is_ok());
        assert!(matches!(decode(&encoded), Err(Error::FormatInvalidBase64(_))));
    }

    #[test]
    fn test_binary_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_bytes(&encode_bytes(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_url_safe_characters() {
        // Base64URL uses - and _ instead of + and /
        let bytes = vec![0xfb, 0xff];
        let encoded = encode_bytes(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }
}
