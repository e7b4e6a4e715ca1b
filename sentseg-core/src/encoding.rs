//! Lenient text decoding
//!
//! Input files are not guaranteed to be clean UTF-8. Invalid byte sequences
//! are dropped rather than replaced or reported, so one bad byte never
//! aborts a whole file.

use std::borrow::Cow;

/// Decode `bytes` as UTF-8, dropping invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    log::debug!("dropped {dropped} invalid UTF-8 byte(s)");
    Cow::Owned(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_is_borrowed() {
        let decoded = decode_lossy("你好 world".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "你好 world");
    }

    #[test]
    fn test_invalid_bytes_dropped() {
        let bytes = [b'a', 0xFF, b'b', 0xE4, 0xBD, b'c'];
        assert_eq!(decode_lossy(&bytes), "abc");
    }

    #[test]
    fn test_truncated_trailing_sequence() {
        let mut bytes = "好".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xE5, 0xA5]);
        assert_eq!(decode_lossy(&bytes), "好");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_lossy(&[]), "");
    }
}
