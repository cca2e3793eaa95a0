//! Plain text decoding

use tracing::warn;

/// Decode raw bytes as UTF-8
///
/// No BOM stripping and no line-ending normalization. Invalid sequences are
/// replaced with U+FFFD rather than failing the whole document.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Invalid UTF-8 at byte {}, replacing undecodable sequences",
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_round_trip() {
        assert_eq!(decode_text(b"Hello, world.\n"), "Hello, world.\n");
    }

    #[test]
    fn test_multibyte_round_trip() {
        let source = "Grüße, 世界! 👋";
        assert_eq!(decode_text(source.as_bytes()), source);
    }

    #[test]
    fn test_bom_and_crlf_are_kept() {
        let bytes = b"\xEF\xBB\xBFline one\r\nline two";
        let text = decode_text(bytes);
        assert!(text.starts_with('\u{FEFF}'));
        assert!(text.contains("\r\n"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = decode_text(b"ok \xFF ok");
        assert_eq!(text, "ok \u{FFFD} ok");
    }
}
