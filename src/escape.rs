/// Longest encoding of a single input byte (`\ooo`).
pub const MAX_ESCAPE_WIDTH: usize = 4;

/// Encoded form of one input byte, 1 to 4 characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedByte {
    buf: [u8; MAX_ESCAPE_WIDTH],
    len: u8,
}

impl EscapedByte {
    fn plain(byte: u8) -> Self {
        EscapedByte {
            buf: [byte, 0, 0, 0],
            len: 1,
        }
    }

    fn named(letter: u8) -> Self {
        EscapedByte {
            buf: [b'\\', letter, 0, 0],
            len: 2,
        }
    }

    fn octal(byte: u8) -> Self {
        EscapedByte {
            buf: [
                b'\\',
                b'0' + ((byte >> 6) & 0o7),
                b'0' + ((byte >> 3) & 0o7),
                b'0' + (byte & 0o7),
            ],
            len: 4,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

/// Printable ASCII that still must not appear raw: quote and backslash end or
/// escape the literal, `?` can start a trigraph, `:` and `%` can start digraphs.
fn is_reserved(byte: u8) -> bool {
    matches!(byte, b'"' | b'\\' | b'?' | b':' | b'%')
}

/// Encode one byte for use inside a C++ string literal.
pub fn escape_byte(byte: u8, always_escape: bool) -> EscapedByte {
    if always_escape {
        return EscapedByte::octal(byte);
    }
    match byte {
        32..=126 if !is_reserved(byte) => EscapedByte::plain(byte),
        b'\r' => EscapedByte::named(b'r'),
        b'\n' => EscapedByte::named(b'n'),
        b'\t' => EscapedByte::named(b't'),
        b'"' => EscapedByte::named(b'"'),
        b'\\' => EscapedByte::named(b'\\'),
        _ => EscapedByte::octal(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(byte: u8) -> String {
        String::from_utf8(escape_byte(byte, false).as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn printable_ascii_is_emitted_unchanged() {
        for byte in 32u8..=126 {
            if is_reserved(byte) {
                continue;
            }
            assert_eq!(escape_byte(byte, false).as_bytes(), &[byte]);
        }
    }

    #[test]
    fn named_escapes() {
        assert_eq!(escaped(b'\r'), "\\r");
        assert_eq!(escaped(b'\n'), "\\n");
        assert_eq!(escaped(b'\t'), "\\t");
        assert_eq!(escaped(b'"'), "\\\"");
        assert_eq!(escaped(b'\\'), "\\\\");
    }

    #[test]
    fn reserved_punctuation_uses_octal() {
        assert_eq!(escaped(b'?'), "\\077");
        assert_eq!(escaped(b':'), "\\072");
        assert_eq!(escaped(b'%'), "\\045");
    }

    #[test]
    fn control_and_high_bytes_use_octal() {
        assert_eq!(escaped(0), "\\000");
        assert_eq!(escaped(0x1b), "\\033");
        assert_eq!(escaped(0x7f), "\\177");
        assert_eq!(escaped(0xff), "\\377");
    }

    #[test]
    fn always_escape_ignores_printability() {
        for byte in [b'A', b' ', b'\n', b'"', 0u8, 0xff] {
            let e = escape_byte(byte, true);
            assert_eq!(e.as_bytes().len(), MAX_ESCAPE_WIDTH);
            assert_eq!(e.as_bytes()[0], b'\\');
        }
        assert_eq!(escape_byte(b'A', true).as_bytes(), b"\\101");
    }
}
