//! UTF-8 sequence decoding.
//!
//! One pure function, [`decode`], reads the sequence starting at the front of
//! a byte window and returns the scalar codepoint with its encoded length.
//! The window always ends at the end of the input line, so a sequence cut
//! short by the end of the buffer is reported as [`DecodeError::Truncated`]
//! instead of being read past.
//!
//! # Known Gaps
//!
//! Over-long encodings (e.g. `0xC1 0xBF` for U+007F) and surrogate
//! codepoints are accepted. Neither is in the identifier tables, with the
//! exception of over-long forms of genuine identifier characters, which
//! therefore lex as part of a symbol.
//!
//! Trailing bytes are not checked for the `10xxxxxx` tag; only their low six
//! bits are used. `0xC3 b'A'` decodes to U+00C1 and lexes as a two-byte
//! symbol, and an ASCII byte after a leading byte is absorbed into the
//! sequence.

use thiserror::Error;

/// Payload bits of a continuation byte.
const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// A decoded character: its scalar value and encoded byte length (1-4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Utf8Char {
    pub code: u32,
    pub len: u32,
}

/// Why a byte window does not start with a well-formed UTF-8 sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum DecodeError {
    /// The leading byte announces more bytes than remain in the line.
    #[error("truncated multi-byte sequence: expected {expected} bytes, found {available}")]
    Truncated { expected: u32, available: u32 },
    /// The byte matches none of the four leading-byte patterns.
    #[error("invalid leading byte 0x{byte:02X}")]
    InvalidLeadingByte { byte: u8 },
}

impl DecodeError {
    /// Number of bytes a bad-character token claims for this error.
    ///
    /// Never exceeds the bytes remaining in the window, and is at least 1
    /// for any non-empty window.
    pub fn recovery_len(&self) -> u32 {
        match *self {
            DecodeError::Truncated { available, .. } => available,
            DecodeError::InvalidLeadingByte { .. } => 1,
        }
    }
}

/// Encoded length announced by a leading byte, or `None` if `lead` cannot
/// start a sequence.
///
/// - `0xxxxxxx`: 1 byte (ASCII)
/// - `110xxxxx`: 2 bytes
/// - `1110xxxx`: 3 bytes
/// - `11110xxx`: 4 bytes
/// - continuation bytes (`10xxxxxx`) and `11111xxx`: invalid
#[inline]
pub fn sequence_len(lead: u8) -> Option<u32> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Decode the UTF-8 sequence at the front of `bytes`.
///
/// `bytes` runs from the current scan position to the end of the line. An
/// ASCII byte decodes to itself with `len == 1`. An empty window reports
/// `Truncated { expected: 1, available: 0 }`.
pub fn decode(bytes: &[u8]) -> Result<Utf8Char, DecodeError> {
    let Some(&lead) = bytes.first() else {
        return Err(DecodeError::Truncated {
            expected: 1,
            available: 0,
        });
    };

    let len = sequence_len(lead).ok_or(DecodeError::InvalidLeadingByte { byte: lead })?;
    if len == 1 {
        return Ok(Utf8Char {
            code: u32::from(lead),
            len,
        });
    }

    // Payload bits of the leading byte: 5, 4, or 3 for 2-, 3-, 4-byte forms.
    let mut code = u32::from(lead & (0x7F >> len));
    for index in 1..len {
        let Some(&byte) = bytes.get(index as usize) else {
            return Err(DecodeError::Truncated {
                expected: len,
                available: index,
            });
        };
        code = (code << 6) | u32::from(byte & CONTINUATION_PAYLOAD);
    }

    Ok(Utf8Char { code, len })
}
