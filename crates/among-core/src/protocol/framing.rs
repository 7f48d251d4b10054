//! Record framing shared by every layer of the protocol.
//!
//! ```text
//! [length:u16 LE][tag:1][body:length]
//! ```
//! `length` counts the body only: everything after the tag through the end of
//! the record, nested child headers included.  The header is written before
//! the body, so callers compute the body size first and pass it in.

use crate::protocol::codec::GenerateError;
use crate::protocol::messages::{MAX_STRING_LEN, RECORD_HEADER_SIZE};

/// Appends a record header declaring `declared_len` body bytes.
///
/// # Errors
///
/// Returns [`GenerateError::RecordTooLarge`] if `declared_len` does not fit in
/// the 2-byte length field.
pub fn write_record_header(
    buf: &mut Vec<u8>,
    tag: u8,
    declared_len: usize,
) -> Result<(), GenerateError> {
    let len = u16::try_from(declared_len).map_err(|_| GenerateError::RecordTooLarge {
        tag,
        len: declared_len,
    })?;
    buf.reserve(RECORD_HEADER_SIZE + declared_len);
    buf.extend_from_slice(&len.to_le_bytes());
    buf.push(tag);
    Ok(())
}

/// Appends a string with a 1-byte length prefix.
///
/// The caller has already fitted `s` to [`MAX_STRING_LEN`]; longer input is
/// cut at the limit so the prefix can never disagree with the bytes written.
pub fn write_short_string(buf: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let len = bytes.len().min(MAX_STRING_LEN);
    buf.push(len as u8);
    buf.extend_from_slice(&bytes[..len]);
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a char
/// boundary.
pub fn utf8_prefix(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
