//! String and console primitives.

use crate::error::ShimResult;
use std::ffi::CStr;
use std::io::{self, Write};

/// Native byte length of `text` minus one.
///
/// The minus one is the observed contract of the string-length binding and
/// generated code may depend on it, so it is kept as-is: `"abc"` yields 2 and
/// the empty string yields -1. Lengths beyond `i32::MAX` saturate before the
/// subtraction.
pub fn string_length(text: &CStr) -> i32 {
    length_minus_one(text.to_bytes().len())
}

fn length_minus_one(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX).wrapping_sub(1)
}

/// Writes one UTF-16 code unit as UTF-8. A lone surrogate becomes U+FFFD.
pub fn write_char_to<W: Write>(out: &mut W, unit: u16) -> ShimResult<()> {
    let ch = char::decode_utf16([unit])
        .next()
        .and_then(Result::ok)
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
    Ok(())
}

/// Writes `value` in decimal with no trailing newline.
pub fn write_u32_to<W: Write>(out: &mut W, value: u32) -> ShimResult<()> {
    write!(out, "{}", value)?;
    Ok(())
}

/// Writes to stdout and flushes. Generated code runs under a C `main`, so
/// nothing else would ever drain the Rust-side stdout buffer.
pub fn write_char(unit: u16) -> ShimResult<()> {
    let mut out = io::stdout().lock();
    write_char_to(&mut out, unit)?;
    out.flush()?;
    Ok(())
}

/// Writes to stdout and flushes. See [`write_char`].
pub fn write_u32(value: u32) -> ShimResult<()> {
    let mut out = io::stdout().lock();
    write_u32_to(&mut out, value)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_unit_is_utf8_encoded() {
        let mut out = Vec::new();
        write_char_to(&mut out, 0x00E9).unwrap();
        assert_eq!(out, "é".as_bytes());
    }

    #[test]
    fn oversized_length_saturates() {
        assert_eq!(length_minus_one(0), -1);
        assert_eq!(length_minus_one(i32::MAX as usize), i32::MAX - 1);
        assert_eq!(length_minus_one(1 << 31), i32::MAX - 1);
        assert_eq!(length_minus_one(usize::MAX), i32::MAX - 1);
    }

    #[test]
    fn lone_surrogate_is_replaced() {
        let mut out = Vec::new();
        write_char_to(&mut out, 0xD800).unwrap();
        assert_eq!(out, "\u{FFFD}".as_bytes());
    }
}
