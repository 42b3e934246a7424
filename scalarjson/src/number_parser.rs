// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use log::debug;

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

fn is_digit_1_to_9(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// Moves `pos` past a run of ASCII digits.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Validates a JSON number at the start of `bytes` and returns its length.
///
/// ```text
/// number = [ "-" ] int [ frac ] [ exp ]
/// int    = "0" / digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ( "e" / "E" ) [ "-" / "+" ] 1*digit
/// ```
///
/// Scanning stops at the first byte that cannot extend the number; whatever
/// follows is left for the caller.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut pos = 0;

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(&b'0') => pos += 1,
        Some(&b) if is_digit_1_to_9(b) => pos = skip_digits(bytes, pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = bytes.get(pos) {
            pos += 1;
        }
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    Ok(pos)
}

/// Converts an already validated number span to `f64`.
///
/// Overflow to either infinity is rejected with `NumberTooBig`; underflow
/// rounds toward zero and is accepted.
pub fn convert_number(span: &[u8]) -> Result<f64, ParseError> {
    // A validated span is pure ASCII
    let text = core::str::from_utf8(span).map_err(|_| ParseError::InvalidValue)?;
    let value = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        debug!("number {text} overflows f64");
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}

/// Scans a number at the cursor.
///
/// On a syntax error the cursor is left where it was. Once the span is
/// lexically valid the cursor moves past it, even if conversion then fails
/// with `NumberTooBig`.
pub fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let remaining = input.remaining();
    let len = scan_number(remaining)?;
    let span = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    input.advance(len);
    convert_number(span)
}
