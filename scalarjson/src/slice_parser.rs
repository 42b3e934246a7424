// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::parse_error::ParseError;
use crate::parser_core::ParserCore;
use crate::scratch_stack::ScratchStack;
use crate::value::Value;

/// A parser for a single JSON scalar held in a slice.
///
/// Each parser owns its own scratch stack, which is released when parsing
/// finishes. Parsing consumes the parser, so one parser handles exactly one
/// document.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> SliceParser<'a> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use scalarjson::SliceParser;
    /// let value = SliceParser::new(" 42 ").parse().unwrap();
    /// assert_eq!(value.get_number(), Some(42.0));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// The end of the slice is the end of input.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_scratch_capacity_from_slice(input, 0)
    }

    /// Creates a new parser whose scratch stack starts at `capacity` bytes.
    ///
    /// A zero `capacity` uses [`SCRATCH_INIT_SIZE`](crate::SCRATCH_INIT_SIZE).
    pub fn with_scratch_capacity(input: &'a str, capacity: usize) -> Self {
        Self::with_scratch_capacity_from_slice(input.as_bytes(), capacity)
    }

    /// Creates a new parser from a byte slice with a custom initial scratch
    /// capacity. All other constructors delegate here.
    pub fn with_scratch_capacity_from_slice(input: &'a [u8], capacity: usize) -> Self {
        SliceParser {
            core: ParserCore::new(input, ScratchStack::with_init_size(capacity)),
        }
    }

    /// Parses the input and returns the value.
    pub fn parse(self) -> Result<Value, ParseError> {
        let mut value = Value::new();
        self.parse_into(&mut value)?;
        Ok(value)
    }

    /// Parses the input into `value`.
    ///
    /// Any payload `value` held before is released first. On error `value` is
    /// left as `Null`.
    pub fn parse_into(mut self, value: &mut Value) -> Result<(), ParseError> {
        value.release();
        let result = self.parse_document(value);
        debug_assert!(
            self.core.scratch.is_empty(),
            "scratch stack not empty after parse"
        );
        if let Err(err) = result {
            debug!("parse failed: {err:?} at {}", self.core.input.current_pos());
            value.release();
        }
        result
    }

    /// `json-text = ws value ws`
    fn parse_document(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.core.input.skip_whitespace();
        self.core.parse_value(value)?;
        self.core.input.skip_whitespace();
        if !self.core.input.is_empty() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }
}

/// Parses a JSON scalar from a string slice.
///
/// # Example
/// ```
/// use scalarjson::{parse, ValueType};
/// let value = parse(r#""abc""#).unwrap();
/// assert_eq!(value.get_type(), ValueType::String);
/// assert_eq!(value.get_string(), Some(&b"abc"[..]));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses a JSON scalar from a byte slice.
pub fn parse_from_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new_from_slice(input).parse()
}

/// Parses a JSON scalar from `input` into an existing value.
///
/// # Example
/// ```
/// use scalarjson::{parse_into, ParseError, Value, ValueType};
/// let mut value = Value::new();
/// value.set_string(b"old");
/// assert_eq!(parse_into(&mut value, b"1 2"), Err(ParseError::RootNotSingular));
/// assert_eq!(value.get_type(), ValueType::Null);
/// ```
pub fn parse_into(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    SliceParser::new_from_slice(input).parse_into(value)
}
