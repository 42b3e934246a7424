// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent scanner for JSON scalars.
//!
//! `ParserCore` owns the cursor and the scratch stack for a single parse and
//! writes the scanned value directly into a caller supplied [`Value`].

use log::trace;

use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::scratch_stack::ScratchStack;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::{Value, ValueType};

pub(crate) struct ParserCore<'a> {
    /// Cursor into the input text
    pub input: SliceInputBuffer<'a>,
    /// Accumulator for string content
    pub scratch: ScratchStack,
}

impl<'a> ParserCore<'a> {
    pub fn new(input: &'a [u8], scratch: ScratchStack) -> Self {
        Self {
            input: SliceInputBuffer::new(input),
            scratch,
        }
    }

    /// `value = null / false / true / number / string`
    pub fn parse_value(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let Some(first) = self.input.peek() else {
            return Err(ParseError::ExpectValue);
        };
        trace!("dispatch {:?} at {}", first as char, self.input.current_pos());
        match first {
            b'n' => self.parse_literal(value, b"null", ValueType::Null),
            b't' => self.parse_literal(value, b"true", ValueType::True),
            b'f' => self.parse_literal(value, b"false", ValueType::False),
            b'"' => self.parse_string(value),
            _ => {
                let n = parse_number(&mut self.input)?;
                value.set_number(n);
                Ok(())
            }
        }
    }

    /// Matches `literal` byte for byte at the cursor.
    ///
    /// A literal running straight into another letter or digit is not a
    /// literal (`truee`, `nullx`).
    fn parse_literal(
        &mut self,
        value: &mut Value,
        literal: &[u8],
        tag: ValueType,
    ) -> Result<(), ParseError> {
        let rest = self.input.remaining();
        if !rest.starts_with(literal) {
            return Err(ParseError::InvalidValue);
        }
        if rest
            .get(literal.len())
            .is_some_and(u8::is_ascii_alphanumeric)
        {
            return Err(ParseError::InvalidValue);
        }
        self.input.advance(literal.len());
        match tag {
            ValueType::True => value.set_boolean(true),
            ValueType::False => value.set_boolean(false),
            _ => value.set_null(),
        }
        Ok(())
    }

    /// Scans a string literal. The cursor is on the opening quote.
    ///
    /// Bytes between the quotes are copied verbatim; backslash escapes are not
    /// decoded.
    fn parse_string(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let head = self.scratch.len();
        self.input.advance(1);
        loop {
            match self.input.consume_byte() {
                Some(b'"') => {
                    let len = self.scratch.len() - head;
                    let content = self.scratch.pop(len).ok_or(ParseError::InvalidValue)?;
                    value.set_string(content);
                    return Ok(());
                }
                Some(byte) => self.scratch.push_byte(byte),
                None => {
                    self.scratch.truncate(head);
                    return Err(ParseError::MissQuotationMark);
                }
            }
        }
    }
}
