// SPDX-License-Identifier: Apache-2.0

//! A small JSON parser for scalar documents.
//!
//! A document is a single `null`, `true`, `false`, number or string,
//! optionally surrounded by whitespace. Parsing produces a [`Value`] or the
//! first [`ParseError`] encountered.
//!
//! String content is copied verbatim between the quotes; escape sequences
//! are not decoded.
//!
//! ```
//! use scalarjson::{parse, ParseError, ValueType};
//!
//! let value = parse(" -1.5e3 ").unwrap();
//! assert_eq!(value.get_type(), ValueType::Number);
//! assert_eq!(value.get_number(), Some(-1500.0));
//!
//! assert_eq!(parse("1 2"), Err(ParseError::RootNotSingular));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser_core;

mod scratch_stack;
pub use scratch_stack::SCRATCH_INIT_SIZE;

mod slice_input_buffer;

mod slice_parser;
pub use slice_parser::{parse, parse_from_slice, parse_into, SliceParser};

mod value;
pub use value::{Value, ValueType};
