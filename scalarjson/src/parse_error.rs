// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// The set is closed: every failed parse reports exactly one of these kinds,
/// and the first error encountered stops the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A literal, number or value start byte matched no valid production.
    InvalidValue,
    /// Non-whitespace content followed a complete value.
    RootNotSingular,
    /// A syntactically valid number overflowed the `f64` range.
    NumberTooBig,
    /// A string literal was not closed before the end of input.
    MissQuotationMark,
}

impl ParseError {
    /// A short, stable description of the error kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root value is not singular",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissQuotationMark => "missing closing quotation mark",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for ParseError {}
