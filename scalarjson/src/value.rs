// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use alloc::vec::Vec;

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    /// Reserved. No parse or setter produces an array.
    Array,
    /// Reserved. No parse or setter produces an object.
    Object,
}

/// Live payload of a value. Only reachable variants are representable.
#[derive(Debug, Clone, PartialEq, Default)]
enum Payload {
    #[default]
    Null,
    False,
    True,
    Number(f64),
    /// String bytes followed by a single trailing `0` terminator.
    String(Box<[u8]>),
}

/// A parsed JSON scalar.
///
/// A new value is `Null`. Assigning a new scalar drops whatever payload the
/// value held before, so at most one payload is ever live.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    payload: Payload,
}

impl Value {
    /// Creates a `Null` value.
    pub const fn new() -> Self {
        Self {
            payload: Payload::Null,
        }
    }

    pub fn get_type(&self) -> ValueType {
        match self.payload {
            Payload::Null => ValueType::Null,
            Payload::False => ValueType::False,
            Payload::True => ValueType::True,
            Payload::Number(_) => ValueType::Number,
            Payload::String(_) => ValueType::String,
        }
    }

    /// Releases any owned payload and resets the value to `Null`.
    ///
    /// Calling this on a `Null` value does nothing.
    pub fn release(&mut self) {
        self.payload = Payload::Null;
    }

    pub(crate) fn set_null(&mut self) {
        self.release();
    }

    /// Returns the boolean, or `None` if the value is not `True` or `False`.
    pub fn get_boolean(&self) -> Option<bool> {
        match self.payload {
            Payload::True => Some(true),
            Payload::False => Some(false),
            _ => None,
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        self.payload = if b { Payload::True } else { Payload::False };
    }

    /// Returns the number, or `None` if the value is not a `Number`.
    pub fn get_number(&self) -> Option<f64> {
        match self.payload {
            Payload::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn set_number(&mut self, n: f64) {
        self.payload = Payload::Number(n);
    }

    /// Returns the string bytes without the terminator, or `None` if the value
    /// is not a `String`.
    ///
    /// Embedded zero bytes are part of the content.
    pub fn get_string(&self) -> Option<&[u8]> {
        self.get_string_with_nul()
            .and_then(|s| s.split_last())
            .map(|(_, content)| content)
    }

    /// Returns the string bytes including the trailing zero terminator.
    pub fn get_string_with_nul(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Returns the string length in bytes, not counting the terminator.
    pub fn get_string_length(&self) -> Option<usize> {
        self.get_string().map(<[u8]>::len)
    }

    /// Returns the string as `&str` if it is a `String` holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.get_string()?).ok()
    }

    /// Copies `s` into a freshly owned, zero-terminated payload.
    pub fn set_string(&mut self, s: &[u8]) {
        // Drop the old payload before allocating the new one
        self.release();
        let mut owned = Vec::with_capacity(s.len() + 1);
        owned.extend_from_slice(s);
        owned.push(0);
        self.payload = Payload::String(owned.into_boxed_slice());
    }
}
