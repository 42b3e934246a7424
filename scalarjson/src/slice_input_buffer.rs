// SPDX-License-Identifier: Apache-2.0

/// Read-only cursor over the complete JSON input.
///
/// The input is addressed as one contiguous slice; its end is the end of input.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Returns the byte under the cursor and advances past it.
    pub fn consume_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Advances the cursor by `n` bytes, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Everything from the cursor to the end of input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Skips JSON whitespace: space, tab, line feed and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_boundary_behavior() {
        let data = b"abc";
        let mut buffer = SliceInputBuffer::new(data);

        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.consume_byte(), Some(b'a'));
        assert_eq!(buffer.consume_byte(), Some(b'b'));
        assert!(!buffer.is_empty());
        assert_eq!(buffer.consume_byte(), Some(b'c'));

        // At the end the cursor stays put
        assert_eq!(buffer.current_pos(), data.len());
        assert!(buffer.is_empty());
        assert_eq!(buffer.consume_byte(), None);
        assert_eq!(buffer.current_pos(), data.len());
        assert_eq!(buffer.remaining(), b"");
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let mut buffer = SliceInputBuffer::new(b"null");
        buffer.advance(2);
        assert_eq!(buffer.remaining(), b"ll");
        buffer.advance(100);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_skip_whitespace_only_json_whitespace() {
        let mut buffer = SliceInputBuffer::new(b" \t\r\n\x0bx");
        buffer.skip_whitespace();
        // Vertical tab is not JSON whitespace
        assert_eq!(buffer.current_pos(), 4);
        assert_eq!(buffer.peek(), Some(0x0b));
    }
}
