// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use log::trace;

/// Capacity the scratch stack grows to on its first push.
pub const SCRATCH_INIT_SIZE: usize = 256;

/// Growable byte stack used to accumulate string content while scanning.
///
/// The backing buffer is kept at its full capacity (`size`) and `top` tracks
/// how much of it is in use, so `top <= size` always holds. When a push would
/// reach the capacity, the buffer grows by a factor of 1.5 until it fits.
#[derive(Debug)]
pub struct ScratchStack {
    /// Backing storage; its length is the stack capacity.
    buffer: Vec<u8>,
    /// Number of bytes currently in use.
    top: usize,
    /// Capacity used for the first allocation.
    init_size: usize,
}

impl ScratchStack {
    /// Creates an empty stack whose first allocation is `init_size` bytes.
    /// Nothing is allocated until the first push.
    ///
    /// A zero `init_size` falls back to [`SCRATCH_INIT_SIZE`].
    pub fn with_init_size(init_size: usize) -> Self {
        let init_size = if init_size == 0 {
            SCRATCH_INIT_SIZE
        } else {
            init_size
        };
        Self {
            buffer: Vec::new(),
            top: 0,
            init_size,
        }
    }

    /// Number of bytes currently on the stack.
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Current capacity of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Reserves `n` bytes at the top of the stack and returns them for writing.
    ///
    /// Previously pushed bytes are preserved across growth.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        let needed = self.top.saturating_add(n);
        if needed >= self.buffer.len() {
            self.grow(needed);
        }
        let start = self.top;
        self.top = needed;
        &mut self.buffer[start..needed]
    }

    /// Pushes a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        if let Some(slot) = self.push(1).first_mut() {
            *slot = byte;
        }
    }

    /// Removes the last `n` bytes and returns them.
    ///
    /// Returns `None` without modifying the stack if fewer than `n` bytes are
    /// in use.
    pub fn pop(&mut self, n: usize) -> Option<&[u8]> {
        let start = self.top.checked_sub(n)?;
        let end = self.top;
        self.top = start;
        self.buffer.get(start..end)
    }

    /// Rolls the stack back to a previously recorded `top`.
    ///
    /// Marks above the current top are ignored.
    pub fn truncate(&mut self, mark: usize) {
        if mark < self.top {
            self.top = mark;
        }
    }

    fn grow(&mut self, needed: usize) {
        let mut size = self.buffer.len();
        if size == 0 {
            size = self.init_size;
        }
        while needed >= size {
            // x1.5, with a floor of one byte so tiny capacities still progress
            size = size.saturating_add((size >> 1).max(1));
        }
        trace!("scratch stack grow {} -> {}", self.capacity(), size);
        self.buffer.resize(size, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_unallocated() {
        let stack = ScratchStack::with_init_size(SCRATCH_INIT_SIZE);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_first_push_allocates_init_size() {
        let mut stack = ScratchStack::with_init_size(SCRATCH_INIT_SIZE);
        stack.push_byte(b'a');
        assert_eq!(stack.capacity(), SCRATCH_INIT_SIZE);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_push_pop_returns_last_bytes() {
        let mut stack = ScratchStack::with_init_size(SCRATCH_INIT_SIZE);
        stack.push(3).copy_from_slice(b"abc");
        stack.push(2).copy_from_slice(b"de");
        assert_eq!(stack.pop(2), Some(&b"de"[..]));
        assert_eq!(stack.pop(3), Some(&b"abc"[..]));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_underflow_is_rejected() {
        let mut stack = ScratchStack::with_init_size(SCRATCH_INIT_SIZE);
        stack.push_byte(b'x');
        assert_eq!(stack.pop(2), None);
        // Stack untouched after a rejected pop
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_growth_is_geometric_and_preserves_content() {
        let mut stack = ScratchStack::with_init_size(4);
        for b in 0u8..10 {
            stack.push_byte(b);
        }
        // 4 -> 6 -> 9 -> 13
        assert_eq!(stack.capacity(), 13);
        assert!(stack.len() <= stack.capacity());
        let expected: Vec<u8> = (0u8..10).collect();
        assert_eq!(stack.pop(10), Some(expected.as_slice()));
    }

    #[test]
    fn test_push_reaching_capacity_grows() {
        let mut stack = ScratchStack::with_init_size(4);
        stack.push(3);
        assert_eq!(stack.capacity(), 4);
        // top + n == size triggers growth
        stack.push(1);
        assert_eq!(stack.capacity(), 6);
    }

    #[test]
    fn test_tiny_init_size_still_grows() {
        let mut stack = ScratchStack::with_init_size(1);
        stack.push_byte(b'a');
        stack.push_byte(b'b');
        assert_eq!(stack.pop(2), Some(&b"ab"[..]));
    }

    #[test]
    fn test_zero_init_size_falls_back_to_default() {
        let mut stack = ScratchStack::with_init_size(0);
        stack.push_byte(b'a');
        assert_eq!(stack.capacity(), SCRATCH_INIT_SIZE);
    }

    #[test]
    fn test_truncate_rolls_back() {
        let mut stack = ScratchStack::with_init_size(SCRATCH_INIT_SIZE);
        stack.push(2).copy_from_slice(b"ab");
        let mark = stack.len();
        stack.push(3).copy_from_slice(b"cde");
        stack.truncate(mark);
        assert_eq!(stack.len(), 2);
        stack.truncate(10);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(2), Some(&b"ab"[..]));
    }
}
