//! Owned byte buffers with small-buffer optimization.
//!
//! A [`Buffer`] owns a contiguous byte region of a size fixed at
//! construction, plus a cursor into it. Sizes at or below
//! [`INLINE_CAPACITY`] are stored inline, so encoding a scalar or a short
//! string never touches the allocator.
//!
//! The cursor is exposed two ways: directly ([`Buffer::advance`],
//! [`Buffer::reset_offset`]) and through the [`Buf`]/[`BufMut`] traits, which
//! read and write the region starting at the current offset. The codec layer
//! is written against `impl Buf`/`impl BufMut`, so a `Buffer` is
//! interchangeable with any other byte container there.

use bytes::{buf::UninitSlice, Buf, BufMut};
use std::fmt;

/// Sizes at or below this threshold are stored inline.
pub const INLINE_CAPACITY: usize = 16;

enum Storage {
    Inline([u8; INLINE_CAPACITY]),
    Heap(Box<[u8]>),
}

/// An owned byte region with a cursor.
///
/// Not `Clone`: a buffer has exactly one owner. Use [`Buffer::take`] to
/// steal the contents, leaving the source empty.
pub struct Buffer {
    storage: Storage,
    size: usize,
    offset: usize,
}

impl Buffer {
    /// Creates a buffer of exactly `size` bytes, zero-filled, cursor at 0.
    pub fn new(size: usize) -> Self {
        let storage = if size <= INLINE_CAPACITY {
            Storage::Inline([0u8; INLINE_CAPACITY])
        } else {
            Storage::Heap(vec![0u8; size].into_boxed_slice())
        };
        Self {
            storage,
            size,
            offset: 0,
        }
    }

    /// Total capacity in bytes, fixed at construction.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current cursor position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes between the cursor and the end of the region.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.size - self.offset
    }

    /// Moves the cursor forward by `n` bytes.
    ///
    /// Panics if the cursor would pass the end of the region.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(
            n <= self.remaining(),
            "advance past end of buffer: {} + {} > {}",
            self.offset,
            n,
            self.size
        );
        self.offset += n;
    }

    /// Rewinds (or positions) the cursor to `offset`.
    ///
    /// Panics if `offset` exceeds the region size.
    #[inline]
    pub fn reset_offset(&mut self, offset: usize) {
        assert!(offset <= self.size, "offset past end of buffer");
        self.offset = offset;
    }

    /// The whole region, independent of the cursor.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Inline(array) => &array[..self.size],
            Storage::Heap(boxed) => boxed,
        }
    }

    /// The whole region, mutable, independent of the cursor.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Inline(array) => &mut array[..self.size],
            Storage::Heap(boxed) => boxed,
        }
    }

    /// Whether the region is stored inline (no heap allocation).
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline(_))
    }

    /// Steals the contents, leaving `self` empty (`size() == 0`).
    ///
    /// Inline contents are copied; heap contents move without copying.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl Default for Buffer {
    /// An empty buffer, used as a placeholder before a size is known.
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.size)
            .field("offset", &self.offset)
            .field("inline", &self.is_inline())
            .finish()
    }
}

impl Buf for Buffer {
    #[inline]
    fn remaining(&self) -> usize {
        Buffer::remaining(self)
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.as_slice()[self.offset..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        Buffer::advance(self, cnt);
    }
}

// The region is zero-initialized at construction, so handing out the
// uninitialized-slice view never exposes uninitialized memory. Capacity is
// fixed: once the cursor reaches the end, `remaining_mut()` is 0 and further
// writes panic, matching the contract that `write` implementations must stay
// within the size they declared.
unsafe impl BufMut for Buffer {
    #[inline]
    fn remaining_mut(&self) -> usize {
        Buffer::remaining(self)
    }

    #[inline]
    unsafe fn advance_mut(&mut self, cnt: usize) {
        Buffer::advance(self, cnt);
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut UninitSlice {
        let offset = self.offset;
        UninitSlice::new(&mut self.as_mut_slice()[offset..])
    }
}
