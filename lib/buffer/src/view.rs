//! Windowed access to a buffer.

use crate::prelude::*;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::item::Item;



// ============
// === View ===
// ============

/// View over a buffer shifting every index by `offset`. The view does not validate its window:
/// `length` is informational only, and all bounds checking is left to the buffer, so `write`
/// checks the index against the full buffer length. Resizing the buffer does not update the view.
/// Shifted indexes saturate at `usize::MAX`, so an overflowing index is always out of bounds.
#[derive(Derivative)]
#[derivative(Clone(bound=""))]
#[derivative(Debug(bound="T:Debug"))]
pub struct View<T> {
    buffer : Buffer<T>,
    offset : usize,
    length : usize,
}

impl<T> CloneRef for View<T> {}

impl<T:Item> View<T> {
    /// Constructor.
    pub fn new(buffer:&Buffer<T>, offset:usize, length:usize) -> Self {
        let buffer = buffer.clone_ref();
        Self {buffer,offset,length}
    }

    /// The viewed buffer.
    pub fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    /// Index of the buffer element seen as the element 0 of the view.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Logical length of the view.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Checks whether the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Reads the element at `ix + offset`. Panics if it is out of the buffer bounds.
    pub fn read(&self, ix:usize) -> T {
        self.buffer.read(ix.saturating_add(self.offset))
    }

    /// Writes the element at `ix + offset`.
    pub fn write(&self, ix:usize, value:T) -> Result<()> {
        self.buffer.write(ix.saturating_add(self.offset), value)
    }

    /// Reads the elements at the shifted indexes.
    pub fn read_multiple(&self, ixs:&[usize]) -> Vec<T> {
        self.buffer.read_multiple(&self.shift(ixs))
    }

    /// Writes the elements at the shifted indexes.
    pub fn write_multiple(&self, ixs:&[usize], vals:&[T]) -> Result<()> {
        self.buffer.write_multiple(&self.shift(ixs),vals)
    }

    fn shift(&self, ixs:&[usize]) -> Vec<usize> {
        ixs.iter().map(|ix| ix.saturating_add(self.offset)).collect()
    }
}



// =============
// === Tests ===
// =============
