//! Buffer wrapper dispatching changed indexes to any number of subscribers.

use crate::prelude::*;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::item::Item;

use numbuf_callback::Handle;
use numbuf_callback::Registry1;



// ==================
// === Observable ===
// ==================

/// Wrapper over a buffer which dispatches an event with the index of every changed element.
/// Multi-element operations are always expanded to one event per element: `write_multiple` in the
/// input order and `set` in the ascending index order. Events are dispatched synchronously after
/// the mutation succeeded. Resizes are not observable from outside.
#[derive(Debug)]
pub struct Observable<T> {
    buffer     : Buffer<T>,
    on_changed : Registry1<usize>,
    logger     : Logger,
}

impl<T:Item> Observable<T> {
    /// Constructor.
    pub fn new(buffer:Buffer<T>) -> Self {
        let logger     = buffer.logger().sub("observable");
        let on_changed = default();
        Self {buffer,on_changed,logger}
    }

    /// The wrapped buffer.
    pub fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    /// The registry of the "changed" event.
    pub fn on_changed(&self) -> &Registry1<usize> {
        &self.on_changed
    }

    /// Subscribes to the "changed" event. The subscription lasts as long as the handle.
    pub fn subscribe<F:Fn(&usize)+'static>(&self, f:F) -> Handle {
        self.on_changed.add(f)
    }

    /// The number of elements of the wrapped buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Checks whether the wrapped buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Borrows the current storage of the wrapped buffer.
    pub fn array(&self) -> Ref<'_,[T]> {
        self.buffer.array()
    }
}


// === Read / Write ===

impl<T:Item> Observable<T> {
    /// Reads the element. Panics if the index is out of bounds.
    pub fn read(&self, ix:usize) -> T {
        self.buffer.read(ix)
    }

    /// Reads one element per index.
    pub fn read_multiple(&self, ixs:&[usize]) -> Vec<T> {
        self.buffer.read_multiple(ixs)
    }

    /// Writes the element, then dispatches its index.
    pub fn write(&self, ix:usize, value:T) -> Result<()> {
        self.buffer.write(ix,value)?;
        self.notify_changed(ix);
        Ok(())
    }

    /// Writes the elements, then dispatches every index in the input order.
    pub fn write_multiple(&self, ixs:&[usize], vals:&[T]) -> Result<()> {
        self.buffer.write_multiple(ixs,vals)?;
        ixs.iter().for_each(|&ix| self.notify_changed(ix));
        Ok(())
    }

    /// Copies the values starting at `offset`, then dispatches every index of the range.
    pub fn set(&self, values:&[T], offset:usize) {
        self.buffer.set(values,offset);
        (offset..offset + values.len()).for_each(|ix| self.notify_changed(ix));
    }

    /// Resizes the buffer. Does nothing at all if the length does not change.
    pub fn resize(&self, new_len:usize) {
        let old_len = self.len();
        if old_len != new_len {
            self.buffer.resize(new_len);
            self.on_resized(old_len,new_len);
        }
    }
}


// === Events ===

impl<T> Observable<T> {
    /// Internal resize hook. There is no resize event yet, so it only logs.
    fn on_resized(&self, old_len:usize, new_len:usize) {
        self.logger.debug(fmt!("Resized from {old_len} to {new_len}, nothing to notify."));
    }

    fn notify_changed(&self, ix:usize) {
        self.logger.trace(fmt!("Dispatching change of {ix} to {} subscriber(s).",self.on_changed.len()));
        self.on_changed.dispatch(&ix);
    }
}



// =============
// === Tests ===
// =============
