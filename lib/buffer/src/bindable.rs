//! Buffer wrapper calling a single replaceable hook after every mutation.

use crate::prelude::*;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::item::Item;



// =============
// === Hooks ===
// =============

/// Called with the old and the new length after a resize.
pub type OnResized = Box<dyn FnMut(usize,usize)>;

/// Called with the index of a changed element.
pub type OnChanged = Box<dyn FnMut(usize)>;

/// Called with the indexes of all the elements changed by `write_multiple`.
pub type OnChangedMultiple = Box<dyn FnMut(&[usize])>;

/// Called with the offset and the length of the range changed by `set`.
pub type OnChangedRange = Box<dyn FnMut(usize,usize)>;



// ================
// === Bindable ===
// ================

/// Wrapper over a buffer which notifies about changes through four hooks:
///
/// - `on_resized(old_len,new_len)`, no-op by default;
/// - `on_changed(ix)`, no-op by default;
/// - `on_changed_multiple(ixs)`, calls `on_changed` for every index by default;
/// - `on_changed_range(offset,length)`, calls `on_changed` for every index of the range by default.
///
/// Each hook is a single slot: setting it replaces the previous one. Hooks are called after the
/// buffer is mutated, and only if the mutation succeeded. They may read the buffer through another
/// handle.
#[derive(Derivative)]
#[derivative(Debug(bound="T:Debug"))]
pub struct Bindable<T> {
    buffer              : Buffer<T>,
    #[derivative(Debug="ignore")]
    on_resized          : OnResized,
    #[derivative(Debug="ignore")]
    on_changed          : OnChanged,
    #[derivative(Debug="ignore")]
    on_changed_multiple : Option<OnChangedMultiple>,
    #[derivative(Debug="ignore")]
    on_changed_range    : Option<OnChangedRange>,
    logger              : Logger,
}

impl<T:Item> Bindable<T> {
    /// Constructor. All the hooks start with their default behavior.
    pub fn new(buffer:Buffer<T>) -> Self {
        let logger              = buffer.logger().sub("bindable");
        let on_resized          : OnResized = Box::new(|_,_| {});
        let on_changed          : OnChanged = Box::new(|_| {});
        let on_changed_multiple = None;
        let on_changed_range    = None;
        Self {buffer,on_resized,on_changed,on_changed_multiple,on_changed_range,logger}
    }

    /// The wrapped buffer.
    pub fn buffer(&self) -> &Buffer<T> {
        &self.buffer
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


// === Hook Assignment ===

impl<T> Bindable<T> {
    /// Replaces the `on_resized` hook.
    pub fn set_on_resized<F:FnMut(usize,usize)+'static>(&mut self, f:F) {
        self.on_resized = Box::new(f);
    }

    /// Replaces the `on_changed` hook.
    pub fn set_on_changed<F:FnMut(usize)+'static>(&mut self, f:F) {
        self.on_changed = Box::new(f);
    }

    /// Replaces the `on_changed_multiple` hook. The replacement no longer calls `on_changed`.
    pub fn set_on_changed_multiple<F:FnMut(&[usize])+'static>(&mut self, f:F) {
        self.on_changed_multiple = Some(Box::new(f));
    }

    /// Replaces the `on_changed_range` hook. The replacement no longer calls `on_changed`.
    pub fn set_on_changed_range<F:FnMut(usize,usize)+'static>(&mut self, f:F) {
        self.on_changed_range = Some(Box::new(f));
    }

    /// Restores the default `on_changed_multiple` hook, delegating to `on_changed`.
    pub fn reset_on_changed_multiple(&mut self) {
        self.on_changed_multiple = None;
    }

    /// Restores the default `on_changed_range` hook, delegating to `on_changed`.
    pub fn reset_on_changed_range(&mut self) {
        self.on_changed_range = None;
    }

    fn notify_changed_multiple(&mut self, ixs:&[usize]) {
        match &mut self.on_changed_multiple {
            Some(f) => f(ixs),
            None    => for &ix in ixs { (self.on_changed)(ix) },
        }
    }

    fn notify_changed_range(&mut self, offset:usize, length:usize) {
        match &mut self.on_changed_range {
            Some(f) => f(offset,length),
            None    => for ix in offset..offset + length { (self.on_changed)(ix) },
        }
    }
}


// === Read / Write ===

impl<T:Item> Bindable<T> {
    /// Reads the element. Panics if the index is out of bounds.
    pub fn read(&self, ix:usize) -> T {
        self.buffer.read(ix)
    }

    /// Reads one element per index.
    pub fn read_multiple(&self, ixs:&[usize]) -> Vec<T> {
        self.buffer.read_multiple(ixs)
    }

    /// Writes the element, then calls `on_changed(ix)`.
    pub fn write(&mut self, ix:usize, value:T) -> Result<()> {
        self.buffer.write(ix,value)?;
        (self.on_changed)(ix);
        Ok(())
    }

    /// Writes the elements, then calls `on_changed_multiple(ixs)`. If any write fails no hook is
    /// called, even though the writes before the failing one are kept.
    pub fn write_multiple(&mut self, ixs:&[usize], vals:&[T]) -> Result<()> {
        self.buffer.write_multiple(ixs,vals)?;
        self.notify_changed_multiple(ixs);
        Ok(())
    }

    /// Copies the values starting at `offset`, then calls `on_changed_range(offset,values.len())`.
    pub fn set(&mut self, values:&[T], offset:usize) {
        self.buffer.set(values,offset);
        self.notify_changed_range(offset,values.len());
    }

    /// Resizes the buffer, then calls `on_resized(old_len,new_len)`. Does nothing at all if the
    /// length does not change.
    pub fn resize(&mut self, new_len:usize) {
        let old_len = self.len();
        if old_len != new_len {
            self.buffer.resize(new_len);
            self.logger.debug(fmt!("Notifying about resize from {old_len} to {new_len}."));
            (self.on_resized)(old_len,new_len);
        }
    }
}



// =============
// === Tests ===
// =============
