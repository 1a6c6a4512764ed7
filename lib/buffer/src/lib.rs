//! Resizable, typed, contiguous numeric buffers with change notification.
//!
//! A `Buffer` owns a contiguous array of one element kind (`i8`, `u8`, `Clamped`, `i16`, `u16`,
//! `i32`, `u32`, `f32` or `f64`). It can be seeded with a repeating default pattern, which is also
//! used to fill the space gained when the buffer grows. On top of a buffer you can build:
//!
//! - `View`, a window shifting indices by a fixed offset;
//! - `Bindable`, calling single replaceable hooks after every mutation;
//! - `Observable`, dispatching every changed index to any number of subscribers.
//!
//! Buffers are shared handles. Views and wrappers keep the storage alive, so it is never possible
//! to observe a buffer after it was freed.

#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_import_braces)]
#![warn(unused_qualifications)]
#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod any;
pub mod bindable;
pub mod buffer;
pub mod error;
pub mod item;
pub mod observable;
pub mod view;

pub use any::AnyBuffer;
pub use any::IsBuffer;
pub use any::Options;
pub use any::Source;
pub use bindable::Bindable;
pub use buffer::Buffer;
pub use buffer::Builder;
pub use error::Error;
pub use error::Result;
pub use item::Clamped;
pub use item::ElementKind;
pub use item::Item;
pub use observable::Observable;
pub use view::View;

/// Commonly used utilities.
pub mod prelude {
    pub use numbuf_prelude::*;
    pub use numbuf_logger::LoggerApi;
    pub use numbuf_logger::fmt;
    pub use numbuf_logger::group;

    #[cfg(not(feature = "no_logging"))]
    pub use numbuf_logger::enabled::Logger;
    #[cfg(feature = "no_logging")]
    pub use numbuf_logger::disabled::Logger;
}
