//! Buffers of a kind chosen at runtime. All the values cross this boundary as `f64` numbers and
//! are validated against the element kind on the way in.

use crate::prelude::*;

use crate::buffer::Buffer;
use crate::error::Error;
use crate::error::Result;
use crate::item;
use crate::item::Clamped;
use crate::item::ElementKind;
use crate::item::Item;

use enum_dispatch::*;



// ================
// === IsBuffer ===
// ================

/// Collection of all methods common to every buffer variant.
#[enum_dispatch]
pub trait IsBuffer {
    /// Kind of the elements.
    fn kind(&self) -> ElementKind;
    /// The number of elements.
    fn len(&self) -> usize;
    /// Checks whether the buffer contains no elements.
    fn is_empty(&self) -> bool;
    /// Reads the element as a number. Panics if the index is out of bounds.
    fn read_number(&self, ix:usize) -> f64;
    /// Writes the number, failing if it is not a valid element or if the index is out of bounds.
    fn write_number(&self, ix:usize, number:f64) -> Result<()>;
    /// Resizes the buffer.
    fn resize(&self, new_len:usize);
}

impl<T:Item> IsBuffer for Buffer<T> {
    fn kind(&self) -> ElementKind {
        T::KIND
    }

    fn len(&self) -> usize {
        Buffer::len(self)
    }

    fn is_empty(&self) -> bool {
        Buffer::is_empty(self)
    }

    fn read_number(&self, ix:usize) -> f64 {
        Buffer::read(self,ix).to_number()
    }

    fn write_number(&self, ix:usize, number:f64) -> Result<()> {
        let value = T::from_number(number).ok_or_else(|| item::invalid_number::<T>(number))?;
        Buffer::write(self,ix,value)
    }

    fn resize(&self, new_len:usize) {
        Buffer::resize(self,new_len)
    }
}



// ===============
// === Options ===
// ===============

/// Initial content of a dynamically created buffer.
#[derive(Clone,Debug,PartialEq)]
pub enum Source {
    /// Number of elements, filled with the default pattern or with zeros.
    Size(usize),
    /// Values adopted by the buffer.
    Values(Vec<f64>),
}

/// Construction options of a dynamically created buffer.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Options {
    /// Pattern tiled over the initial and the grown storage.
    pub default : Option<Vec<f64>>,
}

impl Options {
    /// Sets the default pattern.
    pub fn default_pattern(mut self, pattern:Vec<f64>) -> Self {
        self.default = Some(pattern);
        self
    }
}



// =================
// === AnyBuffer ===
// =================

/// An enum with a variant per element kind. It provides an alternative to the dynamic trait object
/// `Box<dyn IsBuffer>` and allows downcasting back to the typed buffer.
#[enum_dispatch(IsBuffer)]
#[derive(Clone,Debug)]
#[allow(missing_docs)]
pub enum AnyBuffer {
    Int8         (Buffer<i8>),
    Uint8        (Buffer<u8>),
    Uint8Clamped (Buffer<Clamped>),
    Int16        (Buffer<i16>),
    Uint16       (Buffer<u16>),
    Int32        (Buffer<i32>),
    Uint32       (Buffer<u32>),
    Float32      (Buffer<f32>),
    Float64      (Buffer<f64>),
}

impl CloneRef for AnyBuffer {}

impl AnyBuffer {
    /// Creates a buffer of the given kind. Fails with `Error::InvalidArgument` if any of the
    /// source values or pattern values is not a valid element of that kind.
    pub fn new(kind:ElementKind, source:Source, options:Options) -> Result<Self> {
        match kind {
            ElementKind::Int8         => build::<i8>      (source,options).map(Self::Int8),
            ElementKind::Uint8        => build::<u8>      (source,options).map(Self::Uint8),
            ElementKind::Uint8Clamped => build::<Clamped> (source,options).map(Self::Uint8Clamped),
            ElementKind::Int16        => build::<i16>     (source,options).map(Self::Int16),
            ElementKind::Uint16       => build::<u16>     (source,options).map(Self::Uint16),
            ElementKind::Int32        => build::<i32>     (source,options).map(Self::Int32),
            ElementKind::Uint32       => build::<u32>     (source,options).map(Self::Uint32),
            ElementKind::Float32      => build::<f32>     (source,options).map(Self::Float32),
            ElementKind::Float64      => build::<f64>     (source,options).map(Self::Float64),
        }
    }

    /// Copies all the elements as numbers.
    pub fn to_numbers(&self) -> Vec<f64> {
        (0..self.len()).map(|ix| self.read_number(ix)).collect()
    }
}

fn build<T:Item>(source:Source, options:Options) -> Result<Buffer<T>> {
    let mut builder = Buffer::<T>::builder();
    if let Some(pattern) = options.default {
        builder = builder.default_pattern(item::items_from_numbers(&pattern)?);
    }
    match source {
        Source::Size(len)      => Ok(builder.build(len)),
        Source::Values(values) => Ok(builder.build_from(item::items_from_numbers(&values)?)),
    }
}


// === Downcasting ===

macro_rules! define_downcasts {
    ($($variant:ident => $t:ty),* $(,)?) => {$(
        impl<'t> TryFrom<&'t AnyBuffer> for &'t Buffer<$t> {
            type Error = Error;
            fn try_from(buffer:&'t AnyBuffer) -> Result<Self> {
                match buffer {
                    AnyBuffer::$variant(t) => Ok(t),
                    _ => Err(Error::invalid_argument(format!
                        ("Expected a {} buffer, got a {} one.",<$t>::KIND,buffer.kind()))),
                }
            }
        }
    )*};
}

define_downcasts! {
    Int8         => i8,
    Uint8        => u8,
    Uint8Clamped => Clamped,
    Int16        => i16,
    Uint16       => u16,
    Int32        => i32,
    Uint32       => u32,
    Float32      => f32,
    Float64      => f64,
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_by_size() {
        let buffer = AnyBuffer::new(ElementKind::Int16,Source::Size(3),default()).unwrap();
        assert_eq!(buffer.kind(), ElementKind::Int16);
        assert_eq!(buffer.to_numbers(), vec![0.0,0.0,0.0]);

        let options = Options::default().default_pattern(vec![1.0,2.0]);
        let buffer  = AnyBuffer::new(ElementKind::Uint8,Source::Size(5),options).unwrap();
        assert_eq!(buffer.to_numbers(), vec![1.0,2.0,1.0,2.0,1.0]);
    }

    #[test]
    fn construction_from_values() {
        let options = Options::default().default_pattern(vec![7.0]);
        let source  = Source::Values(vec![1.0,2.0]);
        let buffer  = AnyBuffer::new(ElementKind::Float32,source,options).unwrap();
        assert_eq!(buffer.to_numbers(), vec![1.0,2.0]);
        buffer.resize(4);
        assert_eq!(buffer.to_numbers(), vec![1.0,2.0,7.0,7.0]);
    }

    #[test]
    fn incompatible_source() {
        let source = Source::Values(vec![1.0,-1.0]);
        let err    = AnyBuffer::new(ElementKind::Uint32,source,default()).unwrap_err();
        assert_eq!(err, Error::invalid_argument("-1 is not a valid Uint32 element."));

        let options = Options::default().default_pattern(vec![0.5]);
        assert!(AnyBuffer::new(ElementKind::Int8,Source::Size(2),options).is_err());

        let source = Source::Values(vec![-3.0,300.0,f64::NAN]);
        let buffer = AnyBuffer::new(ElementKind::Uint8Clamped,source,default()).unwrap();
        assert_eq!(buffer.to_numbers(), vec![0.0,255.0,0.0]);
    }

    #[test]
    fn numeric_access() {
        let buffer = AnyBuffer::new(ElementKind::Int8,Source::Size(2),default()).unwrap();
        assert_eq!(buffer.write_number(1,-5.0), Ok(()));
        let err = Error::invalid_argument("0.5 is not a valid Int8 element.");
        assert_eq!(buffer.write_number(0,0.5), Err(err));
        assert_eq!(buffer.read_number(0), 0.0);
        assert_eq!(buffer.read_number(1), -5.0);
        assert!(matches!(buffer.write_number(0,1000.0), Err(Error::InvalidArgument{..})));
        assert_eq!(buffer.write_number(2,1.0), Err(Error::IndexOutOfRange {index:2,length:2}));
        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn downcasting() {
        let typed  = Buffer::<u16>::from_vec(vec![4,5]);
        let buffer = AnyBuffer::from(typed.clone_ref());
        let back   = <&Buffer<u16>>::try_from(&buffer).unwrap();
        back.write(0,40).unwrap();
        assert_eq!(typed.read(0), 40);

        let err = <&Buffer<f64>>::try_from(&buffer).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: Expected a Float64 buffer, got a Uint16 one.");
    }
}
