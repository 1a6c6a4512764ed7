//! This module defines the closed set of element kinds a buffer can store.

use crate::prelude::*;



// ===================
// === ElementKind ===
// ===================

/// Numeric representation of every element of a buffer.
#[derive(Clone,Copy,Debug,Display,PartialEq,Eq,Hash)]
#[allow(missing_docs)]
pub enum ElementKind {
    Int8, Uint8, Uint8Clamped, Int16, Uint16, Int32, Uint32, Float32, Float64
}

impl ElementKind {
    /// All the kinds, in declaration order.
    pub const ALL : [ElementKind;9] = [
        Self::Int8, Self::Uint8, Self::Uint8Clamped, Self::Int16, Self::Uint16, Self::Int32,
        Self::Uint32, Self::Float32, Self::Float64
    ];

    /// Size of a single element in bytes.
    pub fn byte_size(self) -> usize {
        match self {
            Self::Int8  | Self::Uint8  | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16                      => 2,
            Self::Int32 | Self::Uint32 | Self::Float32      => 4,
            Self::Float64                                   => 8,
        }
    }
}



// ===============
// === Clamped ===
// ===============

/// Unsigned 8-bit value which saturates instead of wrapping when built from an arbitrary number.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq,PartialOrd,Ord,Hash,Shrinkwrap)]
pub struct Clamped(pub u8);

impl Clamped {
    /// Clamps the number to `0..=255` and rounds half to even. `NaN` becomes 0.
    pub fn new(number:f64) -> Self {
        if number.is_nan() { Self(0) } else { Self(number.clamp(0.0,255.0).round_ties_even() as u8) }
    }
}

impl From<u8> for Clamped {
    fn from(t:u8) -> Self { Self(t) }
}

impl From<Clamped> for u8 {
    fn from(t:Clamped) -> Self { t.0 }
}



// ============
// === Item ===
// ============

/// Element type of a buffer. Numbers (`f64`) are the common currency for dynamically typed
/// access, every item converts to a number losslessly, but not every number is a valid item.
pub trait Item: Copy + Debug + Default + PartialEq + 'static {
    /// The kind of this item.
    const KIND : ElementKind;

    /// Converts a number to the item. Returns `None` if the number cannot be represented.
    fn from_number(number:f64) -> Option<Self>;

    /// Converts the item to a number.
    fn to_number(self) -> f64;
}

macro_rules! define_integer_items {
    ($($kind:ident => $t:ty),* $(,)?) => {$(
        impl Item for $t {
            const KIND : ElementKind = ElementKind::$kind;

            fn from_number(number:f64) -> Option<Self> {
                let integral = number.fract() == 0.0;
                let in_range = number >= <$t>::MIN as f64 && number <= <$t>::MAX as f64;
                if integral && in_range { Some(number as $t) } else { None }
            }

            fn to_number(self) -> f64 {
                self.into()
            }
        }
    )*};
}

define_integer_items! {
    Int8   => i8,
    Uint8  => u8,
    Int16  => i16,
    Uint16 => u16,
    Int32  => i32,
    Uint32 => u32,
}

impl Item for Clamped {
    const KIND : ElementKind = ElementKind::Uint8Clamped;

    fn from_number(number:f64) -> Option<Self> {
        Some(Self::new(number))
    }

    fn to_number(self) -> f64 {
        self.0.into()
    }
}

impl Item for f32 {
    const KIND : ElementKind = ElementKind::Float32;

    fn from_number(number:f64) -> Option<Self> {
        Some(number as f32)
    }

    fn to_number(self) -> f64 {
        self.into()
    }
}

impl Item for f64 {
    const KIND : ElementKind = ElementKind::Float64;

    fn from_number(number:f64) -> Option<Self> {
        Some(number)
    }

    fn to_number(self) -> f64 {
        self
    }
}

/// Converts all numbers to items, failing on the first one which is not representable.
pub fn items_from_numbers<T:Item>(numbers:&[f64]) -> crate::Result<Vec<T>> {
    let convert = |&number:&f64| T::from_number(number).ok_or_else(|| invalid_number::<T>(number));
    numbers.iter().map(convert).collect()
}

/// Error reported for a number which is not a valid `T`.
pub fn invalid_number<T:Item>(number:f64) -> crate::Error {
    crate::Error::invalid_argument(format!("{} is not a valid {} element.",number,T::KIND))
}



// =============
// === Tests ===
// =============
