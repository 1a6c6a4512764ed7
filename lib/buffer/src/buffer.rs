//! Typed, resizable, contiguous storage of numeric elements.

use crate::prelude::*;

use crate::error;
use crate::error::Error;
use crate::error::Result;
use crate::item::ElementKind;
use crate::item::Item;



// ===============
// === Pattern ===
// ===============

/// Creates a vector of `tgt_len` elements filled by tiling `pattern`. The pattern is copied to the
/// front first, then the already filled prefix is copied right after itself, doubling the filled
/// region on every step until the target length is reached. For a non-empty pattern the result is
/// the same as repeating the pattern periodically; the doubling copy needs only a logarithmic number
/// of bulk copies. An empty pattern leaves the vector filled with the default item.
pub fn pattern_vec<T:Item>(pattern:&[T], tgt_len:usize) -> Vec<T> {
    let mut vec = vec![T::default();tgt_len];
    let mut len = pattern.len().min(tgt_len);
    vec[..len].copy_from_slice(&pattern[..len]);
    if len > 0 {
        while len < tgt_len {
            let count = len.min(tgt_len - len);
            vec.copy_within(0..count,len);
            len <<= 1;
        }
    }
    vec
}

/// Creates a vector of `len` elements, tiled with the pattern if there is one.
fn new_vec<T:Item>(pattern:Option<&[T]>, len:usize) -> Vec<T> {
    match pattern {
        Some(pattern) => pattern_vec(pattern,len),
        None          => vec![T::default();len],
    }
}



// ============
// === Data ===
// ============

/// The storage behind a `Buffer` handle.
#[derive(Clone,Debug)]
pub struct Data<T> {
    vec     : Vec<T>,
    pattern : Option<Vec<T>>,
}



// ==============
// === Buffer ===
// ==============

/// Contiguous array of elements of a single kind. Cloning a buffer (or calling `clone_ref`) creates
/// a new handle to the same storage; resizing swaps the storage behind all the handles at once.
///
/// Only `write` checks bounds. Unchecked operations (`read`, `read_multiple`, `set`) panic when
/// accessing elements out of bounds, use `get` for a checked read.
#[derive(Derivative)]
#[derivative(Clone(bound=""))]
#[derivative(Debug(bound="T:Debug"))]
pub struct Buffer<T> {
    data   : Rc<RefCell<Data<T>>>,
    logger : Logger,
}

impl<T> CloneRef for Buffer<T> {}

impl<T:Item> Buffer<T> {
    /// Creates a zero-filled buffer.
    pub fn new(len:usize) -> Self {
        Self::builder().build(len)
    }

    /// Creates a buffer filled by tiling the pattern. The pattern is remembered and used to fill
    /// new elements when the buffer grows.
    pub fn with_default(pattern:Vec<T>, len:usize) -> Self {
        Self::builder().default_pattern(pattern).build(len)
    }

    /// Creates a buffer adopting the provided values.
    pub fn from_vec(vec:Vec<T>) -> Self {
        Self::builder().build_from(vec)
    }

    /// Returns a new buffer `Builder` object.
    pub fn builder() -> Builder<T> {
        default()
    }

    fn new_from(vec:Vec<T>, pattern:Option<Vec<T>>, logger:Logger) -> Self {
        let pattern = pattern.filter(|p| !p.is_empty());
        logger.info(fmt!("Creating new {} buffer of {} elements.",T::KIND,vec.len()));
        let data = Rc::new(RefCell::new(Data {vec,pattern}));
        Self {data,logger}
    }

    fn on_failure(&self, err:Error) -> Error {
        self.logger.warning(fmt!("{}",err));
        err
    }
}


// === Getters ===

impl<T:Item> Buffer<T> {
    /// The number of elements.
    pub fn len(&self) -> usize {
        self.data.borrow().vec.len()
    }

    /// Checks whether the buffer contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of the elements.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// The pattern used to fill new space, if any.
    pub fn default_pattern(&self) -> Option<Vec<T>> {
        self.data.borrow().pattern.clone()
    }

    /// Borrows the current storage. The borrow must be released before mutating the buffer.
    pub fn array(&self) -> Ref<'_,[T]> {
        Ref::map(self.data.borrow(), |data| data.vec.as_slice())
    }

    /// Copies all the elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.borrow().vec.clone()
    }

    /// Logger of this buffer.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}


// === Read / Write ===

impl<T:Item> Buffer<T> {
    /// Reads the element. Panics if the index is out of bounds.
    pub fn read(&self, ix:usize) -> T {
        self.data.borrow().vec[ix]
    }

    /// Reads the element, or returns `None` if the index is out of bounds.
    pub fn get(&self, ix:usize) -> Option<T> {
        self.data.borrow().vec.get(ix).copied()
    }

    /// Writes the element. Fails with `Error::IndexOutOfRange` if `ix >= len`.
    pub fn write(&self, ix:usize, value:T) -> Result<()> {
        let mut data = self.data.borrow_mut();
        let length   = data.vec.len();
        error::assert(ix < length, || Error::IndexOutOfRange {index:ix,length})
            .map_err(|err| self.on_failure(err))?;
        data.vec[ix] = value;
        Ok(())
    }

    /// Reads one element per index, in the same order. Panics if any index is out of bounds.
    pub fn read_multiple(&self, ixs:&[usize]) -> Vec<T> {
        let data = self.data.borrow();
        ixs.iter().map(|&ix| data.vec[ix]).collect()
    }

    /// Writes `vals[i]` at `ixs[i]`, in ascending `i` order. Fails with `Error::InvalidArgument`
    /// before writing anything if the slices differ in length. Fails with
    /// `Error::IndexOutOfRange` on the first bad index; the writes before it are kept.
    pub fn write_multiple(&self, ixs:&[usize], vals:&[T]) -> Result<()> {
        error::assert(ixs.len() == vals.len(), || {
            let reason = format!("Got {} indexes and {} values.",ixs.len(),vals.len());
            Error::invalid_argument(reason)
        }).map_err(|err| self.on_failure(err))?;
        for (&ix,&val) in ixs.iter().zip(vals) {
            self.write(ix,val)?;
        }
        Ok(())
    }

    /// Copies `values` into the buffer starting at `offset`. Panics if the values do not fit.
    pub fn set(&self, values:&[T], offset:usize) {
        let mut data = self.data.borrow_mut();
        data.vec[offset..offset + values.len()].copy_from_slice(values);
    }
}


// === Size Management ===

impl<T:Item> Buffer<T> {
    /// Resizes the buffer. The new storage is filled the same way as on construction, then the
    /// first `min(len,new_len)` elements are copied over from the old storage. The old storage is
    /// replaced as the very last step.
    pub fn resize(&self, new_len:usize) {
        let mut data = self.data.borrow_mut();
        let old_len  = data.vec.len();
        group!(self.logger, "Resizing from {old_len} to {new_len} elements.", {
            let preserved = old_len.min(new_len);
            let mut vec   = new_vec(data.pattern.as_deref(),new_len);
            vec[..preserved].copy_from_slice(&data.vec[..preserved]);
            data.vec = vec;
        })
    }
}



// ===============
// === Builder ===
// ===============

/// Buffer builder.
#[derive(Derivative)]
#[derivative(Default(bound=""))]
#[derivative(Debug(bound="T:Debug"))]
pub struct Builder<T> {
    _pattern : Option<Vec<T>>,
    _logger  : Option<Logger>,
}

impl<T:Item> Builder<T> {
    /// Constructor.
    pub fn new() -> Self {
        default()
    }

    /// Pattern tiled over the initial and the grown storage.
    pub fn default_pattern(self, val:Vec<T>) -> Self {
        Self { _pattern: Some(val), _logger: self._logger }
    }

    /// Logger to be used by the buffer.
    pub fn logger(self, val:Logger) -> Self {
        Self { _pattern: self._pattern, _logger: Some(val) }
    }

    /// Builds a buffer of `len` elements, filled with the pattern if it was provided, or with
    /// zeros otherwise.
    pub fn build(self, len:usize) -> Buffer<T> {
        let vec = new_vec(self._pattern.as_deref(),len);
        self.build_from(vec)
    }

    /// Builds a buffer adopting `vec`. The pattern, if provided, is used by later resizes only.
    pub fn build_from(self, vec:Vec<T>) -> Buffer<T> {
        let logger = self._logger.unwrap_or_else(|| Logger::new("buffer"));
        Buffer::new_from(vec,self._pattern,logger)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiling() {
        assert_eq!(pattern_vec(&[1,2],7), vec![1,2,1,2,1,2,1]);
        assert_eq!(pattern_vec(&[5],4), vec![5,5,5,5]);
        assert_eq!(pattern_vec(&[1,2,3],8), vec![1,2,3,1,2,3,1,2]);
        assert_eq!(pattern_vec(&[1,2,3,4],2), vec![1,2]);
        assert_eq!(pattern_vec(&[1,2],0), Vec::<i32>::new());
        assert_eq!(pattern_vec::<i32>(&[],3), vec![0,0,0]);
    }

    #[test]
    fn tiling_matches_periodic_fill() {
        let pattern = [3u16,1,4,1,5];
        for len in 0..64 {
            let periodic = (0..len).map(|i| pattern[i % pattern.len()]).collect_vec();
            assert_eq!(pattern_vec(&pattern,len), periodic);
        }
    }

    #[test]
    fn construction() {
        let buffer = Buffer::<i8>::with_default(vec![1,2],7);
        assert_eq!(buffer.to_vec(), vec![1,2,1,2,1,2,1]);
        assert_eq!(buffer.kind(), ElementKind::Int8);
        assert_eq!(Buffer::<f32>::new(3).to_vec(), vec![0.0,0.0,0.0]);
        assert!(Buffer::<u8>::new(0).is_empty());
        let buffer = Buffer::<u8>::builder().default_pattern(vec![9]).build_from(vec![1,2]);
        assert_eq!(buffer.to_vec(), vec![1,2]);
        assert_eq!(buffer.default_pattern(), Some(vec![9]));
        assert_eq!(Buffer::<u8>::with_default(Vec::new(),2).default_pattern(), None);
    }

    #[test]
    fn resize_preserves_prefix() {
        let buffer = Buffer::<i32>::from_vec(vec![1,2,3,4]);
        buffer.resize(2);
        assert_eq!(buffer.to_vec(), vec![1,2]);
        buffer.resize(4);
        assert_eq!(buffer.to_vec(), vec![1,2,0,0]);
    }

    #[test]
    fn resize_tiles_pattern() {
        let buffer = Buffer::<u16>::with_default(vec![7,8],3);
        buffer.write(0,1).unwrap();
        buffer.resize(6);
        assert_eq!(buffer.to_vec(), vec![1,8,7,8,7,8]);
    }

    #[test]
    fn resize_is_visible_through_all_handles() {
        let buffer = Buffer::<f64>::new(2);
        let handle = buffer.clone_ref();
        buffer.resize(5);
        assert_eq!(handle.len(), 5);
    }

    #[test]
    fn bounds_check() {
        let buffer = Buffer::<f32>::new(4);
        assert_eq!(buffer.write(4,1.5), Err(Error::IndexOutOfRange {index:4,length:4}));
        assert_eq!(buffer.write(3,1.5), Ok(()));
        assert_eq!(buffer.read(3), 1.5);
        assert_eq!(buffer.get(3), Some(1.5));
        assert_eq!(buffer.get(4), None);
    }

    #[test]
    #[should_panic]
    fn unchecked_read_out_of_bounds() {
        Buffer::<u8>::new(2).read(2);
    }

    #[test]
    fn multiple() {
        let buffer = Buffer::<u32>::new(4);
        buffer.write_multiple(&[3,0],&[30,10]).unwrap();
        assert_eq!(buffer.read_multiple(&[0,3,0]), vec![10,30,10]);
        assert!(matches!(buffer.write_multiple(&[1],&[1,2]), Err(Error::InvalidArgument{..})));
        assert_eq!(buffer.to_vec(), vec![10,0,0,30]);
    }

    #[test]
    fn write_multiple_keeps_writes_before_failure() {
        let buffer = Buffer::<u32>::new(3);
        let result = buffer.write_multiple(&[0,5,1],&[1,2,3]);
        assert_eq!(result, Err(Error::IndexOutOfRange {index:5,length:3}));
        assert_eq!(buffer.to_vec(), vec![1,0,0]);
    }

    #[test]
    fn set() {
        let buffer = Buffer::<i16>::new(5);
        buffer.set(&[9,9,9],1);
        assert_eq!(buffer.to_vec(), vec![0,9,9,9,0]);
        buffer.set(&[1,2],3);
        assert_eq!(buffer.to_vec(), vec![0,9,9,1,2]);
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds() {
        Buffer::<i16>::new(2).set(&[1,2],1);
    }
}
