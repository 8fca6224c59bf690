use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};
use core::{fmt, iter::FusedIterator};

use crate::{FixedVec, utils::trace_spill};

/// The active representation of a [`HybridVec`].
pub enum Repr<T, const N: usize> {
    Inline(FixedVec<T, N>),
    Overflow(Vec<T>),
}

/// A shared borrow of the active representation. See [`HybridVec::inner_ref`].
pub enum ReprRef<'a, T, const N: usize> {
    Inline(&'a FixedVec<T, N>),
    Overflow(&'a Vec<T>),
}

/// A mutable borrow of the active representation. See [`HybridVec::inner_mut`].
pub enum ReprMut<'a, T, const N: usize> {
    Inline(&'a mut FixedVec<T, N>),
    Overflow(&'a mut Vec<T>),
}

impl<T, const N: usize> Clone for ReprRef<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for ReprRef<'_, T, N> {}

impl<T: Clone + Default, const N: usize> Clone for Repr<T, N> {
    fn clone(&self) -> Self {
        match self {
            Repr::Inline(vec) => Repr::Inline(vec.clone()),
            Repr::Overflow(vec) => Repr::Overflow(vec.clone()),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Repr<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Inline(vec) => f.debug_tuple("Inline").field(vec).finish(),
            Repr::Overflow(vec) => f.debug_tuple("Overflow").field(vec).finish(),
        }
    }
}

/// A vector stored inline by default, moved to the heap once it outgrows `N`.
///
/// This type is useful when you are unsure of the length of the data but know that
/// the amount of data is usually small. Up to `N` elements live in a [`FixedVec`];
/// the first operation that would need more moves everything into a [`Vec`].
///
/// The move is one way. Once the data lives on the heap it stays there, even after
/// [`clear`](HybridVec::clear) or [`shrink_to_fit`](HybridVec::shrink_to_fit).
///
/// Most methods are similar to [`Vec`].
///
/// # Examples
///
/// ```
/// use inline_vector::{HybridVec, hybridvec};
///
/// let mut vec: HybridVec<&'static str, 3> = hybridvec!["Hello", "world"];
/// assert!(vec.is_inlined());
/// assert_eq!(vec.capacity(), 3);
///
/// // Growing past the inline capacity moves the data to the heap.
/// vec.extend(["2026", "10", "14"]);
/// assert!(!vec.is_inlined());
/// assert_eq!(vec, ["Hello", "world", "2026", "10", "14"]);
///
/// // Shrinking does not bring it back.
/// vec.truncate(1);
/// assert!(!vec.is_inlined());
///
/// let vec: Vec<&'static str> = vec.into_vec();
/// ```
#[repr(transparent)]
pub struct HybridVec<T, const N: usize>(Repr<T, N>);

/// Creates a [`HybridVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// The data is placed inline when the number of elements does not exceed `N`,
/// otherwise it goes straight to the heap.
///
/// # Examples
///
/// ```
/// # use inline_vector::{hybridvec, HybridVec};
/// let vec: HybridVec<String, 10> = hybridvec![];
/// let vec: HybridVec<i64, 4> = hybridvec![1; 5];
/// assert!(!vec.is_inlined());
/// let vec: HybridVec<_, 10> = hybridvec![1, 2, 3, 4];
/// assert!(vec.is_inlined());
/// ```
#[macro_export]
macro_rules! hybridvec {
    [] => { $crate::HybridVec::new() };
    [$elem:expr; $n:expr] => { $crate::HybridVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::HybridVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> From<Vec<T>> for HybridVec<T, N> {
    /// The result is on the heap regardless of its length.
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(Repr::Overflow(value))
    }
}

impl<T, const N: usize> From<FixedVec<T, N>> for HybridVec<T, N> {
    #[inline]
    fn from(value: FixedVec<T, N>) -> Self {
        Self(Repr::Inline(value))
    }
}

impl<T, const N: usize> HybridVec<T, N> {
    /// Returns `true` while the data is stored inline.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 2> = hybridvec![1, 2];
    /// assert!(vec.is_inlined());
    /// vec.push(3);
    /// assert!(!vec.is_inlined());
    /// ```
    #[inline(always)]
    pub const fn is_inlined(&self) -> bool {
        matches!(self.0, Repr::Inline(_))
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Inline(vec) => vec.len(),
            Repr::Overflow(vec) => vec.len(),
        }
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of elements the vector can hold without moving.
    ///
    /// This is `N` while inline.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.0 {
            Repr::Inline(_) => N,
            Repr::Overflow(vec) => vec.capacity(),
        }
    }

    /// The largest length a heap-backed vector of `T` can reach.
    #[inline]
    pub const fn max_size(&self) -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// This never moves inline data to the heap; it only forwards to
    /// [`Vec::reserve`] once the data is already there.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<i32, 4> = hybridvec![];
    /// vec.reserve(100);
    /// assert!(vec.is_inlined());
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if let Repr::Overflow(vec) = &mut self.0 {
            vec.reserve(additional);
        }
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// Always succeeds while inline, see [`reserve`](HybridVec::reserve).
    ///
    /// # Errors
    /// If the capacity overflows, or the allocator reports a failure.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        match &mut self.0 {
            Repr::Inline(_) => Ok(()),
            Repr::Overflow(vec) => vec.try_reserve(additional),
        }
    }

    /// Shrinks the heap capacity as much as possible. Inline data is not affected,
    /// and heap data is never moved back inline.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        if let Repr::Overflow(vec) = &mut self.0 {
            vec.shrink_to_fit();
        }
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.0 {
            Repr::Inline(vec) => vec.as_slice(),
            Repr::Overflow(vec) => vec.as_slice(),
        }
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.0 {
            Repr::Inline(vec) => vec.as_mut_slice(),
            Repr::Overflow(vec) => vec.as_mut_slice(),
        }
    }

    /// Same as [`as_slice`](HybridVec::as_slice).
    #[inline(always)]
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is invalidated when the data moves to the heap.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match &self.0 {
            Repr::Inline(vec) => vec.as_ptr(),
            Repr::Overflow(vec) => vec.as_ptr(),
        }
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len`.
    #[inline]
    pub fn at(&self, pos: usize) -> &T {
        &self.as_slice()[pos]
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.as_mut_slice()[pos]
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(item) => item,
            None => panic!("`front` called on an empty vector"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(item) => item,
            None => panic!("`back` called on an empty vector"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(item) => item,
            None => panic!("`front_mut` called on an empty vector"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(item) => item,
            None => panic!("`back_mut` called on an empty vector"),
        }
    }

    /// Consumes the vector and returns its current representation.
    #[inline]
    pub fn into_inner(self) -> Repr<T, N> {
        self.0
    }

    /// Borrows the active storage, inline or heap.
    #[inline]
    pub fn inner_ref(&self) -> ReprRef<'_, T, N> {
        match &self.0 {
            Repr::Inline(vec) => ReprRef::Inline(vec),
            Repr::Overflow(vec) => ReprRef::Overflow(vec),
        }
    }

    /// Mutably borrows the active storage, inline or heap.
    #[inline]
    pub fn inner_mut(&mut self) -> ReprMut<'_, T, N> {
        match &mut self.0 {
            Repr::Inline(vec) => ReprMut::Inline(vec),
            Repr::Overflow(vec) => ReprMut::Overflow(vec),
        }
    }
}

impl<T: Default, const N: usize> HybridVec<T, N> {
    /// Constructs a new, empty, inline `HybridVec`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::HybridVec;
    /// let vec: HybridVec<i32, 8> = HybridVec::new();
    /// assert!(vec.is_inlined());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self(Repr::Inline(FixedVec::new()))
    }

    /// Constructs an empty vector that can hold at least `capacity` elements
    /// without moving. The data starts on the heap only when `capacity > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::HybridVec;
    /// let vec = HybridVec::<i32, 4>::with_capacity(4);
    /// assert!(vec.is_inlined());
    ///
    /// let vec = HybridVec::<i32, 4>::with_capacity(5);
    /// assert!(!vec.is_inlined());
    /// assert!(vec.capacity() >= 5);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity > N {
            Self(Repr::Overflow(Vec::with_capacity(capacity)))
        } else {
            Self::new()
        }
    }

    /// Creates a [`HybridVec`] from an array, inline if `P <= N`.
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        if P <= N {
            Self(Repr::Inline(FixedVec::from_buf(arr)))
        } else {
            Self(Repr::Overflow(Vec::from(arr)))
        }
    }

    /// Moves the inline elements to the heap if `new_len` would not fit.
    #[inline]
    pub(crate) fn prepare(&mut self, new_len: usize) {
        if new_len > N && self.is_inlined() {
            self.spill(new_len);
        }
    }

    #[cold]
    #[inline(never)]
    fn spill(&mut self, min_capacity: usize) {
        if let Repr::Inline(vec) = &mut self.0 {
            let capacity = (N + (N >> 1) + 4).max(min_capacity);
            trace_spill!(
                "spilling {} inline elements to the heap (capacity {})",
                vec.len(),
                capacity
            );
            let heap = vec.take_into_vec(capacity);
            self.0 = Repr::Overflow(heap);
        }
    }

    /// Appends an element to the back of the vector.
    ///
    /// Appending to a full inline vector moves the data to the heap first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<_, 3> = hybridvec![1, 2, 3];
    /// vec.push(4);
    /// assert!(!vec.is_inlined());
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        self.prepare(self.len() + 1);
        match &mut self.0 {
            Repr::Inline(vec) => vec.push(value),
            Repr::Overflow(vec) => vec.push(value),
        }
    }

    /// Removes the last element from a vector and returns it, or `None` if it is empty.
    ///
    /// This function does not affect the position (inline/heap) of the data.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match &mut self.0 {
            Repr::Inline(vec) => vec.pop(),
            Repr::Overflow(vec) => vec.pop(),
        }
    }

    /// Removes and returns the last element if the predicate returns `true`.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Option<T> {
        match &mut self.0 {
            Repr::Inline(vec) => vec.pop_if(predicate),
            Repr::Overflow(vec) => {
                let last = vec.last_mut()?;
                if predicate(last) { vec.pop() } else { None }
            }
        }
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<_, 3> = hybridvec![1, 2, 3];
    /// vec.insert(0, 0);
    /// assert_eq!(vec, [0, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        assert!(index <= self.len(), "insertion index should be <= len");
        self.prepare(self.len() + 1);
        match &mut self.0 {
            Repr::Inline(vec) => vec.insert(index, element),
            Repr::Overflow(vec) => vec.insert(index, element),
        }
    }

    /// Inserts the items of an exact-size iterator at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        assert!(index <= self.len(), "insertion index should be <= len");
        self.prepare(self.len() + iter.len());
        match &mut self.0 {
            Repr::Inline(vec) => vec.insert_iter(index, iter),
            Repr::Overflow(vec) => {
                vec.splice(index..index, iter);
            }
        }
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> T {
        match &mut self.0 {
            Repr::Inline(vec) => vec.remove(index),
            Repr::Overflow(vec) => vec.remove(index),
        }
    }

    /// Removes an element and returns it, replacing it with the last element.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> T {
        match &mut self.0 {
            Repr::Inline(vec) => vec.swap_remove(index),
            Repr::Overflow(vec) => vec.swap_remove(index),
        }
    }

    /// Shortens the vector to `len` elements. Does nothing if `len` is not smaller.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        match &mut self.0 {
            Repr::Inline(vec) => vec.truncate(len),
            Repr::Overflow(vec) => vec.truncate(len),
        }
    }

    /// Clears the vector, removing all values.
    ///
    /// Heap data keeps its allocation and stays on the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<_, 2> = hybridvec![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert!(!vec.is_inlined());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        match &mut self.0 {
            Repr::Inline(vec) => vec.clear(),
            Repr::Overflow(vec) => vec.clear(),
        }
    }

    /// Resizes the vector so that `len == count`, filling new slots with `T::default()`.
    pub fn resize(&mut self, count: usize) {
        self.prepare(count);
        match &mut self.0 {
            Repr::Inline(vec) => vec.resize(count),
            Repr::Overflow(vec) => vec.resize_with(count, T::default),
        }
    }

    /// Resizes the vector so that `len == new_len`, filling new slots with `f()`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        self.prepare(new_len);
        match &mut self.0 {
            Repr::Inline(vec) => vec.resize_with(new_len, f),
            Repr::Overflow(vec) => vec.resize_with(new_len, f),
        }
    }

    /// Keeps only the elements for which `f` returns `true`, in order.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|v| f(v));
    }

    /// Same as [`retain`](HybridVec::retain), with mutable access to each element.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, f: F) {
        match &mut self.0 {
            Repr::Inline(vec) => vec.retain_mut(f),
            Repr::Overflow(vec) => vec.retain_mut(f),
        }
    }

    #[inline]
    pub fn dedup_by_key<F, K>(&mut self, mut key: F)
    where
        F: FnMut(&mut T) -> K,
        K: PartialEq,
    {
        self.dedup_by(|a, b| key(a) == key(b));
    }

    /// Removes consecutive elements for which `same_bucket` returns `true`.
    pub fn dedup_by<F: FnMut(&mut T, &mut T) -> bool>(&mut self, same_bucket: F) {
        match &mut self.0 {
            Repr::Inline(vec) => vec.dedup_by(same_bucket),
            Repr::Overflow(vec) => vec.dedup_by(same_bucket),
        }
    }

    /// Removes the elements in `range`, shifting the tail left.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends past `len`.
    #[inline]
    pub fn erase<R: core::ops::RangeBounds<usize>>(&mut self, range: R) {
        self.drain(range);
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// The position (inline/heap) of `other` is not affected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec1: HybridVec<_, 4> = hybridvec![1, 2, 3];
    /// let mut vec2: HybridVec<_, 4> = hybridvec![4, 5, 6];
    /// vec1.append(&mut vec2);
    ///
    /// assert_eq!(vec1, [1, 2, 3, 4, 5, 6]);
    /// assert_eq!(vec2, []);
    /// # assert!(!vec1.is_inlined());
    /// # assert!(vec2.is_inlined());
    /// ```
    pub fn append<const P: usize>(&mut self, other: &mut HybridVec<T, P>) {
        self.prepare(self.len() + other.len());
        self.extend(other.drain(..));
    }

    /// Splits the collection into two at the given index.
    ///
    /// The returned tail is inline whenever it fits.
    ///
    /// # Panics
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Self {
        match &mut self.0 {
            Repr::Inline(vec) => Self(Repr::Inline(vec.split_off(at))),
            Repr::Overflow(vec) => match FixedVec::try_from(vec.split_off(at)) {
                Ok(tail) => Self(Repr::Inline(tail)),
                Err(err) => Self(Repr::Overflow(err.into_inner())),
            },
        }
    }

    /// Converts the vector into a [`Vec`], moving inline data to the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let vec: HybridVec<_, 4> = hybridvec![1, 2];
    /// assert_eq!(vec.into_vec(), [1, 2]);
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        match self.0 {
            Repr::Inline(vec) => vec.into_vec(),
            Repr::Overflow(vec) => vec,
        }
    }

    /// Converts the vector into a boxed slice, allocating if it is still inline.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.into_vec().into_boxed_slice()
    }
}

impl<T: Clone + Default, const N: usize> HybridVec<T, N> {
    /// Creates a [`HybridVec`] with `num` copies of `elem`, inline if `num <= N`.
    pub fn from_elem(elem: T, num: usize) -> Self {
        if num <= N {
            Self(Repr::Inline(FixedVec::from_elem(elem, num)))
        } else {
            Self(Repr::Overflow(alloc::vec![elem; num]))
        }
    }

    /// Resizes the vector so that `len == new_len`, filling new slots with clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut vec: HybridVec<_, 2> = hybridvec!["hello"];
    /// vec.resize_value(3, "world");
    /// assert_eq!(vec, ["hello", "world", "world"]);
    /// assert!(!vec.is_inlined());
    /// ```
    pub fn resize_value(&mut self, new_len: usize, value: T) {
        self.prepare(new_len);
        match &mut self.0 {
            Repr::Inline(vec) => vec.resize_value(new_len, value),
            Repr::Overflow(vec) => vec.resize(new_len, value),
        }
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) {
        self.insert_iter(index, core::iter::repeat_n(value, count));
    }

    /// Extends the vector by cloning all elements from the given slice.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.prepare(self.len() + other.len());
        match &mut self.0 {
            Repr::Inline(vec) => vec.extend_from_slice(other),
            Repr::Overflow(vec) => vec.extend_from_slice(other),
        }
    }
}

impl<T: PartialEq + Default, const N: usize> HybridVec<T, N> {
    /// Removes consecutive duplicate elements according to the [`PartialEq`] implementation.
    #[inline]
    pub fn dedup(&mut self) {
        self.dedup_by(|x, y| PartialEq::eq(x, y));
    }
}

impl<T: Default, const N: usize> Default for HybridVec<T, N> {
    /// It's eq to [`HybridVec::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default, const N: usize> Clone for HybridVec<T, N> {
    /// The copy keeps the representation of the source.
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T: 'a + Clone + Default, const N: usize> Extend<&'a T> for HybridVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Default, const N: usize> Extend<T> for HybridVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        if let Repr::Inline(vec) = &mut self.0 {
            while !vec.is_full() {
                match iter.next() {
                    Some(item) => vec.push(item),
                    None => return,
                }
            }
            match iter.next() {
                Some(item) => self.push(item),
                None => return,
            }
        }
        if let Repr::Overflow(vec) = &mut self.0 {
            vec.extend(iter);
        }
    }
}

crate::utils::impl_common_traits!(HybridVec<T, N>);

impl<T, U, const N: usize> PartialEq<HybridVec<U, N>> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &HybridVec<U, N>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<FixedVec<U, N>> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &FixedVec<U, N>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<HybridVec<U, N>> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &HybridVec<U, N>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Default, const N: usize, const P: usize> From<[T; P]> for HybridVec<T, N> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T: Clone + Default, const N: usize> From<&[T]> for HybridVec<T, N> {
    fn from(value: &[T]) -> Self {
        if value.len() <= N {
            Self(Repr::Inline(FixedVec::from(value)))
        } else {
            Self(Repr::Overflow(value.to_vec()))
        }
    }
}

impl<T: Default, const N: usize> FromIterator<T> for HybridVec<T, N> {
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::HybridVec;
    /// let small: HybridVec<i32, 4> = (0..4).collect();
    /// assert!(small.is_inlined());
    ///
    /// let large: HybridVec<i32, 4> = (0..5).collect();
    /// assert!(!large.is_inlined());
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> IntoIterator for HybridVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        match self.0 {
            Repr::Inline(vec) => IntoIter::Inline(IntoIterator::into_iter(vec)),
            Repr::Overflow(vec) => IntoIter::Overflow(IntoIterator::into_iter(vec)),
        }
    }
}

/// An iterator that consumes a [`HybridVec`] and yields its items by value.
#[derive(Clone)]
pub enum IntoIter<T, const N: usize> {
    Inline(crate::fixed_vec::IntoIter<T, N>),
    Overflow(alloc::vec::IntoIter<T>),
}

impl<T, const N: usize> IntoIter<T, N> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            IntoIter::Inline(iter) => iter.as_slice(),
            IntoIter::Overflow(iter) => iter.as_slice(),
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            IntoIter::Inline(iter) => iter.as_mut_slice(),
            IntoIter::Overflow(iter) => iter.as_mut_slice(),
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            IntoIter::Inline(iter) => iter.next(),
            IntoIter::Overflow(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            IntoIter::Inline(iter) => iter.size_hint(),
            IntoIter::Overflow(iter) => iter.size_hint(),
        }
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            IntoIter::Inline(iter) => iter.next_back(),
            IntoIter::Overflow(iter) => iter.next_back(),
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

/// An iterator that removes the items from a [`HybridVec`] and yields them by value.
///
/// See [`HybridVec::drain`].
pub enum Drain<'a, T: Default, const N: usize> {
    Inline(crate::fixed_vec::Drain<'a, T, N>),
    Overflow(alloc::vec::Drain<'a, T>),
}

impl<T: Default, const N: usize> HybridVec<T, N> {
    /// Removes the subslice indicated by the given range from the vector,
    /// returning a double-ended iterator over the removed subslice.
    ///
    /// # Panics
    /// Panics if the range has `start_bound > end_bound`, or,
    /// if the range is bounded on either end and past the length of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{HybridVec, hybridvec};
    /// let mut v: HybridVec<_, 2> = hybridvec![1, 2, 3];
    /// let u: Vec<_> = v.drain(1..).collect();
    /// assert_eq!(v, [1]);
    /// assert_eq!(u, [2, 3]);
    /// ```
    #[inline]
    pub fn drain<R: core::ops::RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T, N> {
        match &mut self.0 {
            Repr::Inline(vec) => Drain::Inline(vec.drain(range)),
            Repr::Overflow(vec) => Drain::Overflow(vec.drain(range)),
        }
    }
}

impl<T: Default, const N: usize> Drain<'_, T, N> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Drain::Inline(drain) => drain.as_slice(),
            Drain::Overflow(drain) => drain.as_slice(),
        }
    }
}

impl<T: Default, const N: usize> AsRef<[T]> for Drain<'_, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Default + fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T: Default, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self {
            Drain::Inline(drain) => drain.next(),
            Drain::Overflow(drain) => drain.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Drain::Inline(drain) => drain.size_hint(),
            Drain::Overflow(drain) => drain.size_hint(),
        }
    }
}

impl<T: Default, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match self {
            Drain::Inline(drain) => drain.next_back(),
            Drain::Overflow(drain) => drain.next_back(),
        }
    }
}

impl<T: Default, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}

impl<T: Default, const N: usize> FusedIterator for Drain<'_, T, N> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixedvec, hybridvec};
    use alloc::{rc::Rc, string::String, vec};
    use core::cell::Cell;

    #[derive(Default)]
    struct Tracked(Option<Rc<Cell<usize>>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            if let Some(counter) = &self.0 {
                counter.set(counter.get() + 1);
            }
        }
    }

    fn check_boundary<const N: usize>() {
        let mut vec: HybridVec<usize, N> = HybridVec::new();
        for k in 0..N {
            vec.push(k);
            assert!(vec.is_inlined());
            assert_eq!(vec.capacity(), N);
            assert_eq!(vec.len(), k + 1);
        }

        vec.push(N);
        assert!(!vec.is_inlined());
        assert_eq!(vec.len(), N + 1);
        assert!(vec.capacity() >= N + (N >> 1) + 4);
        assert!(vec.iter().copied().eq(0..=N));

        vec.push(N + 1);
        assert!(!vec.is_inlined());
        assert!(vec.iter().copied().eq(0..=N + 1));
    }

    #[test]
    fn upgrade_boundary() {
        check_boundary::<0>();
        check_boundary::<1>();
        check_boundary::<2>();
        check_boundary::<3>();
        check_boundary::<8>();
        check_boundary::<33>();
    }

    #[test]
    fn push_past_inline_capacity() {
        let mut vec: HybridVec<i32, 3> = HybridVec::new();
        for v in 1..=4 {
            vec.push(v);
        }
        assert!(!vec.is_inlined());
        assert_eq!(vec.len(), 4);
        assert_eq!(vec, [1, 2, 3, 4]);
        assert!(vec.capacity() >= 4);
    }

    #[test]
    fn upgrade_is_permanent() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
        assert!(!vec.is_inlined());

        vec.clear();
        assert!(vec.is_empty());
        assert!(!vec.is_inlined());

        vec.shrink_to_fit();
        assert!(!vec.is_inlined());
        vec.reserve(1);
        assert!(vec.try_reserve(1).is_ok());
        assert!(vec.capacity() >= 1);
    }

    #[test]
    fn reserve_never_upgrades() {
        let mut vec: HybridVec<i32, 4> = hybridvec![1];
        vec.reserve(64);
        assert!(vec.try_reserve(64).is_ok());
        vec.shrink_to_fit();
        assert!(vec.is_inlined());
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn growth_operations_upgrade() {
        let mut vec: HybridVec<i32, 3> = hybridvec![1, 2, 3];
        vec.insert(1, 9);
        assert!(!vec.is_inlined());
        assert_eq!(vec, [1, 9, 2, 3]);

        let mut vec: HybridVec<i32, 3> = hybridvec![1, 2];
        vec.insert_n(0, 2, 0);
        assert!(!vec.is_inlined());
        assert_eq!(vec, [0, 0, 1, 2]);
        vec.insert_iter(4, [5, 6]);
        assert_eq!(vec, [0, 0, 1, 2, 5, 6]);

        let mut vec: HybridVec<i32, 3> = hybridvec![1];
        vec.resize(4);
        assert!(!vec.is_inlined());
        assert_eq!(vec, [1, 0, 0, 0]);

        let mut vec: HybridVec<i32, 3> = hybridvec![1];
        vec.extend_from_slice(&[2, 3]);
        assert!(vec.is_inlined());
        vec.extend_from_slice(&[4]);
        assert!(!vec.is_inlined());
        assert_eq!(vec, [1, 2, 3, 4]);

        let mut vec: HybridVec<i32, 3> = hybridvec![];
        vec.resize_with(3, || 7);
        assert!(vec.is_inlined());
        vec.resize_with(5, || 8);
        assert!(!vec.is_inlined());
        assert_eq!(vec, [7, 7, 7, 8, 8]);
    }

    #[test]
    fn upgrade_moves_each_element_once() {
        let counter = Rc::new(Cell::new(0));
        let mut vec: HybridVec<Tracked, 4> = HybridVec::new();
        for _ in 0..5 {
            vec.push(Tracked(Some(Rc::clone(&counter))));
        }
        assert!(!vec.is_inlined());
        assert_eq!(counter.get(), 0);

        vec.pop();
        assert_eq!(counter.get(), 1);
        drop(vec);
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn inline_and_overflow_behave_alike() {
        let mut inline: HybridVec<i32, 16> = (0..10).collect();
        let mut heap: HybridVec<i32, 16> = HybridVec::from(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(inline.is_inlined());
        assert!(!heap.is_inlined());
        assert_eq!(inline, heap);

        for vec in [&mut inline, &mut heap] {
            assert_eq!(vec.remove(0), 0);
            assert_eq!(vec.swap_remove(0), 1);
            vec.retain(|v| *v != 5);
            vec.erase(..2);
            assert_eq!(vec.pop_if(|v| *v == 7), None);
            assert_eq!(vec.pop(), Some(8));
            vec.insert(0, 3);
            vec.dedup();
        }
        assert_eq!(inline, [3, 4, 6, 7]);
        assert_eq!(inline, heap);
        assert_eq!(inline.cmp(&heap), core::cmp::Ordering::Equal);
    }

    #[test]
    fn split_off_keeps_small_tail_inline() {
        let mut vec: HybridVec<i32, 3> = (1..=6).collect();
        let tail = vec.split_off(4);
        assert!(tail.is_inlined());
        assert_eq!(tail, [5, 6]);
        assert_eq!(vec, [1, 2, 3, 4]);

        let tail = vec.split_off(0);
        assert!(!tail.is_inlined());
        assert!(vec.is_empty());
    }

    #[test]
    fn compares_with_fixed() {
        let fixed: FixedVec<i32, 3> = fixedvec![1, 2];
        let hybrid: HybridVec<i32, 3> = hybridvec![1, 2];
        assert!(fixed == hybrid);
        assert!(hybrid == fixed);

        let spilled: HybridVec<i32, 3> = hybridvec![1, 2, 3, 4];
        assert!(spilled != fixed);
    }

    #[test]
    fn into_iter_from_both_representations() {
        let inline: HybridVec<String, 4> = hybridvec![String::from("a"), String::from("b")];
        let collected: Vec<String> = inline.into_iter().rev().collect();
        assert_eq!(collected, ["b", "a"]);

        let heap: HybridVec<i32, 1> = hybridvec![1, 2, 3];
        let mut iter = heap.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.as_slice(), [2, 3]);
    }

    #[test]
    fn inner_views() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1];
        assert!(matches!(vec.inner_ref(), ReprRef::Inline(v) if v.len() == 1));
        if let ReprMut::Inline(v) = vec.inner_mut() {
            v.push(2);
        }
        vec.push(3);
        assert!(matches!(vec.inner_ref(), ReprRef::Overflow(v) if v.len() == 3));
        match vec.into_inner() {
            Repr::Overflow(v) => assert_eq!(v, [1, 2, 3]),
            Repr::Inline(_) => panic!("expected heap storage"),
        }
    }

    #[test]
    fn max_size_follows_element_size() {
        let bytes: HybridVec<u8, 4> = HybridVec::new();
        let words: HybridVec<u64, 4> = HybridVec::new();
        let units: HybridVec<(), 4> = HybridVec::new();
        assert_eq!(bytes.max_size(), isize::MAX as usize);
        assert_eq!(words.max_size(), isize::MAX as usize / 8);
        assert_eq!(units.max_size(), usize::MAX);
    }

    #[test]
    fn append_and_clone() {
        let mut a: HybridVec<i32, 4> = hybridvec![1, 2];
        let mut b: HybridVec<i32, 2> = hybridvec![3, 4];
        a.append(&mut b);
        assert!(a.is_inlined());
        assert!(b.is_empty());
        assert_eq!(a, [1, 2, 3, 4]);

        let copy = a.clone();
        a.push(5);
        assert!(copy.is_inlined());
        assert!(!a.is_inlined());
        assert_eq!(copy, [1, 2, 3, 4]);
    }
}
