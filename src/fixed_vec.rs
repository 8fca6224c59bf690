use alloc::{boxed::Box, vec::Vec};
use core::{fmt, iter::FusedIterator, mem};

use crate::CapacityError;

/// A vector stored inline with a fixed capacity.
///
/// This is useful when the data is small and the maximum quantity is determined.
///
/// It mirrors most of the API of [`Vec`], but the elements live in an `[T; N]`
/// inside the container and no heap memory is ever allocated.
///
/// # Slot invariant
///
/// Every slot beyond [`len`](FixedVec::len) holds `T::default()`. An element that
/// is logically removed (`pop`, `clear`, `truncate`, `remove`, `drain` ...) is moved
/// out of its slot and replaced by a default right away, so whatever it owns is
/// released at that moment instead of living on until the container is dropped.
/// [`as_buffer`](FixedVec::as_buffer) exposes the whole backing array.
///
/// Two vectors of the same type exchange contents with [`core::mem::swap`].
///
/// # Panics
/// Any operation that causes `len > capacity`.
///
/// # Examples
///
/// ```
/// use inline_vector::FixedVec;
///
/// let mut vec: FixedVec<String, 10> = FixedVec::new();
///
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 10);
///
/// vec.push("Hello".to_string());
/// vec.push(", world!".to_string());
/// assert_eq!(vec, ["Hello", ", world!"]);
///
/// // The popped string is handed back, its slot is empty again.
/// assert_eq!(vec.pop().as_deref(), Some(", world!"));
/// assert_eq!(vec.as_buffer()[1], "");
/// ```
pub struct FixedVec<T, const N: usize> {
    data: [T; N],
    len: usize,
}

/// Creates a [`FixedVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// You must explicitly specify the container capacity.
/// The number of elements cannot exceed the capacity.
///
/// # Panics
/// Panics if the number of elements exceeds the capacity.
///
/// # Examples
///
/// ```
/// # use inline_vector::{fixedvec, FixedVec};
/// let vec: FixedVec<String, 10> = fixedvec![];
/// let vec: FixedVec<i64, 10> = fixedvec![1; 5]; // Need to support Clone.
/// let vec: FixedVec<_, 10> = fixedvec![1, 2, 3, 4];
/// ```
#[macro_export]
macro_rules! fixedvec {
    [] => { $crate::FixedVec::new() };
    [$elem:expr; $n:expr] => { $crate::FixedVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::FixedVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> FixedVec<T, N> {
    /// Returns the number of elements in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec = FixedVec::<String, 5>::new();
    /// assert_eq!(vec.len(), 0);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut v = FixedVec::<i32, 3>::new();
    /// assert!(!v.is_full());
    ///
    /// v.extend([1, 2, 3]);
    /// assert!(v.is_full());
    /// ```
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Returns the maximum number of elements the vector can hold, always `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](FixedVec::capacity): the storage can never hold more than `N`.
    #[inline(always)]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns `N - len`.
    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Does nothing. Present so `FixedVec` can stand in for a [`Vec`].
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }

    /// Does nothing. Present so `FixedVec` can stand in for a [`Vec`].
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {}

    /// Extracts a slice containing the entire vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// assert_eq!(vec.as_slice(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Extracts a mutable slice containing the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Same as [`as_slice`](FixedVec::as_slice).
    #[inline(always)]
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// Modifying the vector will **not** cause its buffer to move.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a raw mutable pointer to the vector's buffer.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns the whole backing array, including the inactive slots past `len`.
    ///
    /// The inactive slots always hold `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<u8, 4> = fixedvec![7, 8, 9];
    /// vec.truncate(1);
    /// assert_eq!(vec.as_buffer(), &[7, 0, 0, 0]);
    /// ```
    #[inline(always)]
    pub const fn as_buffer(&self) -> &[T; N] {
        &self.data
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 3>::new();
    /// vec.push(4);
    /// vec.push(5);
    /// assert_eq!(*vec.at(0), 4);
    /// assert_eq!(*vec.at(1), 5);
    /// ```
    #[inline]
    pub fn at(&self, pos: usize) -> &T {
        debug_assert!(pos < self.len, "`at` position should be < len");
        &self.as_slice()[pos]
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < self.len, "`at_mut` position should be < len");
        &mut self.as_mut_slice()[pos]
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        assert!(self.len > 0, "`front` called on an empty vector");
        &self.data[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "`front_mut` called on an empty vector");
        &mut self.data[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "`back` called on an empty vector");
        &self.data[self.len - 1]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "`back_mut` called on an empty vector");
        &mut self.data[self.len - 1]
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    /// Panics if the vector is full (`len == N`).
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 5>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.len < N, "length overflow during `push`");
        self.data[self.len] = value;
        self.len += 1;
    }

    /// Appends an element, or hands it back if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 1>::new();
    /// assert!(vec.try_push(1).is_ok());
    /// assert_eq!(vec.try_push(2).unwrap_err().into_inner(), 2);
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len < N {
            self.data[self.len] = value;
            self.len += 1;
            Ok(())
        } else {
            Err(CapacityError::new(value))
        }
    }

    /// Inserts an element at position `index` within the vector, shifting all
    /// elements after it to the right.
    ///
    /// # Panics
    /// Panics if `index > len` or the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3];
    /// vec.insert(1, 9);
    /// vec.insert(4, 7);
    /// assert_eq!(vec, [1, 9, 2, 3, 7]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        assert!(index <= self.len, "insertion index should be <= len");
        assert!(self.len < N, "length overflow during `insert`");

        let len = self.len;
        self.data[len] = element;
        self.data[index..=len].rotate_right(1);
        self.len = len + 1;
    }

    /// Inserts an element at `index`, or hands it back if the vector is full.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), CapacityError<T>> {
        assert!(index <= self.len, "insertion index should be <= len");
        if self.len < N {
            self.insert(index, element);
            Ok(())
        } else {
            Err(CapacityError::new(element))
        }
    }

    /// Inserts the items of an exact-size iterator at `index`, keeping their order.
    ///
    /// The elements at `index..` are shifted right by the number of inserted items.
    ///
    /// # Panics
    /// Panics if `index > len` or `len + iter.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec!['a', 'e'];
    /// vec.insert_iter(1, ['b', 'c', 'd']);
    /// assert_eq!(vec, ['a', 'b', 'c', 'd', 'e']);
    /// ```
    pub fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();
        assert!(index <= self.len, "insertion index should be <= len");
        assert!(self.len + count <= N, "length overflow during `insert_iter`");

        let len = self.len;
        let mut written = 0;
        for (slot, item) in self.data[len..len + count].iter_mut().zip(iter) {
            *slot = item;
            written += 1;
        }
        self.data[index..len + written].rotate_right(written);
        self.len = len + written;
    }
}

impl<T: Default, const N: usize> FixedVec<T, N> {
    /// Constructs a new, empty `FixedVec` with every slot set to `T::default()`.
    ///
    /// The capacity must be provided at compile time via the const generic parameter.
    /// The capacity should not be too large to avoid stack overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec: FixedVec<i32, 8> = FixedVec::new();
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Creates a [`FixedVec`] from an array.
    ///
    /// # Panics
    /// Panics if the length exceeds the capacity `N`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        assert!(P <= N, "length overflow during `from_buf`");

        let mut vec = Self::new();
        for (slot, item) in vec.data.iter_mut().zip(arr) {
            *slot = item;
        }
        vec.len = P;
        vec
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 5>::new();
    /// vec.push(1);
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.data[self.len]))
        }
    }

    /// Removes and returns the last element if the predicate returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{fixedvec, FixedVec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// let pred = |x: &mut i32| *x % 2 == 0;
    /// assert_eq!(vec.pop_if(pred), Some(4));
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.pop_if(pred), None);
    /// ```
    pub fn pop_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Option<T> {
        let last = self.as_mut_slice().last_mut()?;
        if predicate(last) { self.pop() } else { None }
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// assert_eq!(vec.remove(1), 2);
    /// assert_eq!(vec, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");

        let value = mem::take(&mut self.data[index]);
        self.data[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Removes an element and returns it, replacing it with the last element.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");

        let value = mem::take(&mut self.data[index]);
        self.data.swap(index, self.len - 1);
        self.len -= 1;
        value
    }

    /// Shortens the vector, keeping the first `len` elements.
    ///
    /// The removed elements are released from the highest index down.
    /// If `len` is greater or equal to the vector's current length, this has no effect.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.len -= 1;
            self.data[self.len] = T::default();
        }
    }

    /// Clears the vector, resetting every active slot to `T::default()`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut v: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.as_buffer(), &[0; 5]);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the vector so that `len == count`.
    ///
    /// Growing exposes slots that already hold `T::default()`, shrinking behaves like
    /// [`truncate`](FixedVec::truncate). `count == N` is allowed.
    ///
    /// # Panics
    /// Panics if `count > N`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 4> = fixedvec![1, 2];
    /// vec.resize(4);
    /// assert_eq!(vec, [1, 2, 0, 0]);
    /// vec.resize(1);
    /// assert_eq!(vec, [1]);
    /// ```
    pub fn resize(&mut self, count: usize) {
        assert!(count <= N, "length overflow during `resize`");

        if count < self.len {
            self.truncate(count);
        } else {
            self.len = count;
        }
    }

    /// Resizes the vector so that `len == new_len`, filling new slots with `f()`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    ///
    /// # Example
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// vec.resize_with(2, Default::default);
    /// assert_eq!(vec, [1, 2]);
    ///
    /// let mut p = 1;
    /// vec.resize_with(5, || { p *= 2; p });
    /// assert_eq!(vec, [1, 2, 2, 4, 8]);
    /// ```
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        assert!(new_len <= N, "length overflow during `resize_with`");

        if new_len < self.len {
            self.truncate(new_len);
        } else {
            while self.len < new_len {
                self.data[self.len] = f();
                self.len += 1;
            }
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Time complexity
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// vec.retain(|v| *v % 2 == 0);
    /// assert_eq!(vec, [2, 4]);
    /// ```
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|v| f(v));
    }

    /// Retains only the elements specified by the predicate, passing a mutable reference to it.
    ///
    /// Elements are visited exactly once in the original order, and the retained ones keep it.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        for index in 0..self.len {
            if f(&mut self.data[index]) {
                self.data.swap(kept, index);
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Removes all but the first of consecutive elements in the vector that resolve to the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![10, 20, 21, 30, 20];
    /// vec.dedup_by_key(|i| *i / 10);
    /// assert_eq!(vec, [10, 20, 30, 20]);
    /// ```
    #[inline]
    pub fn dedup_by_key<F, K>(&mut self, mut key: F)
    where
        F: FnMut(&mut T) -> K,
        K: PartialEq,
    {
        self.dedup_by(|a, b| key(a) == key(b));
    }

    /// Removes all but the first of consecutive elements satisfying a given equality relation.
    ///
    /// See [`Vec::dedup_by`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!["foo", "bar", "Bar", "baz", "bar"];
    /// vec.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    /// assert_eq!(vec, ["foo", "bar", "baz", "bar"]);
    /// ```
    pub fn dedup_by<F: FnMut(&mut T, &mut T) -> bool>(&mut self, mut same_bucket: F) {
        if self.len <= 1 {
            return;
        }

        let mut left = 0;
        for right in 1..self.len {
            let (head, tail) = self.data.split_at_mut(right);
            if !same_bucket(&mut tail[0], &mut head[left]) {
                left += 1;
                if right != left {
                    self.data.swap(left, right);
                }
            }
        }
        self.truncate(left + 1);
    }

    /// Removes the elements in `range`, shifting the tail left.
    ///
    /// This is the eager form of [`drain`](FixedVec::drain).
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec![1, 2, 3, 4, 5];
    /// vec.erase(1..3);
    /// assert_eq!(vec, [1, 4, 5]);
    /// ```
    #[inline]
    pub fn erase<R: core::ops::RangeBounds<usize>>(&mut self, range: R) {
        self.drain(range);
    }

    /// Splits the collection into two at the given index.
    ///
    /// # Panics
    /// Panics if `at > len`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!['a', 'b', 'c'];
    /// let vec2 = vec.split_off(1);
    ///
    /// assert_eq!(vec, ['a']);
    /// assert_eq!(vec2, ['b', 'c']);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Self {
        assert!(at <= self.len, "the `at` of split off should be <= len");

        let mut other = Self::new();
        for (dst, src) in other.data.iter_mut().zip(&mut self.data[at..self.len]) {
            *dst = mem::take(src);
        }
        other.len = self.len - at;
        self.len = at;
        other
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// # Panics
    /// Panics if the new length exceeds `N`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec1: FixedVec<_, 6> = fixedvec![1, 2, 3, 4];
    /// let mut vec2: FixedVec<_, 4> = fixedvec![5, 6];
    /// vec1.append(&mut vec2);
    /// assert_eq!(vec1, [1, 2, 3, 4, 5, 6]);
    /// assert!(vec2.is_empty());
    /// ```
    pub fn append<const P: usize>(&mut self, other: &mut FixedVec<T, P>) {
        assert!(self.len + other.len <= N, "length overflow during `append`");

        for src in &mut other.data[..other.len] {
            self.data[self.len] = mem::take(src);
            self.len += 1;
        }
        other.len = 0;
    }

    /// Moves all the elements of `self` into the given [`Vec`], leaving `self` empty.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec1: Vec<_> = vec![1, 2, 3, 4];
    /// let mut vec2: FixedVec<_, 4> = fixedvec![5, 6];
    /// vec2.append_to_vec(&mut vec1);
    /// assert_eq!(vec1, [1, 2, 3, 4, 5, 6]);
    /// assert!(vec2.is_empty());
    /// ```
    pub fn append_to_vec(&mut self, other: &mut Vec<T>) {
        other.reserve(self.len);
        other.extend(self.data[..self.len].iter_mut().map(mem::take));
        self.len = 0;
    }

    /// Moves the elements into a new [`Vec`] of at least `capacity`, leaving `self` empty.
    #[inline]
    pub(crate) fn take_into_vec(&mut self, capacity: usize) -> Vec<T> {
        let mut vec = Vec::with_capacity(capacity.max(self.len));
        self.append_to_vec(&mut vec);
        vec
    }

    /// Converts a [`FixedVec`] to a [`Vec`].
    ///
    /// Allocates exactly `len` capacity and moves the data to the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let mut vec = FixedVec::<String, 5>::new();
    /// vec.push("123".to_string());
    ///
    /// let vec = vec.into_vec();
    /// assert_eq!(vec.len(), 1);
    /// assert_eq!(vec.capacity(), 1);
    /// ```
    #[inline]
    pub fn into_vec(mut self) -> Vec<T> {
        self.take_into_vec(self.len)
    }

    /// Converts a [`FixedVec`] into a [`Box<[T]>`](Box).
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.into_vec().into_boxed_slice()
    }
}

impl<T: Clone + Default, const N: usize> FixedVec<T, N> {
    /// Creates a [`FixedVec`] with `num` copies of `elem`.
    ///
    /// # Panics
    /// Panics if `num > N`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_elem(1, 4);
    /// assert_eq!(vec, [1, 1, 1, 1]);
    /// ```
    pub fn from_elem(elem: T, num: usize) -> Self {
        assert!(num <= N, "length overflow during `from_elem`");

        let mut vec = Self::new();
        vec.resize_value(num, elem);
        vec
    }

    /// Resizes the vector so that `len == new_len`, filling new slots with clones of `value`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!["hello"];
    /// vec.resize_value(3, "world");
    /// assert_eq!(vec, ["hello", "world", "world"]);
    /// ```
    pub fn resize_value(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// # Panics
    /// Panics if `index > len` or `len + count > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec![1, 2, 3];
    /// vec.insert_n(1, 2, 0);
    /// assert_eq!(vec, [1, 0, 0, 2, 3]);
    /// ```
    #[inline]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) {
        self.insert_iter(index, core::iter::repeat_n(value, count));
    }

    /// Extends the vector by cloning all elements from the given slice.
    ///
    /// # Panics
    /// Panics if the length exceeds `N`.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        assert!(self.len + other.len() <= N, "length overflow during `extend_from_slice`");

        for item in other {
            self.data[self.len] = item.clone();
            self.len += 1;
        }
    }

    /// Extends the vector by cloning `other`, or leaves it untouched if `other` does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 3> = fixedvec![1];
    /// assert!(vec.try_extend_from_slice(&[2, 3, 4]).is_err());
    /// assert!(vec.try_extend_from_slice(&[2, 3]).is_ok());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError> {
        if self.len + other.len() > N {
            return Err(CapacityError::new(()));
        }
        self.extend_from_slice(other);
        Ok(())
    }
}

impl<T: PartialEq + Default, const N: usize> FixedVec<T, N> {
    /// Removes consecutive duplicate elements according to the [`PartialEq`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 10> = fixedvec![1, 2, 2, 3, 2];
    /// vec.dedup();
    /// assert_eq!(vec, [1, 2, 3, 2]);
    /// ```
    #[inline]
    pub fn dedup(&mut self) {
        self.dedup_by(|x, y| PartialEq::eq(x, y));
    }
}

impl<T: Default, const N: usize> Default for FixedVec<T, N> {
    /// It's eq to [`FixedVec::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default, const N: usize> Clone for FixedVec<T, N> {
    /// Deep-copies the active elements. The inactive slots of the copy are fresh defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let vec: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// let vec2 = vec.clone();
    /// assert_eq!(vec, vec2);
    /// ```
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(self.as_slice());
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.truncate(source.len);
        let len = self.len;
        self.data[..len].clone_from_slice(&source.data[..len]);
        self.extend_from_slice(&source.data[len..source.len]);
    }
}

impl<'a, T: 'a + Clone, const N: usize> Extend<&'a T> for FixedVec<T, N> {
    /// Clone values from iterators.
    ///
    /// # Panics
    /// Insufficient capacity.
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    /// Extends a collection with the contents of an iterator.
    ///
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<i32, 5> = fixedvec![];
    /// vec.extend([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

crate::utils::impl_common_traits!(FixedVec<T, N>);

impl<T, U, const N: usize> PartialEq<FixedVec<U, N>> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &FixedVec<U, N>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Default, const N: usize, const P: usize> From<[T; P]> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T: Clone + Default, const N: usize> From<&[T]> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec = <FixedVec<i32, 3>>::from([1, 2, 3].as_slice());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn from(value: &[T]) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(value);
        vec
    }
}

impl<T: Default, const N: usize> TryFrom<Vec<T>> for FixedVec<T, N> {
    type Error = CapacityError<Vec<T>>;

    /// Moves the elements of a [`Vec`] inline, or hands the `Vec` back if it is too long.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec = FixedVec::<i32, 3>::try_from(vec![1, 2]).unwrap();
    /// assert_eq!(vec, [1, 2]);
    ///
    /// let err = FixedVec::<i32, 3>::try_from(vec![1, 2, 3, 4]).unwrap_err();
    /// assert_eq!(err.into_inner(), [1, 2, 3, 4]);
    /// ```
    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        if value.len() > N {
            return Err(CapacityError::new(value));
        }
        let mut vec = Self::new();
        vec.extend(value);
        Ok(vec)
    }
}

impl<T: Default, const N: usize> FromIterator<T> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inline_vector::FixedVec;
    /// let vec: FixedVec<i32, 5> = (1..4).collect();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

/// An iterator that moves out of a [`FixedVec`].
///
/// This `struct` is created by the `into_iter` method on [`FixedVec`].
#[derive(Clone)]
pub struct IntoIter<T, const N: usize> {
    inner: core::array::IntoIter<T, N>,
}

impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let mut inner = self.data.into_iter();
        // Release the inactive defaults up front.
        for _ in self.len..N {
            inner.next_back();
        }
        IntoIter { inner }
    }
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the remaining items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the remaining items as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

/// A draining iterator for [`FixedVec`].
///
/// This `struct` is created by [`FixedVec::drain`].
///
/// Each yielded element is moved out of its slot, leaving `T::default()` behind.
/// When the `Drain` is dropped, the elements that were not yielded are released
/// and the tail is shifted down to close the gap.
pub struct Drain<'a, T: Default, const N: usize> {
    vec: &'a mut FixedVec<T, N>,
    start: usize,
    end: usize,
    front: usize,
    back: usize,
}

impl<T: Default, const N: usize> FixedVec<T, N> {
    /// Removes the specified range from the vector in bulk, returning all removed elements as an iterator.
    ///
    /// If the iterator is dropped before being fully consumed, it drops the remaining removed elements.
    ///
    /// # Panics
    /// Panics if the starting point is greater than the end point or if the end point is greater than the length of the vector.
    ///
    /// # Examples
    /// ```
    /// # use inline_vector::{FixedVec, fixedvec};
    /// let mut v: FixedVec<_, 5> = fixedvec![1, 2, 3];
    /// let u: Vec<_> = v.drain(1..).collect();
    /// assert_eq!(v, [1]);
    /// assert_eq!(u, [2, 3]);
    ///
    /// // A full range clears the vector, like `clear()` does
    /// v.drain(..);
    /// assert_eq!(v, []);
    /// ```
    pub fn drain<R: core::ops::RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T, N> {
        let (start, end) = crate::utils::split_range_bound(&range, self.len);
        Drain {
            vec: self,
            start,
            end,
            front: start,
            back: end,
        }
    }
}

impl<T: Default, const N: usize> Drain<'_, T, N> {
    /// Returns the remaining items of this iterator as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.vec.data[self.front..self.back]
    }
}

impl<T: Default, const N: usize> AsRef<[T]> for Drain<'_, T, N> {
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
        if self.front < self.back {
            let value = mem::take(&mut self.vec.data[self.front]);
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T: Default, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(mem::take(&mut self.vec.data[self.back]))
        } else {
            None
        }
    }
}

impl<T: Default, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}

impl<T: Default, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T: Default, const N: usize> Drop for Drain<'_, T, N> {
    fn drop(&mut self) {
        for slot in &mut self.vec.data[self.front..self.back] {
            *slot = T::default();
        }
        let removed = self.end - self.start;
        let len = self.vec.len;
        // The drained slots are all defaults now; rotate them past the tail.
        self.vec.data[self.start..len].rotate_left(removed);
        self.vec.len = len - removed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixedvec;
    use alloc::{
        boxed::Box,
        format,
        rc::Rc,
        string::{String, ToString},
        vec,
    };
    use core::cell::Cell;

    /// Counts how many live values are released. The default value owns nothing.
    #[derive(Default)]
    struct Tracked(Option<Rc<Cell<usize>>>);

    impl Tracked {
        fn new(counter: &Rc<Cell<usize>>) -> Self {
            Self(Some(Rc::clone(counter)))
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            if let Some(counter) = &self.0 {
                counter.set(counter.get() + 1);
            }
        }
    }

    #[test]
    fn push_and_access() {
        let mut vec: FixedVec<i32, 3> = FixedVec::new();
        vec.push(4);
        vec.push(5);

        assert_eq!(*vec.at(0), 4);
        assert_eq!(*vec.at(1), 5);
        assert_eq!(vec[1], 5);
        assert_eq!(*vec.front(), 4);
        assert_eq!(*vec.back(), 5);
        assert_eq!(vec.data(), [4, 5]);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.max_size(), 3);
        assert_eq!(vec.remaining_capacity(), 1);

        *vec.at_mut(0) += 1;
        *vec.back_mut() += 1;
        assert_eq!(vec, [5, 6]);
    }

    #[test]
    fn empty_container_basics() {
        let mut vec: FixedVec<i32, 3> = FixedVec::new();
        assert!(vec.is_empty());
        assert_eq!(vec.len(), 0);
        vec.reserve(2);
        vec.shrink_to_fit();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.pop(), None);
    }

    #[test]
    #[should_panic(expected = "length overflow during `push`")]
    fn push_past_capacity_panics() {
        let mut vec: FixedVec<i32, 2> = fixedvec![1, 2];
        vec.push(3);
    }

    #[test]
    #[should_panic(expected = "called on an empty vector")]
    fn back_on_empty_panics() {
        let vec: FixedVec<i32, 2> = FixedVec::new();
        let _ = vec.back();
    }

    #[test]
    fn try_push_returns_value() {
        let mut vec: FixedVec<Box<i32>, 1> = FixedVec::new();
        assert!(vec.try_push(Box::new(1)).is_ok());
        let err = vec.try_push(Box::new(2)).unwrap_err();
        assert_eq!(*err.into_inner(), 2);
        assert_eq!(vec.len(), 1);
    }

    #[test]
    fn strings_released_on_pop_and_clear() {
        let mut vec: FixedVec<String, 3> = FixedVec::new();
        vec.push("a".to_string());
        vec.push("b".to_string());
        vec.push("c".to_string());

        assert_eq!(vec.pop().as_deref(), Some("c"));
        assert_eq!(vec.as_buffer()[2], "");
        assert_eq!(vec.as_buffer()[2].capacity(), 0);

        vec.clear();
        assert_eq!(vec.len(), 0);
        assert!(vec.as_buffer().iter().all(|s| s.is_empty() && s.capacity() == 0));
    }

    #[test]
    fn clear_resets_every_slot() {
        let mut vec: FixedVec<u32, 5> = fixedvec![1, 2, 3, 4, 5];
        vec.clear();
        assert_eq!(vec.len(), 0);
        for index in 0..vec.capacity() {
            assert_eq!(vec.as_buffer()[index], 0);
        }
    }

    #[test]
    fn pop_releases_exactly_once() {
        let counter = Rc::new(Cell::new(0));
        let mut vec: FixedVec<Tracked, 4> = FixedVec::new();
        for _ in 0..4 {
            vec.push(Tracked::new(&counter));
        }
        assert_eq!(counter.get(), 0);

        vec.pop();
        assert_eq!(counter.get(), 1);
        vec.pop();
        assert_eq!(counter.get(), 2);

        vec.truncate(1);
        assert_eq!(counter.get(), 3);
        vec.clear();
        assert_eq!(counter.get(), 4);

        drop(vec);
        assert_eq!(counter.get(), 4);
    }

    #[test]
    fn clear_releases_highest_index_first() {
        let order = Rc::new(core::cell::RefCell::new(vec![]));

        #[derive(Default)]
        struct Ordered(Option<(usize, Rc<core::cell::RefCell<alloc::vec::Vec<usize>>>)>);
        impl Drop for Ordered {
            fn drop(&mut self) {
                if let Some((id, log)) = &self.0 {
                    log.borrow_mut().push(*id);
                }
            }
        }

        let mut vec: FixedVec<Ordered, 3> = FixedVec::new();
        for id in 0..3 {
            vec.push(Ordered(Some((id, Rc::clone(&order)))));
        }
        vec.clear();
        assert_eq!(*order.borrow(), [2, 1, 0]);
    }

    #[test]
    fn removal_paths_release_resources() {
        let counter = Rc::new(Cell::new(0));
        let mut vec: FixedVec<Tracked, 6> = FixedVec::new();
        vec.resize_with(6, || Tracked::new(&counter));

        drop(vec.remove(0));
        assert_eq!(counter.get(), 1);
        drop(vec.swap_remove(0));
        assert_eq!(counter.get(), 2);
        vec.retain(|_| false);
        assert_eq!(counter.get(), 6);
        assert!(vec.as_buffer().iter().all(|t| t.0.is_none()));
    }

    #[test]
    fn move_only_elements() {
        let mut vec: FixedVec<Option<Box<str>>, 3> = FixedVec::new();
        vec.push(Some("x".into()));
        vec.push(Some("y".into()));
        vec.insert(0, Some("w".into()));

        let popped = vec.pop().flatten();
        assert_eq!(popped.as_deref(), Some("y"));
        assert!(vec.as_buffer()[2].is_none());

        let moved = core::mem::take(&mut vec);
        assert!(vec.is_empty());
        assert_eq!(moved.len(), 2);
    }

    #[test]
    fn resize_to_full_capacity_is_legal() {
        let mut vec: FixedVec<i32, 3> = fixedvec![1];
        vec.resize(3);
        assert_eq!(vec, [1, 0, 0]);
        assert!(vec.is_full());

        vec.resize(0);
        assert!(vec.is_empty());
    }

    #[test]
    #[should_panic(expected = "length overflow during `resize`")]
    fn resize_past_capacity_panics() {
        let mut vec: FixedVec<i32, 3> = FixedVec::new();
        vec.resize(4);
    }

    #[test]
    fn resize_down_matches_repeated_pop() {
        let mut a: FixedVec<String, 4> = (0..4).map(|i| i.to_string()).collect();
        let mut b = a.clone();

        a.resize(1);
        while b.len() > 1 {
            b.pop();
        }
        assert_eq!(a, b);
        assert_eq!(a.as_buffer(), b.as_buffer());
    }

    #[test]
    fn insert_forms() {
        let mut vec: FixedVec<i32, 8> = fixedvec![1, 2, 3];
        vec.insert(0, 0);
        vec.insert(4, 4);
        assert_eq!(vec, [0, 1, 2, 3, 4]);

        vec.insert_n(2, 2, 9);
        assert_eq!(vec, [0, 1, 9, 9, 2, 3, 4]);

        vec.insert_iter(7, [5]);
        assert_eq!(vec, [0, 1, 9, 9, 2, 3, 4, 5]);
        assert!(vec.try_insert(0, 1).is_err());

        vec.insert_n(8, 0, 1);
        assert_eq!(vec.len(), 8);
    }

    #[test]
    #[should_panic(expected = "length overflow during `insert_iter`")]
    fn insert_n_past_capacity_panics() {
        let mut vec: FixedVec<i32, 4> = fixedvec![1, 2];
        vec.insert_n(1, 3, 0);
    }

    #[test]
    #[should_panic(expected = "insertion index should be <= len")]
    fn insert_past_len_panics() {
        let mut vec: FixedVec<i32, 4> = fixedvec![1, 2];
        vec.insert(3, 0);
    }

    #[test]
    fn drain_and_erase() {
        let mut vec: FixedVec<String, 6> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();

        let mut drain = vec.drain(1..4);
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next().as_deref(), Some("b"));
        assert_eq!(drain.next_back().as_deref(), Some("d"));
        drop(drain);

        assert_eq!(vec, ["a", "e"]);
        assert!(vec.as_buffer()[2..].iter().all(String::is_empty));

        vec.erase(..1);
        assert_eq!(vec, ["e"]);
        vec.erase(..);
        assert!(vec.is_empty());
        assert!(vec.as_buffer().iter().all(String::is_empty));
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: FixedVec<String, 3> = fixedvec![String::from("a")];
        let mut b: FixedVec<String, 3> = fixedvec![String::from("x"), String::from("y")];
        mem::swap(&mut a, &mut b);

        assert_eq!(a, ["x", "y"]);
        assert_eq!(b, ["a"]);
        assert_eq!(b.as_buffer()[1..], ["", ""]);
    }

    #[test]
    fn leaked_drain_keeps_length() {
        let mut vec: FixedVec<i32, 6> = fixedvec![1, 2, 3, 4];
        let mut drain = vec.drain(1..3);
        assert_eq!(drain.next(), Some(2));
        core::mem::forget(drain);

        assert_eq!(vec.len(), 4);
        assert_eq!(vec, [1, 0, 3, 4]);
        assert_eq!(vec.as_buffer()[4..], [0, 0]);
    }

    #[test]
    fn drain_drops_unconsumed_items() {
        let counter = Rc::new(Cell::new(0));
        let mut vec: FixedVec<Tracked, 5> = FixedVec::new();
        vec.resize_with(5, || Tracked::new(&counter));

        vec.drain(1..3);
        assert_eq!(counter.get(), 2);
        assert_eq!(vec.len(), 3);
        assert!(vec.as_buffer()[3..].iter().all(|t| t.0.is_none()));
    }

    #[test]
    fn dedup_and_split() {
        let mut vec: FixedVec<i32, 8> = fixedvec![1, 1, 2, 3, 3, 3, 1];
        vec.dedup();
        assert_eq!(vec, [1, 2, 3, 1]);
        assert_eq!(vec.as_buffer()[4..], [0, 0, 0, 0]);

        let tail = vec.split_off(2);
        assert_eq!(vec, [1, 2]);
        assert_eq!(tail, [3, 1]);
        assert_eq!(vec.as_buffer()[2..], [0; 6]);
    }

    #[test]
    fn equality_and_ordering() {
        let a0: FixedVec<i32, 3> = FixedVec::new();
        assert!(a0 == a0);
        assert!(a0 <= a0);
        assert!(!(a0 < a0));
        assert!(a0 >= a0);
        assert!(!(a0 > a0));

        let mut b1: FixedVec<i32, 3> = FixedVec::new();
        b1.push(3);
        assert!(a0 != b1);
        assert!(a0 < b1);
        assert!(a0 <= b1);
        assert!(!(a0 > b1));
        assert!(!(a0 >= b1));
        assert!(b1 != a0);
        assert!(!(b1 < a0));
        assert!(b1 > a0);
        assert!(b1 >= a0);

        let prefix: FixedVec<i32, 3> = fixedvec![1, 2];
        let longer: FixedVec<i32, 3> = fixedvec![1, 2, 0];
        let differs: FixedVec<i32, 3> = fixedvec![1, 3];
        assert!(prefix < longer);
        assert!(longer < differs);
        assert_eq!(prefix.cmp(&prefix.clone()), core::cmp::Ordering::Equal);

        let mut sorted = vec![differs.clone(), longer.clone(), prefix.clone(), a0.clone()];
        sorted.sort();
        assert_eq!(sorted, [a0, prefix, longer, differs]);
    }

    #[test]
    fn reverse_iteration_mirrors_forward() {
        let mut vec: FixedVec<i32, 6> = fixedvec![1, 2, 3, 4];

        let forward: alloc::vec::Vec<_> = vec.iter().copied().collect();
        let mut backward: alloc::vec::Vec<_> = vec.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);

        let forward_mut: alloc::vec::Vec<_> = vec.iter_mut().map(|v| *v).collect();
        let mut backward_mut: alloc::vec::Vec<_> = vec.iter_mut().rev().map(|v| *v).collect();
        backward_mut.reverse();
        assert_eq!(forward_mut, forward);
        assert_eq!(backward_mut, forward);

        // Restartable.
        assert!(vec.iter().eq(vec.iter()));
    }

    #[test]
    fn into_iter_releases_remaining() {
        let counter = Rc::new(Cell::new(0));
        let mut vec: FixedVec<Tracked, 4> = FixedVec::new();
        vec.resize_with(3, || Tracked::new(&counter));

        let mut iter = vec.into_iter();
        assert_eq!(iter.len(), 3);
        drop(iter.next_back());
        assert_eq!(counter.get(), 1);
        drop(iter);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn clone_is_deep() {
        let vec: FixedVec<String, 3> = fixedvec!["a".to_string(), "b".to_string()];
        let mut copy = vec.clone();
        copy[0].push('!');
        assert_eq!(vec, ["a", "b"]);
        assert_eq!(copy, ["a!", "b"]);

        let mut target: FixedVec<String, 3> = fixedvec!["x".to_string(); 3];
        target.clone_from(&vec);
        assert_eq!(target, vec);
        assert_eq!(target.as_buffer()[2], "");
    }

    #[test]
    fn conversions() {
        let vec = FixedVec::<i32, 4>::try_from(vec![1, 2, 3]).unwrap();
        assert_eq!(vec.clone().into_vec(), [1, 2, 3]);
        assert_eq!(&*vec.clone().into_boxed_slice(), [1, 2, 3]);
        assert!(FixedVec::<i32, 2>::try_from(vec![1, 2, 3]).is_err());

        let debug = format!("{:?}", vec);
        assert_eq!(debug, "[1, 2, 3]");
    }
}
