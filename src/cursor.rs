//! Random-access cursors over the elements of a [`FixedVec`](crate::FixedVec)
//! or [`HybridVec`](crate::HybridVec).
//!
//! A cursor is a position within the element slice plus a borrow of that slice.
//! Arithmetic on the position is never checked, so a cursor may be moved
//! anywhere, including past `end()` or before `begin()`. Only dereferencing
//! checks the position, and it panics unless `position < len`.
//!
//! [`Cursor`] grants read-only access and is `Copy`. [`CursorMut`] grants mutable
//! access and is unique. A `CursorMut` can always be turned into a `Cursor` at
//! the same position (see [`From`] and [`CursorMut::as_cursor`]), never the other
//! way around.
//!
//! ```
//! # use inline_vector::{FixedVec, fixedvec};
//! let vec: FixedVec<i32, 8> = fixedvec![10, 20, 30, 40];
//!
//! let mut it = vec.begin();
//! assert_eq!(*it, 10);
//! it += 2;
//! assert_eq!(*it, 30);
//! assert_eq!(it[-1], 20);
//! assert_eq!(vec.end() - it, 2);
//! assert!(vec.begin() < it);
//! ```

use core::{cmp::Ordering, fmt, ops};

/// A read-only random-access cursor.
///
/// See the [module documentation](self) for the position rules.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

/// A mutable random-access cursor.
///
/// See the [module documentation](self) for the position rules.
///
/// # Examples
///
/// ```
/// # use inline_vector::{HybridVec, hybridvec};
/// let mut vec: HybridVec<i32, 4> = hybridvec![1, 2, 3];
///
/// let mut it = vec.begin_mut();
/// it.inc();
/// *it *= 10;
/// it[1] = 7;
///
/// assert_eq!(vec, [1, 20, 7]);
/// ```
pub struct CursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

macro_rules! impl_cursor_arith {
    ($name:ident) => {
        impl<'a, T> $name<'a, T> {
            /// Returns the position of the cursor.
            #[inline(always)]
            pub const fn position(&self) -> usize {
                self.pos
            }

            /// Returns the element under the cursor, or `None` if the position is out of range.
            #[inline]
            pub fn get(&self) -> Option<&T> {
                self.slice.get(self.pos)
            }

            /// Moves the cursor one element forward (prefix increment).
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                self.pos = self.pos.wrapping_add(1);
                self
            }

            /// Moves the cursor one element backward (prefix decrement).
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                self.pos = self.pos.wrapping_sub(1);
                self
            }
        }

        impl<T> ops::AddAssign<isize> for $name<'_, T> {
            #[inline]
            fn add_assign(&mut self, rhs: isize) {
                self.pos = self.pos.wrapping_add_signed(rhs);
            }
        }

        impl<T> ops::SubAssign<isize> for $name<'_, T> {
            #[inline]
            fn sub_assign(&mut self, rhs: isize) {
                self.pos = self.pos.wrapping_add_signed(rhs.wrapping_neg());
            }
        }

        impl<T> ops::Add<isize> for $name<'_, T> {
            type Output = Self;
            #[inline]
            fn add(mut self, rhs: isize) -> Self {
                self += rhs;
                self
            }
        }

        impl<T> ops::Sub<isize> for $name<'_, T> {
            type Output = Self;
            #[inline]
            fn sub(mut self, rhs: isize) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T> ops::Deref for $name<'_, T> {
            type Target = T;
            /// # Panics
            /// Panics if the cursor is not on an element.
            #[inline]
            fn deref(&self) -> &T {
                &self.slice[self.pos]
            }
        }

        impl<T> ops::Index<isize> for $name<'_, T> {
            type Output = T;
            /// Returns the element `offset` positions away from the cursor.
            #[inline]
            fn index(&self, offset: isize) -> &T {
                &self.slice[self.pos.wrapping_add_signed(offset)]
            }
        }

        impl<T> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("pos", &self.pos)
                    .field("len", &self.slice.len())
                    .finish()
            }
        }
    };
}

impl_cursor_arith!(Cursor);
impl_cursor_arith!(CursorMut);

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor over `slice` at `pos`.
    #[inline(always)]
    pub const fn new(slice: &'a [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    /// Postfix increment: moves forward and returns the previous cursor.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Postfix decrement: moves backward and returns the previous cursor.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    /// Signed distance `self - origin`.
    #[inline]
    pub fn distance(&self, origin: &Cursor<'_, T>) -> isize {
        self.pos.wrapping_sub(origin.pos) as isize
    }

    /// Returns the element under the cursor with the lifetime of the underlying borrow.
    #[inline]
    pub fn into_ref(self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    /// The slice the cursor moves over.
    #[inline(always)]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> ops::Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;
    #[inline]
    fn sub(self, rhs: Cursor<'a, T>) -> isize {
        self.distance(&rhs)
    }
}

impl<T> PartialEq<Cursor<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd<Cursor<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Cursor<'_, T>) -> Option<Ordering> {
        Some(self.pos.cmp(&other.pos))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<'a, T> CursorMut<'a, T> {
    /// Creates a mutable cursor over `slice` at `pos`.
    #[inline(always)]
    pub const fn new(slice: &'a mut [T], pos: usize) -> Self {
        Self { slice, pos }
    }

    /// Returns the element under the cursor mutably, or `None` if the position is out of range.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slice.get_mut(self.pos)
    }

    /// Reborrows as a read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.slice, self.pos)
    }

    /// Signed distance `self - origin`.
    #[inline]
    pub fn distance_from(&self, origin: &Cursor<'_, T>) -> isize {
        self.as_cursor().distance(origin)
    }

    /// Postfix increment: moves forward and returns the previous position.
    ///
    /// A `CursorMut` is unique, so the previous cursor cannot be handed out.
    #[inline]
    pub fn post_inc(&mut self) -> usize {
        let prev = self.pos;
        self.inc();
        prev
    }

    /// Postfix decrement: moves backward and returns the previous position.
    #[inline]
    pub fn post_dec(&mut self) -> usize {
        let prev = self.pos;
        self.dec();
        prev
    }

    /// Returns the element under the cursor with the lifetime of the underlying borrow.
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self { slice, pos } = self;
        slice.get_mut(pos)
    }
}

impl<T> ops::DerefMut for CursorMut<'_, T> {
    /// # Panics
    /// Panics if the cursor is not on an element.
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.slice[self.pos]
    }
}

impl<T> ops::IndexMut<isize> for CursorMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, offset: isize) -> &mut T {
        &mut self.slice[self.pos.wrapping_add_signed(offset)]
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    #[inline]
    fn from(value: CursorMut<'a, T>) -> Self {
        Cursor::new(value.slice, value.pos)
    }
}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    #[inline]
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialOrd<Cursor<'_, T>> for CursorMut<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Cursor<'_, T>) -> Option<Ordering> {
        Some(self.pos.cmp(&other.pos))
    }
}

impl<T> PartialOrd<CursorMut<'_, T>> for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &CursorMut<'_, T>) -> Option<Ordering> {
        Some(self.pos.cmp(&other.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedVec, HybridVec, fixedvec, hybridvec};

    fn sum_until<'a>(from: impl Into<Cursor<'a, i32>>, to: usize) -> i32 {
        let mut it = from.into();
        let mut sum = 0;
        while it.position() < to {
            sum += *it.post_inc();
        }
        sum
    }

    #[test]
    fn arithmetic_and_distance() {
        let vec: FixedVec<i32, 6> = fixedvec![1, 2, 3, 4, 5];
        let begin = vec.begin();
        let end = vec.end();

        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        assert_eq!((begin + 3) - 1, begin + 2);
        assert_eq!(*(end - 1), 5);
        assert_eq!(begin[4], 5);
        assert_eq!((end - 1)[-4], 1);

        let mut it = begin;
        assert_eq!(*it.post_inc(), 1);
        assert_eq!(*it, 2);
        assert_eq!(**it.inc(), 3);
        assert_eq!(*it.post_dec(), 3);
        assert_eq!(**it.dec(), 1);
        assert_eq!(it, begin);
    }

    #[test]
    fn ordering_follows_position() {
        let vec: HybridVec<u8, 2> = hybridvec![1, 2, 3];
        let a = vec.cursor(1);
        let b = vec.cursor(2);

        assert!(a < b);
        assert!(b > a);
        assert!(a <= a);
        assert!(a >= a);
        assert!(a != b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(vec.end(), vec.cursor(3));
    }

    #[test]
    fn end_cursor_is_not_dereferenceable() {
        let vec: FixedVec<i32, 3> = fixedvec![1];
        assert_eq!(vec.end().get(), None);
        assert_eq!(vec.begin().get(), Some(&1));
        // Moving out of range and back is allowed.
        assert_eq!(*(vec.begin() - 3 + 3), 1);
    }

    #[test]
    #[should_panic]
    fn deref_end_panics() {
        let vec: FixedVec<i32, 3> = fixedvec![1, 2];
        let _ = *vec.end();
    }

    #[test]
    fn mutable_widens_to_read_only() {
        let mut vec: FixedVec<i32, 4> = fixedvec![1, 2, 3, 4];
        assert_eq!(sum_until(vec.begin(), 4), 10);
        assert_eq!(sum_until(vec.cursor_mut(2), 4), 7);

        let mut it = vec.begin_mut();
        it += 1;
        *it = 20;
        it[2] = 40;
        assert_eq!(it.as_cursor().position(), 1);
        let read: Cursor<'_, i32> = it.into();
        assert_eq!(*read, 20);
        assert_eq!(vec, [1, 20, 3, 40]);
    }

    #[test]
    fn mutable_postfix_returns_previous_position() {
        let mut vec: FixedVec<i32, 4> = fixedvec![1, 2, 3];
        let mut it = vec.begin_mut();

        assert_eq!(it.post_inc(), 0);
        assert_eq!(it.position(), 1);
        *it = 20;
        assert_eq!(it.post_inc(), 1);
        assert_eq!(it.post_dec(), 2);
        assert_eq!(it.position(), 1);
        assert_eq!(*it, 20);
    }

    #[test]
    fn mutable_cursor_compares_with_read_only() {
        let mut vec: HybridVec<i32, 2> = hybridvec![5, 6, 7];
        let mut it = vec.cursor_mut(1);

        let other = Cursor::new(&[0, 0, 0][..], 1);
        assert!(it == other);
        it.inc();
        assert!(it > other);
        assert!(other < it);
        assert_eq!(it.distance_from(&other), 1);
        assert_eq!(it.into_mut().map(|v| *v), Some(7));
    }
}
