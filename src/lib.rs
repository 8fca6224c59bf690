//! ## Intro
//!
//! Inline vectors for `no_std` code: a fixed-capacity vector whose elements live inside the
//! container, and a hybrid vector that starts inline and moves to the heap when it outgrows
//! its inline capacity.
//!
//! Many workloads have small collections that fit comfortably in a fixed-size buffer,
//! but occasionally need to grow larger. Keeping the data inline avoids allocator overhead
//! and keeps it close to the rest of the owning value.
//!
//! The crate contains no `unsafe` code. Inline storage is a plain `[T; N]`, so element types
//! must implement [`Default`]; every slot past the current length holds `T::default()`.
//!
//! ## Containers
//!
//! ### `FixedVec`
//!
//! - **Fixed capacity**, stored inline
//! - **Vec-like** interface
//! - **Panics** if capacity is exceeded, `try_*` methods hand the rejected value back
//! - Use when: You know the maximum size in advance
//!
//! ```
//! # use inline_vector::FixedVec;
//! let mut vec: FixedVec<i32, 10> = FixedVec::new();
//! assert_eq!(vec.capacity(), 10);
//!
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(vec.len(), 2);
//! // Cannot push more than 10 items (will panic)
//! ```
//!
//! ### `HybridVec`
//!
//! - **Flexible capacity**: inline first, heap once it grows past `N`
//! - **Enum-based**: internally either `FixedVec` or `Vec`
//! - **One way**: once on the heap, the data never moves back
//! - Use when: Size is unknown but usually small.
//!
//! ```
//! # use inline_vector::{HybridVec, hybridvec};
//! let mut vec: HybridVec<i32, 5> = hybridvec![1, 2, 3];
//! assert!(vec.is_inlined());
//!
//! vec.extend(&[4, 5, 6, 7, 8]);
//! assert!(!vec.is_inlined());
//! ```
//!
//! ### Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions over either container,
//! obtained through `begin`, `end`, `cursor` and `cursor_mut`. A [`CursorMut`] converts
//! into a [`Cursor`], never the other way.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! - `serde`: [`FixedVec`] and [`HybridVec`] implement `Serialize` and `Deserialize`.
//! - `std`: `std::io::Write` for `FixedVec<u8, N>` and `HybridVec<u8, N>`.
//! - `log`: the move of a [`HybridVec`] to the heap is traced with `log::trace!`
//!   under the `inline_vector` target.
//!
//! [`Vec`]: alloc::vec::Vec
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod utils;

mod error;
pub use error::CapacityError;

pub mod cursor;
#[doc(inline)]
pub use cursor::{Cursor, CursorMut};

pub mod fixed_vec;
#[doc(inline)]
pub use fixed_vec::FixedVec;

pub mod hybrid_vec;
#[doc(inline)]
pub use hybrid_vec::HybridVec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

/// A `HybridVec` with an inline capacity of 8 elements.
///
/// # Examples
///
/// ```
/// # use inline_vector::MiniVec;
/// let mut vec: MiniVec<i32> = MiniVec::new();
/// vec.extend([1, 2, 3]);
/// assert!(vec.is_inlined());
///
/// vec.extend([4, 5, 6, 7, 8, 9]);
/// assert!(!vec.is_inlined());
/// assert_eq!(vec.len(), 9);
/// ```
pub type MiniVec<T> = HybridVec<T, 8>;
