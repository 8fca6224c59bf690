//! Error returned by the fallible operations of [`FixedVec`](crate::FixedVec).

use core::{error::Error as CoreError, fmt};

/// The operation would exceed the fixed capacity `N`.
///
/// The rejected value is handed back to the caller, so nothing is lost:
///
/// ```
/// # use inline_vector::{FixedVec, fixedvec};
/// let mut vec: FixedVec<String, 1> = fixedvec!["a".to_string()];
///
/// let err = vec.try_push("b".to_string()).unwrap_err();
/// assert_eq!(err.into_inner(), "b");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    #[inline]
    pub(crate) const fn new(element: T) -> Self {
        Self { element }
    }

    /// Extracts the value that did not fit.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Discards the value, keeping only the error condition.
    #[inline]
    pub fn simplify(self) -> CapacityError {
        CapacityError { element: () }
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError: capacity exceeded")
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl<T> CoreError for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn describe(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn is_core_error() {
        let err = CapacityError::new(7u8);
        assert_eq!(describe(&err), "insufficient capacity");
        assert_eq!(err.into_inner(), 7);
        assert_eq!(err.simplify(), CapacityError::new(()));
    }
}
