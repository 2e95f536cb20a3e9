//! Equality strategy selected by a type-level capability flag.
//!
//! `Present` compares with `==`. `Absent` refuses every comparison with
//! [`NotComparableError`]. Which impl runs is decided by the flag type the
//! bridge was built with, so there is no runtime branch here.
//!
//! ```
//! use fn_bridge::{Absent, EqualityStrategy, Present};
//!
//! assert_eq!(<Present as EqualityStrategy<i32>>::try_equals(&1, &1), Ok(true));
//!
//! struct Opaque;
//! assert!(<Absent as EqualityStrategy<Opaque>>::try_equals(&Opaque, &Opaque).is_err());
//! ```

use core::any::type_name;

use crate::error::NotComparableError;
use crate::primitives::{Absent, Bool, Present};

/// Compare two values of `T`, or fail if `T` lacks the capability.
pub trait EqualityStrategy<T: ?Sized>: Bool {
    fn try_equals(a: &T, b: &T) -> Result<bool, NotComparableError>;
}

impl<T: PartialEq + ?Sized> EqualityStrategy<T> for Present {
    #[inline(always)]
    fn try_equals(a: &T, b: &T) -> Result<bool, NotComparableError> {
        Ok(a == b)
    }
}

impl<T: ?Sized> EqualityStrategy<T> for Absent {
    #[inline(always)]
    fn try_equals(_a: &T, _b: &T) -> Result<bool, NotComparableError> {
        Err(not_comparable::<T>())
    }
}

pub(crate) fn not_comparable<T: ?Sized>() -> NotComparableError {
    NotComparableError { type_name: type_name::<T>() }
}
