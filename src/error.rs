//! Error types surfaced by [`CallableValue`](crate::CallableValue).

use thiserror::Error;

/// Equality was requested between two values holding a callable type that
/// does not support `==`.
///
/// Raised whenever the comparison is reached, whatever the callables hold.
/// Comparing a value with its own clone fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("callable type `{type_name}` does not support equality comparison")]
pub struct NotComparableError {
    /// Name of the held callable type.
    pub type_name: &'static str,
}

/// A callable was invoked through [`try_invoke`](crate::CallableValue::try_invoke)
/// while empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invoked an empty callable value")]
pub struct EmptyCallableError;
