//! Call signatures.
//!
//! A signature is spelled as a function-pointer type, `fn(A0, A1) -> R`,
//! and used as the type parameter of [`CallableValue`](crate::CallableValue).
//! It is never stored; it only fixes the argument tuple and return type.
//!
//! Impls exist for arities 0 through 12. Arguments are plain values or
//! references with a named lifetime (`fn(&'static str)`). Higher-ranked
//! signatures such as `for<'a> fn(&'a str)` are not covered.

/// A call signature: argument tuple plus return type.
pub trait Signature {
    /// Arguments packed as a tuple (`()` for nullary, `(A0,)` for unary).
    type Args;
    /// Return type.
    type Output;
    /// Number of arguments.
    const ARITY: usize;
}

/// Anything that can be called with signature `S`.
///
/// Implemented for every `FnMut` of matching arity: closures, function
/// items and function pointers alike.
pub trait Callable<S: Signature> {
    fn call_with(&mut self, args: S::Args) -> S::Output;
}

macros::signatures!(12);
