//! Autoref-based equality detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time trait detection on concrete types.
//!
//! ## How it works
//!
//! For each trait T we want to detect:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! [`Probe`] applies the same shadowing to a method, so a value can pick
//! its bridge flag without its type ever being written down.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! In generic contexts like `fn foo<T>()` the fallback always wins.

use core::marker::PhantomData;

use crate::primitives::{Absent, Present};
use crate::signature::Callable;
use crate::value::CallableValue;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a std trait.
macro_rules! impl_detect {
    ($Trait:ident => $Const:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $Const: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait + ?Sized> Detect<T> { pub const $Const: bool = true; }
        }
    };
}

impl_detect!(PartialEq => IS_PARTIAL_EQ);

/// Value-level probe used by [`callable!`](crate::callable).
#[doc(hidden)]
pub struct Probe<F>(pub F);

impl<F: PartialEq + Clone + 'static> Probe<F> {
    /// `F: PartialEq`: build a comparable value.
    #[inline]
    pub fn into_callable<S>(self) -> CallableValue<S>
    where
        S: crate::signature::Signature,
        F: Callable<S>,
    {
        CallableValue::with_capability::<Present, F>(self.0)
    }
}

/// Fallback taken when the probed type has no `PartialEq`.
#[doc(hidden)]
pub trait IncomparableFallback<F> {
    fn into_callable<S>(self) -> CallableValue<S>
    where
        S: crate::signature::Signature,
        F: Callable<S> + Clone + 'static;
}

impl<F> IncomparableFallback<F> for Probe<F> {
    #[inline]
    fn into_callable<S>(self) -> CallableValue<S>
    where
        S: crate::signature::Signature,
        F: Callable<S> + Clone + 'static,
    {
        CallableValue::with_capability::<Absent, F>(self.0)
    }
}
