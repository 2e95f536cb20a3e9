//! # Layer 3: Callable Value
//!
//! [`CallableValue`] is the public face of the bridge: a nullable, deep-cloning
//! owner of exactly one type-erased callable.

use alloc::boxed::Box;
use core::fmt;
use core::mem;

use crate::bridge::{CallableBridge, ConcreteBridge};
use crate::error::{EmptyCallableError, NotComparableError};
use crate::primitives::{Absent, Present};
use crate::signature::{Callable, Signature};
use crate::strategy::EqualityStrategy;

/// A type-erased callable with signature `S`.
///
/// `S` is written as a function-pointer type: `CallableValue<fn(i32) -> i32>`
/// holds anything callable with one `i32` that returns an `i32`.
///
/// A value is either *empty* or owns exactly one callable. Cloning deep-copies
/// the callable, so two clones never share captured state. Moving transfers
/// the owned box and never allocates.
///
/// # Equality
///
/// Two values compare equal when both are empty, or when both hold the same
/// concrete callable type and that type's `==` says so. Values holding
/// different callable types are never equal. For the same type, one side
/// built with the equality capability is enough; when neither side has it,
/// [`try_eq`](Self::try_eq) returns [`NotComparableError`] and `==` panics.
///
/// Which constructor decides the capability:
///
/// | Constructor | Capability |
/// |-------------|------------|
/// | [`callable!`](crate::callable) | probed from the concrete type |
/// | [`comparable`](Self::comparable), [`from_fn`](Self::from_fn) | present (`F: PartialEq`) |
/// | [`new`](Self::new) | absent |
///
/// To assign with the probe, build the replacement with `callable!` and pass
/// it to [`replace`](Self::replace).
///
/// # Threads
///
/// The stored callable carries no `Send`/`Sync` bound, so neither does the
/// value. Share it across threads behind your own synchronization.
///
/// # Example
///
/// ```
/// use fn_bridge::{CallableValue, callable};
///
/// fn print_int(i: i32) {
///     let _ = i;
/// }
///
/// let a = CallableValue::<fn(i32)>::from_fn(print_int);
/// let b = CallableValue::<fn(i32)>::from_fn(print_int);
/// assert!(a == b);
///
/// let c: CallableValue<fn(i32)> = callable!(|i: i32| print_int(i + 1));
/// assert!(a != c);
/// ```
pub struct CallableValue<S: Signature> {
    bridge: Option<Box<dyn CallableBridge<S>>>,
}

impl<S: Signature> CallableValue<S> {
    /// An empty value.
    pub const fn empty() -> Self {
        Self { bridge: None }
    }

    /// Wrap `f` without the equality capability.
    ///
    /// Comparing two values that both hold the same `F` through this
    /// constructor fails with [`NotComparableError`].
    pub fn new<F>(f: F) -> Self
    where
        F: Callable<S> + Clone + 'static,
    {
        Self::with_capability::<Absent, F>(f)
    }

    /// Wrap `f` with the equality capability.
    pub fn comparable<F>(f: F) -> Self
    where
        F: Callable<S> + Clone + PartialEq + 'static,
    {
        Self::with_capability::<Present, F>(f)
    }

    /// Wrap a function pointer of exactly the signature type.
    ///
    /// Function items coerce, so `from_fn(print_int)` works without a cast.
    /// Two values wrapping the same function compare equal.
    pub fn from_fn(f: S) -> Self
    where
        S: Callable<S> + Clone + PartialEq + 'static,
    {
        Self::comparable(f)
    }

    /// Wrap `f` with an explicit capability flag, `Present` or `Absent`.
    pub fn with_capability<C, F>(f: F) -> Self
    where
        C: EqualityStrategy<F>,
        F: Callable<S> + Clone + 'static,
    {
        Self {
            bridge: Some(Box::new(ConcreteBridge::<F, C>::new(f))),
        }
    }

    /// Replace the held callable with `f`, without the equality capability.
    ///
    /// The new bridge is built before the old one is released.
    pub fn set<F>(&mut self, f: F)
    where
        F: Callable<S> + Clone + 'static,
    {
        let mut next = Self::new(f);
        self.swap(&mut next);
    }

    /// Replace the held callable with `f`, keeping the equality capability.
    pub fn set_comparable<F>(&mut self, f: F)
    where
        F: Callable<S> + Clone + PartialEq + 'static,
    {
        let mut next = Self::comparable(f);
        self.swap(&mut next);
    }

    /// Replace the held callable with a function pointer, keeping equality
    /// as [`from_fn`](Self::from_fn) does.
    pub fn set_fn(&mut self, f: S)
    where
        S: Callable<S> + Clone + PartialEq + 'static,
    {
        let mut next = Self::from_fn(f);
        self.swap(&mut next);
    }

    /// Install `next` and return the previously held value.
    ///
    /// `next` keeps whatever capability it was built with, so
    /// `v.replace(callable!(f))` assigns with the probe.
    pub fn replace(&mut self, next: Self) -> Self {
        mem::replace(self, next)
    }

    /// Exchange the held callables of two values.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.bridge, &mut other.bridge);
    }

    /// Move the held callable out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            bridge: self.bridge.take(),
        }
    }

    /// Release the held callable.
    pub fn clear(&mut self) {
        self.bridge = None;
    }

    /// `true` exactly when no callable is held.
    pub fn is_empty(&self) -> bool {
        self.bridge.is_none()
    }

    /// `true` when a callable is held and it was built with the equality
    /// capability.
    pub fn is_comparable(&self) -> bool {
        self.bridge.as_ref().is_some_and(|bridge| bridge.is_comparable())
    }

    /// Name of the held callable type.
    pub fn type_name(&self) -> Option<&'static str> {
        self.bridge.as_ref().map(|bridge| bridge.type_name())
    }

    /// Borrow the held callable if it is an `F`.
    pub fn target<F: 'static>(&self) -> Option<&F> {
        self.bridge.as_ref()?.target().downcast_ref::<F>()
    }

    /// Invoke the held callable with a packed argument tuple.
    ///
    /// # Panics
    ///
    /// Panics if the value is empty. Invoking an empty value is a caller
    /// bug; use [`try_invoke`](Self::try_invoke) when emptiness is expected.
    #[track_caller]
    pub fn invoke(&mut self, args: S::Args) -> S::Output {
        match &mut self.bridge {
            Some(bridge) => bridge.invoke(args),
            None => invoked_empty(),
        }
    }

    /// Invoke the held callable, or report that there is none.
    pub fn try_invoke(&mut self, args: S::Args) -> Result<S::Output, EmptyCallableError> {
        let bridge = self.bridge.as_mut().ok_or(EmptyCallableError)?;
        Ok(bridge.invoke(args))
    }

    /// Compare two values.
    ///
    /// Empty equals empty only. Otherwise the held callables decide, and a
    /// callable type without the equality capability is an error.
    pub fn try_eq(&self, other: &Self) -> Result<bool, NotComparableError> {
        match (&self.bridge, &other.bridge) {
            (Some(lhs), Some(rhs)) => lhs.equals(&**rhs),
            (lhs, rhs) => Ok(lhs.is_none() && rhs.is_none()),
        }
    }

    /// Negation of [`try_eq`](Self::try_eq).
    pub fn try_ne(&self, other: &Self) -> Result<bool, NotComparableError> {
        self.try_eq(other).map(|eq| !eq)
    }
}

#[cold]
#[track_caller]
fn invoked_empty() -> ! {
    panic!("{}", EmptyCallableError)
}

impl<S: Signature> Default for CallableValue<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Signature> Clone for CallableValue<S> {
    fn clone(&self) -> Self {
        Self {
            bridge: self.bridge.as_ref().map(|bridge| bridge.clone_bridge()),
        }
    }
}

/// # Panics
///
/// `==` and `!=` panic with the [`NotComparableError`] message when both
/// values hold the same callable type without the equality capability.
impl<S: Signature> PartialEq for CallableValue<S> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        match self.try_eq(other) {
            Ok(eq) => eq,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<S: Signature> fmt::Debug for CallableValue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bridge {
            Some(bridge) => f.debug_tuple("CallableValue").field(&bridge.type_name()).finish(),
            None => f.write_str("CallableValue(<empty>)"),
        }
    }
}
