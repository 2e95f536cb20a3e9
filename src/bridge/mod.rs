//! # Bridge
//!
//! The object-safe interface every stored callable is reached through.
//!
//! ```text
//! CallableValue<S> ──owns──> Box<dyn CallableBridge<S>>
//!                                    │
//!                                    └── ConcreteBridge<F, C>  (one per F)
//!                                          ├── functor: F
//!                                          └── C: Present | Absent
//! ```
//!
//! Once the box exists, nothing above this layer names `F` again.

use alloc::boxed::Box;
use core::any::Any;

use crate::error::NotComparableError;
use crate::signature::Signature;

mod concrete;

pub use concrete::ConcreteBridge;

/// Type-erased access to one stored callable.
pub trait CallableBridge<S: Signature> {
    /// Deep copy into a new, independently owned bridge of the same variant.
    fn clone_bridge(&self) -> Box<dyn CallableBridge<S>>;

    /// Forward `args` to the stored callable.
    ///
    /// Panics raised by the callable pass through untouched.
    fn invoke(&mut self, args: S::Args) -> S::Output;

    /// Compare with a bridge of possibly different concrete variant.
    ///
    /// Different callable types are never equal and yield `Ok(false)`.
    /// Same callable type compares when either side has the capability,
    /// and yields `Err` when neither does.
    fn equals(&self, other: &dyn CallableBridge<S>) -> Result<bool, NotComparableError>;

    /// The stored callable, for identity checks.
    fn target(&self) -> &dyn Any;

    /// Whether this bridge was built with the equality capability.
    fn is_comparable(&self) -> bool;

    /// Name of the stored callable type.
    fn type_name(&self) -> &'static str;
}
