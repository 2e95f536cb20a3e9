#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std support in thiserror and tracing
// - detect: default, enables the call-site probe macros

//! # fn-bridge
//!
//! Type-erased callable values with deep clone and capability-probed equality.
//!
//! ## Architecture
//!
//! A [`CallableValue<S>`] owns one boxed [`CallableBridge<S>`]. The only
//! implementer, [`ConcreteBridge<F, C>`], holds the concrete callable `F`
//! and a type-level flag `C` saying whether `F` supports `==`.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Present / Absent, Flag<B>                                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Strategy + Signature                                    |
//! |  - EqualityStrategy (== or NotComparableError)                    |
//! |  - Signature / Callable for fn(A0..An) -> R                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Bridge + Detection                                      |
//! |  - CallableBridge, ConcreteBridge<F, C>                           |
//! |  - Detect / Probe (autoref capability probe)                      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - CallableValue, callable!, is_equality_comparable!              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Equality
//!
//! Whether two held callables may be compared is decided when the value is
//! built, never by a runtime check on the values:
//!
//! - callables of different concrete types are unequal;
//! - callables of the same type compare with their own `==` when at least
//!   one side was built with the capability;
//! - otherwise comparison fails with [`NotComparableError`], even for a value
//!   and its own clone.
//!
//! ## Quick Start
//!
//! ```
//! use fn_bridge::{CallableValue, callable};
//!
//! let mut count = 0;
//! let mut counter: CallableValue<fn(i32) -> i32> = callable!(move |_: i32| {
//!     count += 1;
//!     count
//! });
//!
//! assert_eq!(counter.call(0), 1);
//! assert_eq!(counter.call(0), 2);
//!
//! // Deep copy: the clone carries its own counter from here on.
//! let mut snapshot = counter.clone();
//! assert_eq!(counter.call(0), 3);
//! assert_eq!(snapshot.call(0), 3);
//!
//! let mut moved = counter.take();
//! assert!(counter.is_empty());
//! assert_eq!(moved.call(0), 4);
//! ```

extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Strategy + Signature
// =============================================================================
pub mod error;
pub mod signature;
pub mod strategy;

// =============================================================================
// Layer 2: Bridge + Detection
// =============================================================================
pub mod bridge;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 3: User API
// =============================================================================
pub mod value;

// callable!, is_equality_comparable!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use bridge::{CallableBridge, ConcreteBridge};
pub use error::{EmptyCallableError, NotComparableError};
pub use primitives::bool::{Absent, Bool, Flag, Present};
pub use signature::{Callable, Signature};
pub use strategy::EqualityStrategy;
pub use value::CallableValue;

/// Common items for callable values.
pub mod prelude {
    pub use crate::value::CallableValue;
    pub use crate::error::{EmptyCallableError, NotComparableError};
    pub use crate::primitives::{Absent, Present};
    #[cfg(feature = "detect")]
    pub use crate::{callable, is_equality_comparable};
}
