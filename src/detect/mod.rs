//! # Layer 2: Equality Capability Detection
//!
//! Answers "does `T` support `==` with itself?" at compile time.
//!
//! ## Public API
//!
//! ```
//! use fn_bridge::is_equality_comparable;
//!
//! struct Opaque;
//!
//! assert!(is_equality_comparable!(fn(i32) -> i32));
//! assert!(!is_equality_comparable!(Opaque));
//! ```
//!
//! `callable!` runs the same probe on a value to choose the bridge flag.
//! `PartialEq::eq` always returns `bool`, so a trait bound is the whole
//! test; there is no separate check on the negated result.

pub mod autoref;

pub use autoref::{Detect, IncomparableFallback, PartialEqFallback, Probe};
