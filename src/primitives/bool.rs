//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! A bridge records whether its callable type supports `==` as one of these
//! two types, so the comparison path is fixed when the bridge is built.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
}

impl Bool for Absent {
    const VALUE: bool = false;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Lift a `const bool` into `Present` / `Absent`.
///
/// ```
/// use fn_bridge::{Bool, Flag, Present};
///
/// const COMPARABLE: bool = fn_bridge::is_equality_comparable!(fn(i32) -> i32);
/// assert!(<Flag<COMPARABLE> as Bool>::VALUE);
/// let _: Flag<COMPARABLE> = Present;
/// ```
pub type Flag<const B: bool> = <() as SelectBool<B>>::Out;
