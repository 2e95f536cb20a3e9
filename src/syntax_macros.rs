//! Call-site probe macros.
//!
//! Both macros resolve on the concrete type visible where they are written.
//! Inside a generic function the type parameter is opaque and the probe
//! reports no equality support.

// =============================================================================
// callable! - construct with the probed equality capability
// =============================================================================

/// Build a [`CallableValue`](crate::CallableValue), enabling equality exactly
/// when the callable's concrete type implements `PartialEq`.
///
/// The signature comes from the expected type. Closure parameters need type
/// annotations since the closure is checked before the signature is known.
///
/// # Example
///
/// ```
/// use fn_bridge::{CallableValue, callable};
///
/// fn twice(x: i32) -> i32 {
///     x * 2
/// }
///
/// // Function pointers support `==`.
/// let a: CallableValue<fn(i32) -> i32> = callable!(twice as fn(i32) -> i32);
/// assert!(a.is_comparable());
/// assert_eq!(a.try_eq(&a.clone()), Ok(true));
///
/// // Closures do not.
/// let b: CallableValue<fn(i32) -> i32> = callable!(|x: i32| x * 2);
/// assert!(!b.is_comparable());
/// assert!(b.try_eq(&b.clone()).is_err());
/// ```
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! callable {
    ($f:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::detect::IncomparableFallback as _;
        $crate::detect::Probe($f).into_callable()
    }};
}

// =============================================================================
// is_equality_comparable! - const probe on a type
// =============================================================================

/// `true` if the concrete type `T` implements `PartialEq`.
///
/// Usable in `const` position, and with [`Flag`](crate::Flag) to turn the
/// answer into `Present` / `Absent`.
///
/// ```
/// use fn_bridge::is_equality_comparable;
///
/// const STRINGS: bool = is_equality_comparable!(String);
/// assert!(STRINGS);
/// assert!(!is_equality_comparable!(std::sync::Mutex<u8>));
/// ```
#[cfg(feature = "detect")]
#[macro_export]
macro_rules! is_equality_comparable {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::PartialEqFallback as _;
        $crate::detect::Detect::<$T>::IS_PARTIAL_EQ
    }};
}
