//! Procedural macros for the fn-bridge callable value
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `signatures!(N)` | Generate call-signature impls for arities `0..=N` |
//!
//! These macros are internal to `fn-bridge` and expand to `crate::` paths,
//! so they are only meaningful when invoked from inside that crate.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

/// Generate `Signature`, `Callable` and `CallableValue::call` for every
/// arity up to the given maximum.
///
/// # Usage
/// ```ignore
/// signatures!(12);  // fn() -> R, fn(A0) -> R, ..., fn(A0, .., A11) -> R
/// ```
#[proc_macro]
pub fn signatures(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::signatures::SignaturesInput);
    inner::signatures::expand_signatures(input).into()
}
