//! Call-signature impl generation.
//!
//! For every arity `0..=max` this emits:
//! - `Signature` for `fn(A0, .., An) -> R`
//! - `Callable<fn(A0, .., An) -> R>` for any `FnMut(A0, .., An) -> R`
//! - the arity-specific `CallableValue::call`

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct SignaturesInput {
    pub max: usize,
}

impl Parse for SignaturesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > 16 {
            return Err(syn::Error::new(lit.span(), "arity above 16 is not supported"));
        }
        Ok(SignaturesInput { max })
    }
}

pub fn expand_signatures(input: SignaturesInput) -> TokenStream {
    let arities = (0..=input.max).map(expand_arity);
    quote! { #(#arities)* }
}

fn expand_arity(arity: usize) -> TokenStream {
    let types: Vec<_> = (0..arity).map(|i| format_ident!("A{}", i)).collect();
    let args: Vec<_> = (0..arity).map(|i| format_ident!("a{}", i)).collect();

    let call_doc = format!(
        "Invoke the held callable with {} argument{}.\n\n\
         # Panics\n\n\
         Panics if the value is empty. Use [`try_invoke`](Self::try_invoke) \
         to get an error instead.",
        arity,
        if arity == 1 { "" } else { "s" },
    );

    quote! {
        impl<R, #(#types),*> crate::signature::Signature for fn(#(#types),*) -> R {
            type Args = (#(#types,)*);
            type Output = R;
            const ARITY: usize = #arity;
        }

        impl<Func, R, #(#types),*> crate::signature::Callable<fn(#(#types),*) -> R> for Func
        where
            Func: FnMut(#(#types),*) -> R,
        {
            #[inline(always)]
            #[allow(unused_variables)]
            fn call_with(&mut self, (#(#args,)*): (#(#types,)*)) -> R {
                self(#(#args),*)
            }
        }

        impl<R, #(#types),*> crate::value::CallableValue<fn(#(#types),*) -> R> {
            #[doc = #call_doc]
            #[inline]
            #[track_caller]
            pub fn call(&mut self, #(#args: #types),*) -> R {
                self.invoke((#(#args,)*))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_zero_has_unit_args() {
        let out = expand_arity(0).to_string();
        assert!(out.contains("type Args = ()"));
        assert!(out.contains("const ARITY : usize = 0usize"));
    }

    #[test]
    fn test_arity_one_uses_single_tuple() {
        let out = expand_arity(1).to_string();
        assert!(out.contains("type Args = (A0 ,)"));
        assert!(out.contains("pub fn call (& mut self , a0 : A0) -> R"));
    }

    #[test]
    fn test_expands_every_arity() {
        let out = expand_signatures(SignaturesInput { max: 3 }).to_string();
        assert_eq!(out.matches("const ARITY").count(), 4);
    }

    #[test]
    fn test_rejects_large_arity() {
        assert!(syn::parse_str::<SignaturesInput>("17").is_err());
        assert_eq!(syn::parse_str::<SignaturesInput>("12").unwrap().max, 12);
    }
}
