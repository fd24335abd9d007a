extern crate proc_macro;

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, LitStr, Token, parse_macro_input};

mod fragment;
mod type_catalog;

use fragment::handle_fragment;
use type_catalog::generate_type_catalog;

/// Generate a type catalog enum from a list of type spellings
///
/// Every string literal becomes one variant, in the order given. The
/// generated enum gets an `ALL` slice in catalog order plus `spelling()`
/// and `from_spelling()` conversions.
///
/// # Example
///
/// ```ignore
/// #[hookgen::type_catalog("char", "unsigned int", "DWORD")]
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// pub enum BasicType {}
/// ```
#[proc_macro_attribute]
pub fn type_catalog(attr: TokenStream, item: TokenStream) -> TokenStream {
	let spellings = parse_macro_input!(attr with Punctuated::<LitStr, Token![,]>::parse_terminated);
	let input = parse_macro_input!(item as DeriveInput);

	match generate_type_catalog(&input, &spellings) {
		Ok(output) => output.into(),
		Err(err) => err.to_compile_error().into(),
	}
}

/// Define an output fragment from a rendering function
///
/// This macro turns a free function into a unit struct implementing the
/// `Fragment` trait. The function itself is kept as-is.
///
/// # Example
///
/// ```ignore
/// use std::fmt::Write;
/// use hookgen::{EmitterConfig, FunctionSignature};
///
/// #[hookgen::fragment]
/// fn forward_decl(sig: &FunctionSignature, _cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
///     writeln!(out, "extern _type_{} o_{};", sig.function_name, sig.function_name)
/// }
/// ```
#[proc_macro_attribute]
pub fn fragment(attr: TokenStream, item: TokenStream) -> TokenStream {
	handle_fragment(attr, item)
}
