//! Implementation of the `fragment` procedural macro
//!
//! This module transforms rendering functions into output fragments that
//! implement the `Fragment` trait.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Error, FnArg, ItemFn, ReturnType, parse_macro_input};

/// Transform a function into a fragment struct
///
/// This function takes a function definition and produces:
/// 1. A unit struct named after the function in CamelCase
/// 2. An implementation of the `Fragment` trait for that struct
/// 3. The original function, unchanged
pub fn handle_fragment(attr: TokenStream, item: TokenStream) -> TokenStream {
	let _ = attr;
	let input_fn = parse_macro_input!(item as ItemFn);

	if let Err(err) = validate_fragment_signature(&input_fn) {
		return err.to_compile_error().into();
	}

	let fn_name = &input_fn.sig.ident;
	let fn_vis = &input_fn.vis;
	let doc_attrs = input_fn.attrs.iter().filter(|attr| attr.path().is_ident("doc"));

	let struct_ident = format_ident!("{}", fn_name_to_struct_name(&fn_name.to_string()));

	let output = quote! {
		#(#doc_attrs)*
		#[derive(Debug, Clone, Copy, Default)]
		#fn_vis struct #struct_ident;

		impl #struct_ident {
			/// Create a new instance of this fragment
			#[must_use]
			pub const fn new() -> Self {
				Self
			}
		}

		impl ::hookgen::Fragment for #struct_ident {
			fn render(
				&self,
				sig: &::hookgen::FunctionSignature,
				cfg: &::hookgen::EmitterConfig,
				out: &mut ::std::string::String,
			) -> ::std::fmt::Result {
				#fn_name(sig, cfg, out)
			}

			fn name(&self) -> &'static str {
				stringify!(#fn_name)
			}

			fn clone_box(&self) -> ::std::boxed::Box<dyn ::hookgen::Fragment> {
				::std::boxed::Box::new(Self)
			}
		}

		#input_fn
	};

	output.into()
}

/// Convert a snake_case function name to a CamelCase struct name
fn fn_name_to_struct_name(name: &str) -> String {
	let mut result = String::new();
	for part in name.split('_') {
		let mut chars = part.chars();
		if let Some(first) = chars.next() {
			result.push_str(&first.to_uppercase().to_string());
			result.push_str(chars.as_str());
		}
	}
	result
}

/// Check that the function can back a fragment
///
/// A fragment function must:
/// 1. Be a free, non-generic function with exactly three arguments
/// 2. Return `std::fmt::Result`
fn validate_fragment_signature(input_fn: &ItemFn) -> Result<(), Error> {
	let sig = &input_fn.sig;

	match &sig.output {
		ReturnType::Default => {
			return Err(Error::new_spanned(sig, "fragment must return std::fmt::Result"));
		},
		ReturnType::Type(_, ty) => {
			let type_str = quote!(#ty).to_string();
			if !type_str.contains("Result") {
				return Err(Error::new_spanned(ty, format!("fragment must return std::fmt::Result, got {type_str}")));
			}
		},
	}

	if !sig.generics.params.is_empty() {
		return Err(Error::new_spanned(&sig.generics, "fragment cannot be generic"));
	}

	if sig.inputs.len() != 3 {
		return Err(Error::new_spanned(
			&sig.inputs,
			"fragment must take (sig: &FunctionSignature, cfg: &EmitterConfig, out: &mut String)",
		));
	}

	for arg in &sig.inputs {
		if let FnArg::Receiver(_) = arg {
			return Err(Error::new_spanned(arg, "fragment cannot be a method"));
		}
	}

	Ok(())
}
