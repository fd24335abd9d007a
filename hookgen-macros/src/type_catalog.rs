//! Type catalog generation
//!
//! This module expands the `type_catalog` attribute into an enum with one
//! variant per type spelling.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::punctuated::Punctuated;
use syn::{Data, DeriveInput, Error, LitStr, Token};

/// Generate the catalog enum for the given spellings
pub fn generate_type_catalog(
	input: &DeriveInput,
	spellings: &Punctuated<LitStr, Token![,]>,
) -> Result<TokenStream, Error> {
	let name = &input.ident;
	let vis = &input.vis;
	let attrs = &input.attrs;

	match &input.data {
		Data::Enum(data) if data.variants.is_empty() => {},
		_ => {
			return Err(Error::new_spanned(
				input,
				"type_catalog must be applied to an enum without variants",
			));
		},
	}

	if spellings.is_empty() {
		return Err(Error::new_spanned(input, "type_catalog needs at least one type spelling"));
	}

	let mut seen_spellings = HashSet::new();
	let mut seen_variants = HashSet::new();
	let mut entries = Vec::with_capacity(spellings.len());

	for lit in spellings {
		let spelling = lit.value();
		if spelling.trim() != spelling || spelling.is_empty() {
			return Err(Error::new_spanned(lit, "type spelling must not be empty or padded"));
		}
		if !seen_spellings.insert(spelling.clone()) {
			return Err(Error::new_spanned(lit, format!("duplicate type spelling `{spelling}`")));
		}

		let variant = spelling_to_variant_name(&spelling);
		if !seen_variants.insert(variant.clone()) {
			return Err(Error::new_spanned(
				lit,
				format!("type spelling `{spelling}` maps to an already used variant `{variant}`"),
			));
		}

		entries.push((spelling, format_ident!("{}", variant)));
	}

	let variants = entries.iter().map(|(spelling, variant)| {
		quote! {
			#[doc = #spelling]
			#variant
		}
	});

	let all_items = entries.iter().map(|(_, variant)| quote! { Self::#variant });

	let spelling_arms = entries.iter().map(|(spelling, variant)| {
		quote! {
			Self::#variant => #spelling
		}
	});

	let from_spelling_arms = entries.iter().map(|(spelling, variant)| {
		quote! {
			#spelling => Some(Self::#variant)
		}
	});

	let count = entries.len();

	let output = quote! {
		#(#attrs)*
		#vis enum #name {
			#(#variants),*
		}

		impl #name {
			/// Number of entries in the catalog
			pub const COUNT: usize = #count;

			/// Every entry, in catalog order
			pub const ALL: &'static [Self] = &[#(#all_items),*];

			/// Get the source spelling of this type
			#[must_use]
			pub const fn spelling(&self) -> &'static str {
				match self {
					#(#spelling_arms),*
				}
			}

			/// Look up a catalog entry by its exact spelling
			#[must_use]
			pub fn from_spelling(spelling: &str) -> Option<Self> {
				match spelling {
					#(#from_spelling_arms),*,
					_ => None
				}
			}
		}
	};

	Ok(output)
}

/// Convert a type spelling into a variant name
///
/// `unsigned long int` becomes `UnsignedLongInt`, `int_fast8_t` becomes
/// `IntFast8T`. All-caps spellings such as `DWORD` are kept intact.
fn spelling_to_variant_name(spelling: &str) -> String {
	let mut result = String::new();
	for part in spelling.split([' ', '_']) {
		let mut chars = part.chars();
		if let Some(first) = chars.next() {
			result.push_str(&first.to_uppercase().to_string());
			result.push_str(chars.as_str());
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::spelling_to_variant_name;

	#[test]
	fn variant_names() {
		assert_eq!(spelling_to_variant_name("char"), "Char");
		assert_eq!(spelling_to_variant_name("CHAR"), "CHAR");
		assert_eq!(spelling_to_variant_name("unsigned long long int"), "UnsignedLongLongInt");
		assert_eq!(spelling_to_variant_name("uint_least16_t"), "UintLeast16T");
	}
}
