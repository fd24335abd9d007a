//! Parameter classification
//!
//! This module splits a raw parameter list into [`Parameter`]s, detecting
//! `const` and pointer markers and matching the type against the basic
//! type catalog.

use tracing::trace;

use crate::error::{HookgenError, Result};
use crate::signature::catalog::match_basic_type;
use crate::signature::types::Parameter;

/// Classify every parameter of a raw, comma-separated parameter list
///
/// The output keeps declaration order. An empty (or all-blank) list is
/// rejected rather than turned into a single nameless parameter.
pub fn classify(raw: &str) -> Result<Vec<Parameter>> {
	if raw.trim().is_empty() {
		return Err(HookgenError::EmptyParameterList { line: raw.to_string() });
	}

	raw.split(',').map(classify_token).collect()
}

/// Classify a single parameter declaration
///
/// Only the first `const` and the first `*` are stripped; further
/// occurrences stay in the text and end up in the name.
fn classify_token(token: &str) -> Result<Parameter> {
	let mut text = token.trim().to_string();

	let is_const = text.contains("const");
	if is_const {
		text = text.replacen("const", "", 1).trim().to_string();
	}

	let is_pointer = text.contains('*');
	if is_pointer {
		text = text.replacen('*', "", 1).trim().to_string();
	}

	let unresolvable = || HookgenError::UnresolvableParameterName {
		token: token.trim().to_string(),
	};

	let parameter = if let Some((basic, rest)) = match_basic_type(&text) {
		let name = rest.trim();
		if name.is_empty() {
			return Err(unresolvable());
		}

		Parameter {
			name: name.to_string(),
			ty: basic.spelling().to_string(),
			is_pointer,
			is_const,
			is_basic_type: true,
		}
	} else {
		// Opaque types: first word is the type, second is the name
		let mut words = text.split_whitespace();
		let (Some(ty), Some(name)) = (words.next(), words.next()) else {
			return Err(unresolvable());
		};

		Parameter {
			name: name.to_string(),
			ty: ty.to_string(),
			is_pointer,
			is_const,
			is_basic_type: false,
		}
	};

	trace!(
		"Parameter `{}` -> type={} name={} pointer={} const={} basic={}",
		token.trim(),
		parameter.ty,
		parameter.name,
		parameter.is_pointer,
		parameter.is_const,
		parameter.is_basic_type
	);

	Ok(parameter)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn basic_type_keeps_rest_as_name() {
		let params = classify("int32_t id").unwrap();
		assert_eq!(params.len(), 1);
		assert_eq!(params[0].ty, "int32_t");
		assert_eq!(params[0].name, "id");
		assert!(params[0].is_basic_type);
		assert!(!params[0].is_pointer);
		assert!(!params[0].is_const);
	}

	#[test]
	fn opaque_pointer_with_space_before_star() {
		let params = classify("DriftController_o *this").unwrap();
		assert_eq!(params[0].ty, "DriftController_o");
		assert_eq!(params[0].name, "this");
		assert!(params[0].is_pointer);
		assert!(!params[0].is_basic_type);
	}

	#[test]
	fn const_opaque_pointer() {
		let params = classify("const MethodInfo* method").unwrap();
		assert_eq!(params[0].ty, "MethodInfo");
		assert_eq!(params[0].name, "method");
		assert!(params[0].is_pointer);
		assert!(params[0].is_const);
	}

	#[test]
	fn basic_pointer() {
		let params = classify("float *dotProduct").unwrap();
		assert_eq!(params[0].ty, "float");
		assert_eq!(params[0].name, "dotProduct");
		assert!(params[0].is_pointer);
		assert!(params[0].is_basic_type);
	}

	#[test]
	fn multi_word_basic_type() {
		let params = classify("unsigned long long int mask").unwrap();
		assert_eq!(params[0].ty, "unsigned long long int");
		assert_eq!(params[0].name, "mask");
	}

	#[test]
	fn word_boundary_prevents_prefix_match() {
		let params = classify("intensity_t level").unwrap();
		assert!(!params[0].is_basic_type);
		assert_eq!(params[0].ty, "intensity_t");
		assert_eq!(params[0].name, "level");
	}

	#[test]
	fn only_first_const_is_stripped() {
		let params = classify("const const_t const value").unwrap();
		assert!(params[0].is_const);
		assert_eq!(params[0].ty, "const_t");
		assert_eq!(params[0].name, "const");
	}

	#[test]
	fn only_first_star_is_stripped() {
		let params = classify("char** argv").unwrap();
		assert!(params[0].is_pointer);
		assert_eq!(params[0].ty, "char");
		assert_eq!(params[0].name, "* argv");
	}

	#[test]
	fn order_is_preserved() {
		let params = classify("int a, float b, Foo_o* c").unwrap();
		let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
		assert_eq!(names, ["a", "b", "c"]);
	}

	#[test]
	fn empty_list_is_rejected() {
		assert!(matches!(classify("   "), Err(HookgenError::EmptyParameterList { .. })));
	}

	#[test]
	fn opaque_type_without_name_is_rejected() {
		let err = classify("int a, MethodInfo").unwrap_err();
		match err {
			HookgenError::UnresolvableParameterName { token } => assert_eq!(token, "MethodInfo"),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn basic_type_without_name_is_rejected() {
		assert!(matches!(
			classify("int32_t*"),
			Err(HookgenError::UnresolvableParameterName { .. })
		));
	}
}
