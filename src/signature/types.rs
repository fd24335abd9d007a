//! Types describing a parsed signature
//!
//! This module contains the structured form of a hook target: the
//! function itself and its ordered parameters.

use std::fmt;

/// Maximum number of separators rewritten by [`prettify_name`], per separator kind
const PRETTY_NAME_REWRITES: usize = 5;

/// One function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	/// Declared name, used when forwarding the call
	pub name: String,
	/// Catalog spelling for basic types, the opaque type name otherwise
	pub ty: String,
	/// Whether the declaration carried a `*`
	pub is_pointer: bool,
	/// Whether the declaration carried `const`
	pub is_const: bool,
	/// Whether `ty` is a catalog entry
	pub is_basic_type: bool,
}

impl Parameter {
	/// Render the declaration, optionally replacing opaque types with `void`
	///
	/// `const MethodInfo* method` becomes `const void* method` when
	/// `erase_opaque_types` is set. Basic types are never erased.
	#[must_use]
	pub fn declaration(&self, erase_opaque_types: bool) -> String {
		let ty = if erase_opaque_types && !self.is_basic_type {
			"void"
		} else {
			self.ty.as_str()
		};

		let mut decl = String::new();
		if self.is_const {
			decl.push_str("const ");
		}
		decl.push_str(ty);
		if self.is_pointer {
			decl.push('*');
		}
		decl.push(' ');
		decl.push_str(&self.name);
		decl
	}
}

impl fmt::Display for Parameter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.declaration(false))
	}
}

/// A parsed hook target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
	/// Label before the first `:`, e.g. `il2cpp`
	pub section_tag: String,
	/// Absolute address of the function
	pub address: u64,
	/// Address relative to the module image base
	pub offset: u64,
	/// Return type, carried verbatim
	pub return_type: String,
	/// Calling convention, carried verbatim
	pub calling_convention: String,
	/// Flattened symbol name, e.g. `Quests_QuestController__AddEnginePart`
	pub function_name: String,
	/// Qualified display name, e.g. `Quests::QuestController::AddEnginePart`
	pub pretty_name: String,
	/// Parameters in declaration order
	pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
	/// Whether the hook stub has to forward a return value
	#[must_use]
	pub fn returns_value(&self) -> bool {
		self.return_type != "void"
	}

	/// Parameter declarations joined with `, `
	#[must_use]
	pub fn parameter_list(&self, erase_opaque_types: bool) -> String {
		self.parameters
			.iter()
			.map(|p| p.declaration(erase_opaque_types))
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Parameter names joined with `, `, for forwarding to the original
	#[must_use]
	pub fn argument_list(&self) -> String {
		self.parameters
			.iter()
			.map(|p| p.name.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// Rebuild a qualified name from a flattened symbol name
///
/// The first five `__` become `::`, then the first five remaining `_`
/// become `::`. Anything past the fifth occurrence is kept as-is.
#[must_use]
pub fn prettify_name(function_name: &str) -> String {
	function_name
		.replacen("__", "::", PRETTY_NAME_REWRITES)
		.replacen('_', "::", PRETTY_NAME_REWRITES)
}
