//! Output fragments
//!
//! This module contains the `Fragment` trait and the five built-in
//! fragments that make up a hook: comment block, typedef, original
//! pointer slot, hook stub and hook descriptor.

use std::fmt::Write;

use hookgen_macros::fragment;

use crate::emitter::builder::EmitterConfig;
use crate::signature::FunctionSignature;

/// Trait for rendering one piece of hook boilerplate
pub trait Fragment: Send + Sync {
	/// Append this fragment's text for `sig` to `out`
	///
	/// Every line written must end with a newline so fragments can be
	/// concatenated.
	fn render(&self, sig: &FunctionSignature, cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result;

	/// Get the name of the fragment
	///
	/// This is used for debugging and logging purposes.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn clone_box(&self) -> Box<dyn Fragment>;
}

impl Clone for Box<dyn Fragment> {
	fn clone(&self) -> Self {
		self.clone_box()
	}
}

/// Comment with the qualified name, address and offset
#[fragment]
pub fn comment_block(sig: &FunctionSignature, _cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
	writeln!(out, "// Method: {}", sig.pretty_name)?;
	writeln!(out, "// Addr: 0x{:016X} | Offset: 0x{:016X}", sig.address, sig.offset)
}

/// Function pointer typedef matching the original signature
#[fragment]
pub fn typedef(sig: &FunctionSignature, cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
	writeln!(
		out,
		"typedef {} ({}* _type_{})({});",
		sig.return_type,
		sig.calling_convention,
		sig.function_name,
		sig.parameter_list(cfg.erase_opaque_types)
	)
}

/// Storage slot for the original function pointer
#[fragment]
pub fn original_pointer(sig: &FunctionSignature, _cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
	writeln!(out, "_type_{name} o_{name}{{nullptr}};", name = sig.function_name)
}

/// Stub that logs the call and forwards it to the original
#[fragment]
pub fn hook_stub(sig: &FunctionSignature, cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
	writeln!(
		out,
		"{} {} hooked_{}({}){{",
		sig.return_type,
		sig.calling_convention,
		sig.function_name,
		sig.parameter_list(cfg.erase_opaque_types)
	)?;
	writeln!(out, "\t{}(\"{} called\")", cfg.log_macro, sig.pretty_name)?;
	out.push('\t');
	if sig.returns_value() {
		out.push_str("return ");
	}
	writeln!(out, "o_{}({});", sig.function_name, sig.argument_list())?;
	writeln!(out, "}}")
}

/// Descriptor record handed to the hooking subsystem
#[fragment]
pub fn hook_descriptor(sig: &FunctionSignature, _cfg: &EmitterConfig, out: &mut String) -> std::fmt::Result {
	writeln!(out, "hook_data hk_{} = {{", sig.function_name)?;
	writeln!(out, "\t(void*)hooked_{},", sig.function_name)?;
	writeln!(out, "\t(void**)&o_{},", sig.function_name)?;
	writeln!(out, "\t\"{}\",", sig.pretty_name)?;
	writeln!(out, "\t0x{:016X}", sig.offset)?;
	writeln!(out, "}};")
}

/// The built-in fragments, in output order
#[must_use]
pub fn default_fragments() -> Vec<Box<dyn Fragment>> {
	vec![
		Box::new(CommentBlock::new()),
		Box::new(Typedef::new()),
		Box::new(OriginalPointer::new()),
		Box::new(HookStub::new()),
		Box::new(HookDescriptor::new()),
	]
}
