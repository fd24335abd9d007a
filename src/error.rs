//! Error types for hook generation
//!
//! This module contains the error type and result alias shared by the
//! signature parser and the emitter.

use std::io;
use std::num::ParseIntError;
use strum::IntoStaticStr;
use thiserror::Error;

/// Result type for hookgen operations
pub type Result<T> = std::result::Result<T, HookgenError>;

/// Error type for hookgen operations
#[derive(Debug, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum HookgenError {
	/// A required delimiter is missing from the signature line
	#[error("missing `{delimiter}` in signature line `{line}`")]
	MalformedSignature { delimiter: char, line: String },

	/// The text before the parameter list is not `<ret> <callconv> <name>`
	#[error("expected `<return type> <calling convention> <name>` before `(`, got `{head}`")]
	MalformedHead { head: String },

	/// The address is not a hexadecimal number
	#[error("invalid hexadecimal address `{text}`: {source}")]
	InvalidAddress {
		text: String,
		#[source]
		source: ParseIntError,
	},

	/// The address lies below the module image base
	#[error("address 0x{address:016X} is below the image base 0x{base:016X}")]
	AddressBelowBase { address: u64, base: u64 },

	/// The function takes no parameters
	#[error("empty parameter list in `{line}`")]
	EmptyParameterList { line: String },

	/// A parameter declaration does not carry a name
	#[error("cannot resolve a parameter name from `{token}`")]
	UnresolvableParameterName { token: String },

	/// The emitter configuration is unusable
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// Rendering a fragment failed
	#[error("failed to render fragment `{fragment}`")]
	Render {
		fragment: &'static str,
		#[source]
		source: std::fmt::Error,
	},

	/// An I/O error occurred while writing output
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl HookgenError {
	/// Stable, snake_case name of the error kind
	///
	/// Used as the tag of command-line diagnostics, e.g. `malformed_signature`.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		self.into()
	}
}
