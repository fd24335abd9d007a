//! Builder for creating emitters
//!
//! This module contains the `EmitterBuilder` struct and the
//! configuration shared by every fragment.

use crate::emitter::Emitter;
use crate::emitter::fragment::{Fragment, default_fragments};
use crate::error::{HookgenError, Result};
use crate::signature::DEFAULT_IMAGE_BASE;

/// Configuration for an emitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
	/// Module base subtracted from addresses to get offsets
	pub image_base: u64,
	/// Name of the logging macro called by hook stubs
	pub log_macro: String,
	/// Render non-basic parameter types as `void`
	pub erase_opaque_types: bool,
}

impl Default for EmitterConfig {
	fn default() -> Self {
		Self {
			image_base: DEFAULT_IMAGE_BASE,
			log_macro: "LOG".to_string(),
			erase_opaque_types: false,
		}
	}
}

impl EmitterConfig {
	/// Check that the configuration produces valid C++
	pub fn validate(&self) -> Result<()> {
		let mut chars = self.log_macro.chars();
		let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
		if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
			return Err(HookgenError::InvalidConfig(format!(
				"log macro `{}` is not a valid identifier",
				self.log_macro
			)));
		}
		Ok(())
	}
}

/// Builder for creating emitters
///
/// The five built-in fragments are always emitted first; fragments added
/// with [`EmitterBuilder::fragment`] follow in the order they were added.
pub struct EmitterBuilder {
	/// The configuration for the emitter
	config: EmitterConfig,
	/// Extra fragments appended after the built-in ones
	fragments: Vec<Box<dyn Fragment>>,
}

impl Default for EmitterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for EmitterBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EmitterBuilder")
			.field("config", &self.config)
			.field("fragments", &format!("[{} extra fragments]", self.fragments.len()))
			.finish()
	}
}

impl EmitterBuilder {
	/// Create a new emitter builder with default settings
	#[must_use]
	pub fn new() -> Self {
		Self {
			config: EmitterConfig::default(),
			fragments: Vec::new(),
		}
	}

	/// Set the module image base
	#[must_use]
	pub const fn image_base(mut self, image_base: u64) -> Self {
		self.config.image_base = image_base;
		self
	}

	/// Set the logging macro called by hook stubs
	#[must_use]
	pub fn log_macro(mut self, name: impl Into<String>) -> Self {
		self.config.log_macro = name.into();
		self
	}

	/// Enable or disable rendering opaque parameter types as `void`
	#[must_use]
	pub const fn erase_opaque_types(mut self, erase: bool) -> Self {
		self.config.erase_opaque_types = erase;
		self
	}

	/// Append a custom fragment
	#[must_use]
	pub fn fragment<F: Fragment + 'static>(mut self, fragment: F) -> Self {
		self.fragments.push(Box::new(fragment));
		self
	}

	/// Build the emitter
	pub fn build(self) -> Result<Emitter> {
		self.config.validate()?;

		let mut fragments = default_fragments();
		fragments.extend(self.fragments);

		Ok(Emitter::new(self.config, fragments))
	}
}
