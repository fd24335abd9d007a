//! Code emission
//!
//! This module contains the emitter that renders a parsed
//! [`FunctionSignature`] into hook boilerplate.

mod builder;
mod fragment;

pub use builder::{EmitterBuilder, EmitterConfig};
pub use fragment::{
	CommentBlock, Fragment, HookDescriptor, HookStub, OriginalPointer, Typedef, default_fragments,
};

use std::io::Write;

use tracing::{debug, info};

use crate::error::{HookgenError, Result};
use crate::signature::{FunctionSignature, parse_with_base};

/// Renders hook boilerplate for parsed signatures
///
/// Created with [`EmitterBuilder`]. An emitter holds no per-signature
/// state and can be shared between threads.
#[derive(Clone)]
pub struct Emitter {
	/// The configuration shared by every fragment
	config: EmitterConfig,
	/// Fragments in output order
	fragments: Vec<Box<dyn Fragment>>,
}

impl std::fmt::Debug for Emitter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Emitter")
			.field("config", &self.config)
			.field(
				"fragments",
				&self.fragments.iter().map(|fragment| fragment.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl Default for Emitter {
	fn default() -> Self {
		Self::new(EmitterConfig::default(), default_fragments())
	}
}

impl Emitter {
	/// Create a new emitter
	///
	/// This is typically called by the `EmitterBuilder` and not directly.
	pub(crate) const fn new(config: EmitterConfig, fragments: Vec<Box<dyn Fragment>>) -> Self {
		Self { config, fragments }
	}

	/// Get the emitter configuration
	#[must_use]
	pub const fn config(&self) -> &EmitterConfig {
		&self.config
	}

	/// Render every fragment for `sig`, in order
	pub fn emit(&self, sig: &FunctionSignature) -> Result<String> {
		let mut out = String::new();
		for fragment in &self.fragments {
			fragment
				.render(sig, &self.config, &mut out)
				.map_err(|source| HookgenError::Render {
					fragment: fragment.name(),
					source,
				})?;
		}

		debug!("Emitted {} fragment(s) for {}", self.fragments.len(), sig.pretty_name);
		Ok(out)
	}

	/// Parse a signature line and render its boilerplate
	pub fn generate(&self, line: &str) -> Result<String> {
		let sig = parse_with_base(line, self.config.image_base)?;
		self.emit(&sig)
	}

	/// Parse and render several signature lines
	///
	/// Blocks are separated by an empty line. The first failing line aborts
	/// the whole batch so callers never see partial output.
	pub fn generate_batch<I, S>(&self, lines: I) -> Result<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let blocks = lines
			.into_iter()
			.map(|line| self.generate(line.as_ref()))
			.collect::<Result<Vec<_>>>()?;

		info!("Generated hooks for {} signature(s)", blocks.len());
		Ok(blocks.join("\n"))
	}

	/// Render `sig` and write it to `writer`
	pub fn write_to<W: Write>(&self, sig: &FunctionSignature, writer: &mut W) -> Result<()> {
		let text = self.emit(sig)?;
		writer.write_all(text.as_bytes())?;
		writer.flush()?;
		Ok(())
	}
}
