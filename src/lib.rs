//! hookgen - Generate function hook boilerplate from decompiler signatures
//!
//! Given one signature line as printed by a decompiler for an il2cpp
//! binary, hookgen produces the C++ needed to hook that function: a
//! function pointer typedef, a slot for the original pointer, a logging
//! stub with the same signature and a descriptor record carrying the
//! module offset.
//!
//! # Getting Started
//!
//! ```rust
//! let code = hookgen::generate(
//!     "il2cpp:000000018077F4B0; void __stdcall Quests_QuestController__AddEnginePart(int32_t id, int32_t count, const MethodInfo* method)",
//! )?;
//! assert!(code.starts_with("// Method: Quests::QuestController::AddEnginePart\n"));
//! # Ok::<(), hookgen::HookgenError>(())
//! ```
//!
//! Custom settings and extra fragments go through the builder:
//!
//! ```rust
//! let emitter = hookgen::new()
//!     .image_base(0x1_4000_0000)
//!     .log_macro("HOOK_LOG")
//!     .build()?;
//! let code = emitter.generate("game:0000000140001000; int __fastcall Player__GetHealth(Player_o* this, const MethodInfo* method)")?;
//! assert!(code.contains("\tHOOK_LOG(\"Player::GetHealth called\")\n"));
//! # Ok::<(), hookgen::HookgenError>(())
//! ```

extern crate self as hookgen;

pub mod emitter;
pub mod error;
pub mod signature;
pub mod util;

pub use hookgen_macros::{fragment, type_catalog};

pub use emitter::{Emitter, EmitterBuilder, EmitterConfig, Fragment};
pub use error::{HookgenError, Result};
pub use signature::{BasicType, FunctionSignature, Parameter};

/// Create a new emitter builder
#[must_use]
pub fn new() -> EmitterBuilder {
	EmitterBuilder::new()
}

/// Parse a signature line and render its boilerplate with default settings
///
/// This is equivalent to `Emitter::default().generate(line)`
pub fn generate(line: &str) -> Result<String> {
	Emitter::default().generate(line)
}

/// Parse a signature line with the default image base
pub fn parse(line: &str) -> Result<FunctionSignature> {
	signature::parse(line)
}
