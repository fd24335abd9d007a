//! Signature parsing
//!
//! This module turns one decompiler signature line into a structured
//! [`FunctionSignature`]: the line is split into its parts by the parser
//! and each parameter is classified against the basic type catalog.

mod catalog;
mod classify;
mod parser;
mod types;

pub use catalog::{BasicType, match_basic_type};
pub use classify::classify;
pub use parser::{DEFAULT_IMAGE_BASE, parse, parse_with_base};
pub use types::{FunctionSignature, Parameter, prettify_name};
