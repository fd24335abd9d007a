//! Signature line parser
//!
//! Recognizes lines of the form
//!
//! ```text
//! <section>: <hex address> ; <return type> <calling convention> <name>(<parameters>)
//! ```
//!
//! as printed by decompilers for il2cpp binaries.

use tracing::{debug, warn};

use crate::error::{HookgenError, Result};
use crate::signature::classify::classify;
use crate::signature::types::{FunctionSignature, prettify_name};

/// Default image base of a 64-bit PE module
pub const DEFAULT_IMAGE_BASE: u64 = 0x0000_0001_8000_0000;

/// Cursor over a signature line that hands out delimited sections
struct Scanner<'a> {
	line: &'a str,
	rest: &'a str,
}

impl<'a> Scanner<'a> {
	const fn new(line: &'a str) -> Self {
		Self { line, rest: line }
	}

	/// Take everything up to the next `delimiter` and move past it
	fn take_until(&mut self, delimiter: char) -> Result<&'a str> {
		let (head, tail) = self
			.rest
			.split_once(delimiter)
			.ok_or_else(|| HookgenError::MalformedSignature {
				delimiter,
				line: self.line.to_string(),
			})?;
		self.rest = tail;
		Ok(head)
	}

	/// Everything not consumed yet
	const fn remainder(&self) -> &'a str {
		self.rest
	}
}

/// Parse a signature line using the default image base
pub fn parse(line: &str) -> Result<FunctionSignature> {
	parse_with_base(line, DEFAULT_IMAGE_BASE)
}

/// Parse a signature line, computing the offset against `image_base`
pub fn parse_with_base(line: &str, image_base: u64) -> Result<FunctionSignature> {
	let line = line.trim();
	let mut scanner = Scanner::new(line);

	let section_tag = scanner.take_until(':')?.trim();
	let address_text = scanner.take_until(';')?.trim();
	let head = scanner.take_until('(')?.trim();
	let rest = scanner.remainder().trim();
	let raw_params = rest.strip_suffix(')').unwrap_or(rest);

	let address = parse_address(address_text)?;
	let offset = address
		.checked_sub(image_base)
		.ok_or(HookgenError::AddressBelowBase {
			address,
			base: image_base,
		})?;

	let mut words = head.split_whitespace();
	let (Some(return_type), Some(calling_convention), Some(function_name)) =
		(words.next(), words.next(), words.next())
	else {
		return Err(HookgenError::MalformedHead { head: head.to_string() });
	};

	let ignored: Vec<&str> = words.collect();
	if !ignored.is_empty() {
		warn!("Ignoring extra tokens after `{}`: {:?}", function_name, ignored);
	}

	if raw_params.trim().is_empty() {
		return Err(HookgenError::EmptyParameterList { line: line.to_string() });
	}

	let parameters = classify(raw_params)?;
	let pretty_name = prettify_name(function_name);

	debug!(
		"Parsed {} at 0x{:016X} (offset 0x{:X}) with {} parameter(s)",
		pretty_name,
		address,
		offset,
		parameters.len()
	);

	Ok(FunctionSignature {
		section_tag: section_tag.to_string(),
		address,
		offset,
		return_type: return_type.to_string(),
		calling_convention: calling_convention.to_string(),
		function_name: function_name.to_string(),
		pretty_name,
		parameters,
	})
}

/// Parse a hexadecimal address, with or without a `0x` prefix
fn parse_address(text: &str) -> Result<u64> {
	let digits = text
		.strip_prefix("0x")
		.or_else(|| text.strip_prefix("0X"))
		.unwrap_or(text);

	u64::from_str_radix(digits, 16).map_err(|source| HookgenError::InvalidAddress {
		text: text.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scanner_splits_on_first_delimiter() {
		let mut scanner = Scanner::new("a:b:c");
		assert_eq!(scanner.take_until(':').unwrap(), "a");
		assert_eq!(scanner.remainder(), "b:c");
	}

	#[test]
	fn scanner_reports_missing_delimiter() {
		let mut scanner = Scanner::new("no delimiter here");
		match scanner.take_until(';') {
			Err(HookgenError::MalformedSignature { delimiter, line }) => {
				assert_eq!(delimiter, ';');
				assert_eq!(line, "no delimiter here");
			},
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn address_accepts_prefix_and_padding() {
		assert_eq!(parse_address("000000018077F4B0").unwrap(), 0x1_8077_F4B0);
		assert_eq!(parse_address("0x180C079C0").unwrap(), 0x1_80C0_79C0);
		assert_eq!(parse_address("0000000180c079c0").unwrap(), 0x1_80C0_79C0);
	}

	#[test]
	fn address_rejects_garbage() {
		assert!(matches!(parse_address("18077G4B0"), Err(HookgenError::InvalidAddress { .. })));
		assert!(matches!(parse_address(""), Err(HookgenError::InvalidAddress { .. })));
	}

	#[test]
	fn space_before_semicolon_is_accepted() {
		let sig = parse(
			"il2cpp:0000000180C079C0 ; float __stdcall DriftController__GetDriftAngle(DriftController_o *this, CarX_Car_o *car, float *dotProduct, const MethodInfo *method)",
		)
		.unwrap();
		assert_eq!(sig.section_tag, "il2cpp");
		assert_eq!(sig.address, 0x1_80C0_79C0);
		assert_eq!(sig.offset, 0xC0_79C0);
		assert_eq!(sig.return_type, "float");
		assert_eq!(sig.calling_convention, "__stdcall");
		assert_eq!(sig.function_name, "DriftController__GetDriftAngle");
		assert_eq!(sig.pretty_name, "DriftController::GetDriftAngle");
		assert_eq!(sig.parameters.len(), 4);
	}

	#[test]
	fn extra_head_tokens_are_ignored() {
		let sig = parse("s:180000010; int __fastcall Foo extra(int a)").unwrap();
		assert_eq!(sig.function_name, "Foo");
	}

	#[test]
	fn short_head_is_rejected() {
		assert!(matches!(
			parse("s:180000010; int Foo(int a)"),
			Err(HookgenError::MalformedHead { .. })
		));
	}

	#[test]
	fn custom_image_base() {
		let sig = parse_with_base("s:140001000; void __cdecl f(int a)", 0x1_4000_0000).unwrap();
		assert_eq!(sig.offset, 0x1000);
	}

	#[test]
	fn address_below_base_is_rejected() {
		assert!(matches!(
			parse("s:00401000; void __cdecl f(int a)"),
			Err(HookgenError::AddressBelowBase { address: 0x40_1000, .. })
		));
	}

	#[test]
	fn empty_parameters_are_rejected() {
		assert!(matches!(
			parse("s:180000000; void __cdecl f()"),
			Err(HookgenError::EmptyParameterList { .. })
		));
	}
}
