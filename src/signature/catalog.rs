//! Basic type catalog
//!
//! This module contains the fixed list of primitive and platform type
//! spellings that parameters are classified against. The enum is
//! generated at compile time by the `type_catalog` proc macro.

use hookgen_macros::type_catalog;

/// Basic type catalog
///
/// Variants are declared in lookup order: when several spellings could
/// match a parameter, the first one wins.
#[type_catalog(
	"char",
	"bool",
	"int",
	"float",
	"double",
	"wchar_t",
	"signed char",
	"short int",
	"unsigned short int",
	"unsigned int",
	"long int",
	"unsigned long int",
	"long long int",
	"unsigned long long int",
	"int8_t",
	"uint8_t",
	"int16_t",
	"uint16_t",
	"int32_t",
	"uint32_t",
	"int64_t",
	"uint64_t",
	"int_fast8_t",
	"uint_fast8_t",
	"int_fast16_t",
	"uint_fast16_t",
	"int_fast32_t",
	"uint_fast32_t",
	"int_fast64_t",
	"uint_fast64_t",
	"int_least8_t",
	"uint_least8_t",
	"int_least16_t",
	"uint_least16_t",
	"int_least32_t",
	"uint_least32_t",
	"int_least64_t",
	"uint_least64_t",
	"intptr_t",
	"uintptr_t",
	"intmax_t",
	"uintmax_t",
	"size_t",
	"ptrdiff_t",
	"char16_t",
	"char32_t",
	"DWORD",
	"WORD",
	"BYTE",
	"LONG",
	"BOOL",
	"CHAR",
	"SHORT",
	"FLOAT",
	"DOUBLE"
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {}

impl std::fmt::Display for BasicType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.spelling())
	}
}

/// Find the catalog entry that starts `text`
///
/// An entry only matches as a whole word: it must be followed by a space
/// or a `*`, so `int` never matches `int32_t id` or `intensity`. Returns
/// the entry and the text after it.
#[must_use]
pub fn match_basic_type(text: &str) -> Option<(BasicType, &str)> {
	BasicType::ALL.iter().find_map(|&ty| {
		let rest = text.strip_prefix(ty.spelling())?;
		rest.starts_with([' ', '*']).then_some((ty, rest))
	})
}
