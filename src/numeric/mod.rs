// ============================================================================
// Numeric Module
// Bounded-precision scaled integers over a signed 256-bit word
// ============================================================================
//
// This module provides:
// - ScaledInteger: decimal value as a mantissa over a power-of-ten scale
// - CalcError: error type shared by every operation
// - Word bounds, component utilities and reference-scale constants
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Intermediates are unbounded; only results are checked against the word

pub mod components;
pub mod constants;
mod errors;
mod scaled;
pub mod word;

pub use components::{from_components, get_components, normalize, to_float_string};
pub use errors::{CalcError, CalcResult};
pub use scaled::{parse_decimal, ScaledInteger};
pub use word::{MAX_DECIMALS, REFERENCE_DECIMALS, WORD_MAX, WORD_MIN};
