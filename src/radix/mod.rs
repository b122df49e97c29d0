// ============================================================================
// Radix Module
// Digit vectors and the conversions between radices
// ============================================================================
//
// This module provides:
// - RadixDigitVector: canonical least-significant-first digit sequences
// - RadixConverter: value-preserving re-expression in another radix
//
// Everything above this layer (Integer, Fraction) is built from these two.

mod converter;
mod digit_vector;

pub use converter::RadixConverter;
pub use digit_vector::{Digit, RadixDigitVector, DECIMAL_RADIX, MIN_RADIX};
