// ============================================================================
// Numeric Module
// Shared error vocabulary for the radix and number layers
// ============================================================================
//
// This module provides:
// - NumericError: Error kinds raised by every fallible operation
// - NumericResult<T>: Result alias used across the crate
//
// Design principles:
// - All arithmetic returns Result (no panics)
// - Errors are plain Copy values, cheap to compare in tests

mod errors;

pub use errors::{NumericError, NumericResult};
