// ============================================================================
// Radix Numeric Library
// Arbitrary-precision integers and fractions over explicit digit vectors
// ============================================================================

//! # Radix Numeric
//!
//! Arbitrary-precision numbers represented as explicit digit vectors in a
//! configurable radix.
//!
//! ## Layers
//!
//! - **[`radix::RadixDigitVector`]**: canonical digits, least-significant
//!   first, with cascading carry addition, subtraction, multiplication and
//!   long division
//! - **[`radix::RadixConverter`]**: value-preserving conversion between radices
//! - **[`number::Integer`]**: multi-limb integers whose limbs are digit vectors
//! - **[`number::Fraction`]**: unreduced ratios of integers, with opt-in reduction
//! - **[`number::Number`]**: tagged union of the kinds with explicit conversion
//!
//! Every value is immutable; operations borrow their operands and return
//! fresh results, so values can be shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use radix_numeric::prelude::*;
//!
//! // Carry ripples through three positions
//! let sum = RadixDigitVector::from_u64(999)
//!     .add(&RadixDigitVector::from_u64(1))
//!     .unwrap();
//! assert_eq!(sum.to_string(), "1000");
//!
//! // 255 in base 16 is [15, 15]
//! let hex = RadixDigitVector::from_u64(255).as_radix(16).unwrap();
//! assert_eq!(hex.digits(), &[15, 15]);
//!
//! // 1/2 + 1/3 = 5/6
//! let half = Fraction::new(Integer::from_u64(1), Integer::from_u64(2)).unwrap();
//! let third = Fraction::new(Integer::from_u64(1), Integer::from_u64(3)).unwrap();
//! assert_eq!(half.add(&third).unwrap().to_string(), "5/6");
//! ```

pub mod number;
pub mod numeric;
pub mod radix;

// Re-exports for convenience
pub mod prelude {
    pub use crate::number::{Fraction, Integer, IntegerConfig, Number, NumberKind};
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::radix::{RadixConverter, RadixDigitVector};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_hierarchy() {
        // Digit vectors -> integer limbs -> fraction -> back to integer
        let config = IntegerConfig::decimal_grouped();
        let value = RadixDigitVector::from_u64(123_456_789);
        let base = config.radix_vector().unwrap();
        let integer = Integer::from_digit_vector(&value, &base).unwrap();
        assert_eq!(integer.limb_count(), 3);

        let as_fraction = integer.convert(NumberKind::Fraction).unwrap();
        let doubled = as_fraction.add(&as_fraction).unwrap();
        assert_eq!(doubled.kind(), NumberKind::Fraction);

        let back = doubled.convert(NumberKind::Integer).unwrap();
        assert_eq!(back.as_integer().unwrap().to_u64().unwrap(), 246_913_578);
    }

    #[test]
    fn test_error_cases() {
        let decimal = RadixDigitVector::from_u64(10);
        let hex = RadixDigitVector::from_u64_in_radix(10, 16).unwrap();
        assert_eq!(decimal.add(&hex), Err(NumericError::RadixMismatch));

        assert_eq!(
            Fraction::new(Integer::from_u64(1), Integer::from_u64(0)),
            Err(NumericError::DivisionByZero)
        );

        assert_eq!(decimal.as_radix(1), Err(NumericError::InvalidRadix));
        assert_eq!(RadixDigitVector::from_i64(-7), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_shared_operands_across_threads() {
        let a = Arc::new(Integer::from_u64(987_654_321));
        let b = Arc::new(Integer::from_u64(123_456_789));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let (a, b) = (Arc::clone(&a), Arc::clone(&b));
                thread::spawn(move || {
                    if i % 2 == 0 {
                        a.add(&b).unwrap()
                    } else {
                        a.mul(&b).unwrap()
                    }
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            let expected: u128 = if i % 2 == 0 {
                987_654_321 + 123_456_789
            } else {
                987_654_321 * 123_456_789
            };
            assert_eq!(result.to_u128().unwrap(), expected);
        }

        assert_eq!(a.to_u64().unwrap(), 987_654_321);
        assert_eq!(b.to_u64().unwrap(), 123_456_789);
    }
}
