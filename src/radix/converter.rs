// ============================================================================
// Radix Converter
// Re-expresses a digit vector in a different radix
// ============================================================================

use super::digit_vector::{check_radix, Digit, RadixDigitVector};
use crate::numeric::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::num::NonZeroU32;

/// Converts digit vectors into a fixed target radix.
///
/// Conversion is repeated division by the target radix, performed as long
/// division directly on the source digits. No native integer is ever
/// reconstructed, so vectors of any length convert.
///
/// # Example
/// ```
/// use radix_numeric::radix::{RadixConverter, RadixDigitVector};
///
/// let hex = RadixConverter::new(16).unwrap();
/// let v = hex.convert(&RadixDigitVector::from_u64(255));
/// assert_eq!(v.digits(), &[15, 15]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixConverter {
    target: NonZeroU32,
}

impl RadixConverter {
    /// Create a converter into `target`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `target < 2`.
    pub fn new(target: u32) -> NumericResult<Self> {
        check_radix(target)?;
        NonZeroU32::new(target)
            .map(|target| Self { target })
            .ok_or(NumericError::InvalidRadix)
    }

    /// The radix produced by [`convert`](Self::convert).
    #[inline]
    pub fn target(&self) -> u32 {
        self.target.get()
    }

    /// Convert `source` into the target radix, preserving its value.
    pub fn convert(&self, source: &RadixDigitVector) -> RadixDigitVector {
        if source.radix() == self.target() {
            return source.clone();
        }

        tracing::trace!(
            from = source.radix(),
            to = self.target(),
            digits = source.digit_count(),
            "converting digit vector"
        );

        let mut digits: SmallVec<[Digit; 8]> = SmallVec::new();
        let mut quotient = source.clone();
        loop {
            let (next, remainder) = quotient.div_rem_nonzero(self.target);
            digits.push(remainder);
            quotient = next;
            if quotient.is_zero() {
                break;
            }
        }
        RadixDigitVector::from_buf(digits, self.target())
    }
}

impl RadixDigitVector {
    /// Re-express this value in `target` radix.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `target < 2`.
    pub fn as_radix(&self, target: u32) -> NumericResult<Self> {
        RadixConverter::new(target).map(|converter| converter.convert(self))
    }
}
