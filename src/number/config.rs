// ============================================================================
// Integer Configuration
// Digit radix and limb base used when building integers from native values
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use crate::radix::{RadixDigitVector, DECIMAL_RADIX, MIN_RADIX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout of an [`Integer`](super::Integer).
///
/// - `digit_radix`: radix of the digit vectors inside every limb
/// - `limb_base`: value each limb must stay below (the integer's radix)
///
/// The default is decimal digits with one digit per limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntegerConfig {
    /// Radix of the digit vectors inside each limb
    pub digit_radix: u32,

    /// Limb base: every limb holds a value in `0..limb_base`
    pub limb_base: u32,
}

impl Default for IntegerConfig {
    fn default() -> Self {
        Self::decimal()
    }
}

impl IntegerConfig {
    /// Create a configuration with explicit radices
    pub fn new(digit_radix: u32, limb_base: u32) -> Self {
        Self {
            digit_radix,
            limb_base,
        }
    }

    /// Builder method: Set the digit radix
    pub fn with_digit_radix(mut self, radix: u32) -> Self {
        self.digit_radix = radix;
        self
    }

    /// Builder method: Set the limb base
    pub fn with_limb_base(mut self, base: u32) -> Self {
        self.limb_base = base;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidRadix` if either radix is below 2.
    pub fn validate(&self) -> NumericResult<()> {
        if self.digit_radix < MIN_RADIX || self.limb_base < MIN_RADIX {
            return Err(NumericError::InvalidRadix);
        }
        Ok(())
    }

    /// The limb base expressed as a digit vector in `digit_radix`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if the configuration does not validate.
    pub fn radix_vector(&self) -> NumericResult<RadixDigitVector> {
        self.validate()?;
        RadixDigitVector::from_u64_in_radix(u64::from(self.limb_base), self.digit_radix)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl IntegerConfig {
    /// Decimal digits, one digit per limb
    pub fn decimal() -> Self {
        Self::new(DECIMAL_RADIX, DECIMAL_RADIX)
    }

    /// Decimal digits grouped three per limb (limb base 1000)
    pub fn decimal_grouped() -> Self {
        Self::new(DECIMAL_RADIX, 1000)
    }

    /// Hexadecimal limbs written with decimal digits
    pub fn hexadecimal() -> Self {
        Self::new(DECIMAL_RADIX, 16)
    }

    /// Binary limbs written with binary digits
    pub fn binary() -> Self {
        Self::new(2, 2)
    }
}
