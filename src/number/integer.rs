// ============================================================================
// Integer
// Multi-limb arbitrary-precision integers built on digit vectors
// ============================================================================

use super::config::IntegerConfig;
use super::fraction::Fraction;
use super::kind::{Number, NumberKind};
use crate::numeric::{NumericError, NumericResult};
use crate::radix::{RadixConverter, RadixDigitVector, DECIMAL_RADIX};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-negative integer stored as limbs of a configurable base.
///
/// The integer's `radix` is the limb base `B`, itself a digit vector in
/// the *digit radix* `r`. Every limb is a digit vector in `r` whose value
/// is below `B`; the value of the integer is `Σ limb[i] · B^i`.
///
/// Limbs are least-significant first and canonical: no most-significant
/// zero limbs, and zero is a single zero limb.
///
/// # Example
/// ```
/// use radix_numeric::number::{Integer, IntegerConfig};
///
/// let config = IntegerConfig::decimal_grouped(); // limbs in 0..1000
/// let a = Integer::from_config(999_999, &config).unwrap();
/// let b = Integer::from_config(1, &config).unwrap();
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.limb_count(), 3);
/// assert_eq!(sum.to_u64().unwrap(), 1_000_000);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInteger", into = "RawInteger"))]
pub struct Integer {
    radix: RadixDigitVector,
    limbs: Vec<RadixDigitVector>,
}

impl Integer {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from an explicit limb base and limb list.
    ///
    /// # Errors
    /// - `InvalidRadix` if the limb base is below 2
    /// - `RadixMismatch` if a limb's digit radix differs from the base's
    /// - `InvalidInput` if a limb is not below the limb base
    pub fn new(radix: RadixDigitVector, limbs: Vec<RadixDigitVector>) -> NumericResult<Self> {
        if radix.is_zero() || radix.is_one() {
            return Err(NumericError::InvalidRadix);
        }
        for limb in &limbs {
            limb.ensure_same_radix(&radix)?;
            if limb.compare_digits(&radix) != Ordering::Less {
                tracing::debug!(limb = %limb, base = %radix, "rejected limb outside limb base");
                return Err(NumericError::InvalidInput);
            }
        }
        Ok(Self::from_limbs(radix, limbs))
    }

    /// Trim most-significant zero limbs; callers guarantee every limb is valid.
    fn from_limbs(radix: RadixDigitVector, mut limbs: Vec<RadixDigitVector>) -> Self {
        while limbs.len() > 1 && limbs.last().is_some_and(RadixDigitVector::is_zero) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(radix.zero_like());
        }
        debug_assert!(limbs
            .iter()
            .all(|l| l.radix() == radix.radix() && l.compare_digits(&radix) == Ordering::Less));
        Self { radix, limbs }
    }

    /// Decimal integer with one decimal digit per limb.
    pub fn from_u64(n: u64) -> Self {
        let limbs = RadixDigitVector::from_u64(n)
            .digits()
            .iter()
            .map(|&d| RadixDigitVector::from_u64(u64::from(d)))
            .collect();
        Self::from_limbs(RadixDigitVector::from_u64(u64::from(DECIMAL_RADIX)), limbs)
    }

    /// Build `n` with the layout described by `config`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if the configuration does not validate.
    pub fn from_config(n: u64, config: &IntegerConfig) -> NumericResult<Self> {
        let radix = config.radix_vector()?;
        let value = RadixDigitVector::from_u64_in_radix(n, config.digit_radix)?;
        Ok(Self::regroup(&value, radix))
    }

    /// Split a single digit vector into limbs of base `radix`.
    ///
    /// # Errors
    /// - `InvalidRadix` if the limb base is below 2
    /// - `RadixMismatch` if `value` and `radix` use different digit radices
    pub fn from_digit_vector(
        value: &RadixDigitVector,
        radix: &RadixDigitVector,
    ) -> NumericResult<Self> {
        if radix.is_zero() || radix.is_one() {
            return Err(NumericError::InvalidRadix);
        }
        value.ensure_same_radix(radix)?;
        Ok(Self::regroup(value, radix.clone()))
    }

    /// Re-group a flat value into limbs.
    ///
    /// A limb base that fits in a `u32` goes through the radix converter;
    /// larger bases fall back to repeated long division.
    fn regroup(value: &RadixDigitVector, radix: RadixDigitVector) -> Self {
        let converter = radix
            .to_u64()
            .ok()
            .and_then(|base| u32::try_from(base).ok())
            .and_then(|base| RadixConverter::new(base).ok());

        let limbs = match converter {
            Some(converter) => Self::split_with(&converter, value, radix.radix()),
            None => {
                let mut limbs = Vec::new();
                let mut rest = value.clone();
                loop {
                    let (quotient, limb) = rest.div_rem_digits(&radix);
                    limbs.push(limb);
                    rest = quotient;
                    if rest.is_zero() {
                        break;
                    }
                }
                limbs
            },
        };
        Self::from_limbs(radix, limbs)
    }

    /// Convert `value` to the limb base, then write each resulting digit
    /// back out as a limb in `digit_radix`.
    fn split_with(
        converter: &RadixConverter,
        value: &RadixDigitVector,
        digit_radix: u32,
    ) -> Vec<RadixDigitVector> {
        converter
            .convert(value)
            .digits()
            .iter()
            .map(|&d| RadixDigitVector::decompose(u128::from(d), digit_radix))
            .collect()
    }

    /// Zero with the same layout as `self`.
    pub fn zero_like(&self) -> Self {
        Self::from_limbs(self.radix.clone(), vec![self.radix.zero_like()])
    }

    /// One with the same layout as `self`.
    pub fn one_like(&self) -> Self {
        Self::from_limbs(self.radix.clone(), vec![self.radix.one_like()])
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The limb base as a digit vector.
    #[inline]
    pub fn radix(&self) -> &RadixDigitVector {
        &self.radix
    }

    /// Radix of the digit vectors inside each limb.
    #[inline]
    pub fn digit_radix(&self) -> u32 {
        self.radix.radix()
    }

    /// Limbs, least-significant first.
    #[inline]
    pub fn limbs(&self) -> &[RadixDigitVector] {
        &self.limbs
    }

    #[inline]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0].is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0].is_one()
    }

    /// Flatten into one digit vector in the digit radix (Horner's rule).
    pub fn to_digit_vector(&self) -> RadixDigitVector {
        self.limbs
            .iter()
            .rev()
            .fold(self.radix.zero_like(), |acc, limb| {
                acc.mul_digits(&self.radix).add_digits(limb)
            })
    }

    /// # Errors
    /// Returns `Overflow` if the value exceeds `u64::MAX`.
    pub fn to_u64(&self) -> NumericResult<u64> {
        self.to_digit_vector().to_u64()
    }

    /// # Errors
    /// Returns `Overflow` if the value exceeds `u128::MAX`.
    pub fn to_u128(&self) -> NumericResult<u128> {
        self.to_digit_vector().to_u128()
    }

    /// Both integers share the digit radix and the limb base.
    #[inline]
    pub(crate) fn ensure_compatible(&self, other: &Self) -> NumericResult<()> {
        if self.radix == other.radix {
            Ok(())
        } else {
            Err(NumericError::RadixMismatch)
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare numeric values.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn compare(&self, other: &Self) -> NumericResult<Ordering> {
        self.ensure_compatible(other)?;
        Ok(self.compare_limbs(other))
    }

    fn compare_limbs(&self, other: &Self) -> Ordering {
        self.limbs.len().cmp(&other.limbs.len()).then_with(|| {
            self.limbs
                .iter()
                .rev()
                .zip(other.limbs.iter().rev())
                .map(|(a, b)| a.compare_digits(b))
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Limb-by-limb addition.
    ///
    /// Each limb sum goes through digit-vector addition; a limb that reaches
    /// the limb base has the base subtracted and carries one into the next
    /// limb, the same discipline digit vectors apply to single digits.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_compatible(other)?;

        let zero = self.radix.zero_like();
        let one = self.radix.one_like();
        let width = self.limbs.len().max(other.limbs.len());
        let mut limbs = Vec::with_capacity(width + 1);
        let mut carry = false;
        for i in 0..width {
            let a = self.limbs.get(i).unwrap_or(&zero);
            let b = other.limbs.get(i).unwrap_or(&zero);
            let mut sum = a.add_digits(b);
            if carry {
                sum = sum.add_digits(&one);
            }
            carry = sum.compare_digits(&self.radix) != Ordering::Less;
            if carry {
                sum = sum.sub_digits(&self.radix);
            }
            limbs.push(sum);
        }
        if carry {
            limbs.push(one);
        }
        Ok(Self::from_limbs(self.radix.clone(), limbs))
    }

    /// Limb-by-limb subtraction with borrow.
    ///
    /// # Errors
    /// - `RadixMismatch` if the layouts differ
    /// - `Underflow` if `other > self`
    pub fn checked_sub(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_compatible(other)?;
        if self.compare_limbs(other) == Ordering::Less {
            return Err(NumericError::Underflow);
        }

        let zero = self.radix.zero_like();
        let one = self.radix.one_like();
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = false;
        for (i, a) in self.limbs.iter().enumerate() {
            let b = other.limbs.get(i).unwrap_or(&zero);
            let take = if borrow { b.add_digits(&one) } else { b.clone() };
            borrow = a.compare_digits(&take) == Ordering::Less;
            let limb = if borrow {
                a.add_digits(&self.radix).sub_digits(&take)
            } else {
                a.sub_digits(&take)
            };
            limbs.push(limb);
        }
        debug_assert!(!borrow, "subtraction left a borrow");
        Ok(Self::from_limbs(self.radix.clone(), limbs))
    }

    /// Schoolbook multiplication over limbs.
    ///
    /// Every partial `acc + a_i * b_j + carry` stays below `B^2`, so dividing
    /// it by the limb base yields the new limb and a carry below `B`.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn mul(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_compatible(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(self.zero_like());
        }

        tracing::trace!(
            lhs_limbs = self.limbs.len(),
            rhs_limbs = other.limbs.len(),
            "multiplying integers"
        );

        let zero = self.radix.zero_like();
        let width = other.limbs.len();
        let mut acc = vec![zero.clone(); self.limbs.len() + width];
        for (i, a) in self.limbs.iter().enumerate() {
            let mut carry = zero.clone();
            for (j, b) in other.limbs.iter().enumerate() {
                let partial = acc[i + j].add_digits(&a.mul_digits(b)).add_digits(&carry);
                let (high, low) = partial.div_rem_digits(&self.radix);
                acc[i + j] = low;
                carry = high;
            }
            acc[i + width] = acc[i + width].add_digits(&carry);
        }
        Ok(Self::from_limbs(self.radix.clone(), acc))
    }

    /// Quotient and remainder.
    ///
    /// # Errors
    /// - `RadixMismatch` if the layouts differ
    /// - `DivisionByZero` if `other` is zero
    pub fn div_rem(&self, other: &Self) -> NumericResult<(Self, Self)> {
        self.ensure_compatible(other)?;
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_rem_parts(other))
    }

    /// Callers guarantee compatible layouts and a nonzero divisor.
    pub(crate) fn div_rem_parts(&self, other: &Self) -> (Self, Self) {
        let (quotient, remainder) = self
            .to_digit_vector()
            .div_rem_digits(&other.to_digit_vector());
        (
            Self::regroup(&quotient, self.radix.clone()),
            Self::regroup(&remainder, self.radix.clone()),
        )
    }

    /// Greatest common divisor (Euclid). `gcd(0, 0)` is zero.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn gcd(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_compatible(other)?;
        Ok(self.gcd_parts(other))
    }

    pub(crate) fn gcd_parts(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, remainder) = a.div_rem_parts(&b);
            a = b;
            b = remainder;
        }
        a
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Re-express the value with limb base `new_base`.
    ///
    /// The integer is flattened into one digit vector, that vector is
    /// converted to radix `new_base`, and each resulting digit becomes one
    /// limb written in the unchanged digit radix.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `new_base < 2`.
    pub fn as_radix(&self, new_base: u32) -> NumericResult<Self> {
        let converter = RadixConverter::new(new_base)?;
        let digit_radix = self.digit_radix();

        tracing::trace!(
            digit_radix,
            from = %self.radix,
            to = new_base,
            "re-grouping integer limbs"
        );

        let radix = RadixDigitVector::decompose(u128::from(new_base), digit_radix);
        let limbs = Self::split_with(&converter, &self.to_digit_vector(), digit_radix);
        Ok(Self::from_limbs(radix, limbs))
    }

    /// Re-express every limb (and the limb base) in another digit radix.
    /// The limb base and the value are unchanged.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `digit_radix < 2`.
    pub fn as_digit_radix(&self, digit_radix: u32) -> NumericResult<Self> {
        let converter = RadixConverter::new(digit_radix)?;
        let radix = converter.convert(&self.radix);
        let limbs = self.limbs.iter().map(|l| converter.convert(l)).collect();
        Ok(Self::from_limbs(radix, limbs))
    }

    /// Convert to another number kind.
    ///
    /// Integers convert to every kind: `Integer` is the identity and
    /// `Fraction` puts `self` over one.
    pub fn convert(&self, kind: NumberKind) -> NumericResult<Number> {
        match kind {
            NumberKind::Integer => Ok(Number::Integer(self.clone())),
            NumberKind::Fraction => Ok(Number::Fraction(Fraction::from_integer(self.clone()))),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Integer {
    /// Zero, decimal layout.
    fn default() -> Self {
        Self::from_u64(0)
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl fmt::Display for Integer {
    /// Decimal rendering of the value, whatever the layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = RadixConverter::new(DECIMAL_RADIX).map_err(|_| fmt::Error)?;
        write!(f, "{}", decimal.convert(&self.to_digit_vector()))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Integer<base={}, digit_radix={}>({}, limbs={:?})",
            self.radix,
            self.digit_radix(),
            self,
            self.limbs
        )
    }
}

// ============================================================================
// Serde representation (re-validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawInteger {
    radix: RadixDigitVector,
    limbs: Vec<RadixDigitVector>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInteger> for Integer {
    type Error = NumericError;

    fn try_from(raw: RawInteger) -> Result<Self, Self::Error> {
        Self::new(raw.radix, raw.limbs)
    }
}

#[cfg(feature = "serde")]
impl From<Integer> for RawInteger {
    fn from(i: Integer) -> Self {
        Self {
            radix: i.radix,
            limbs: i.limbs,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
