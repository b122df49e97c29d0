// ============================================================================
// Radix Digit Vector
// Arbitrary-length digit sequences with carry-propagating arithmetic
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single digit. Always strictly less than the owning vector's radix.
pub type Digit = u32;

/// Inline capacity covers values up to 10^8 in decimal without allocating.
type DigitBuf = SmallVec<[Digit; 8]>;

/// The default radix used when decomposing native numbers.
pub const DECIMAL_RADIX: u32 = 10;

/// Smallest radix a positional system can use.
pub const MIN_RADIX: u32 = 2;

/// Validate a radix value.
#[inline]
pub(crate) fn check_radix(radix: u32) -> NumericResult<()> {
    if radix < MIN_RADIX {
        Err(NumericError::InvalidRadix)
    } else {
        Ok(())
    }
}

/// Ordered digits in a fixed radix, least-significant digit first.
///
/// Values are always canonical: zero is exactly `[0]` and nonzero values
/// carry no most-significant zero digits. There is no mutating API; every
/// operation borrows its operands and returns a freshly built vector.
///
/// # Example
/// ```
/// use radix_numeric::radix::RadixDigitVector;
///
/// let a = RadixDigitVector::from_u64(999);
/// let b = RadixDigitVector::from_u64(1);
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.digits(), &[0, 0, 0, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawDigitVector", into = "RawDigitVector")
)]
pub struct RadixDigitVector {
    radix: u32,
    digits: DigitBuf,
}

impl RadixDigitVector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from an explicit digit list (least-significant first).
    ///
    /// # Errors
    /// - `InvalidRadix` if `radix < 2`
    /// - `InvalidInput` if any digit is not below `radix`
    pub fn from_digits<I>(digits: I, radix: u32) -> NumericResult<Self>
    where
        I: IntoIterator<Item = Digit>,
    {
        check_radix(radix)?;
        let digits: DigitBuf = digits.into_iter().collect();
        if digits.iter().any(|&d| d >= radix) {
            tracing::debug!(radix, "rejected digit list with out-of-range digit");
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::from_buf(digits, radix))
    }

    /// Trim most-significant zeros and restore `[0]` for an empty buffer.
    ///
    /// Callers guarantee every digit is below `radix`.
    pub(crate) fn from_buf(mut digits: DigitBuf, radix: u32) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        debug_assert!(digits.iter().all(|&d| d < radix), "digit out of range");
        Self { radix, digits }
    }

    /// The zero vector in `radix`.
    pub fn zero(radix: u32) -> NumericResult<Self> {
        check_radix(radix)?;
        Ok(Self::from_buf(smallvec![0], radix))
    }

    /// The unit vector in `radix`.
    pub fn one(radix: u32) -> NumericResult<Self> {
        check_radix(radix)?;
        Ok(Self::from_buf(smallvec![1], radix))
    }

    /// Zero in the same radix as `self`.
    #[inline]
    pub fn zero_like(&self) -> Self {
        Self::from_buf(smallvec![0], self.radix)
    }

    /// One in the same radix as `self`.
    #[inline]
    pub fn one_like(&self) -> Self {
        Self::from_buf(smallvec![1], self.radix)
    }

    /// Decompose a native number into decimal digits.
    pub fn from_u64(n: u64) -> Self {
        Self::decompose(u128::from(n), DECIMAL_RADIX)
    }

    /// Decompose a native number into decimal digits.
    pub fn from_u128(n: u128) -> Self {
        Self::decompose(n, DECIMAL_RADIX)
    }

    /// Decompose a native number into digits of `radix`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `radix < 2`.
    pub fn from_u64_in_radix(n: u64, radix: u32) -> NumericResult<Self> {
        Self::from_u128_in_radix(u128::from(n), radix)
    }

    /// Decompose a native number into digits of `radix`.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `radix < 2`.
    pub fn from_u128_in_radix(n: u128, radix: u32) -> NumericResult<Self> {
        check_radix(radix)?;
        Ok(Self::decompose(n, radix))
    }

    pub(crate) fn decompose(mut n: u128, radix: u32) -> Self {
        let r = u128::from(radix);
        let mut digits = DigitBuf::new();
        loop {
            digits.push((n % r) as Digit);
            n /= r;
            if n == 0 {
                break;
            }
        }
        Self::from_buf(digits, radix)
    }

    /// Decompose a signed native number into decimal digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `n` is negative.
    pub fn from_i64(n: i64) -> NumericResult<Self> {
        u64::try_from(n)
            .map(Self::from_u64)
            .map_err(|_| NumericError::InvalidInput)
    }

    /// Decompose a floating-point number holding an integral value.
    ///
    /// Any finite integral value is decomposed exactly, including values far
    /// beyond `u128::MAX`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities, negative values and values
    /// with a fractional part.
    pub fn from_f64(x: f64) -> NumericResult<Self> {
        if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
            return Err(NumericError::InvalidInput);
        }
        if x == 0.0 {
            return Ok(Self::from_u64(0));
        }

        // x = mantissa * 2^shift with an implicit leading bit; subnormals
        // never reach here because they are all fractional.
        let bits = x.to_bits();
        let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        let shift = biased_exponent - 1075;

        if shift <= 0 {
            return Ok(Self::from_u64(mantissa >> shift.unsigned_abs()));
        }

        let mut value = Self::from_u64(mantissa);
        let mut remaining = shift.unsigned_abs();
        while remaining > 0 {
            let step = remaining.min(31);
            value = value.mul_small(1 << step);
            remaining -= step;
        }
        Ok(value)
    }

    /// Decompose an integral `rust_decimal::Decimal` into decimal digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `d` is negative or has a fractional part.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        if (d.is_sign_negative() && !d.is_zero()) || !d.fract().is_zero() {
            return Err(NumericError::InvalidInput);
        }
        let truncated = d.trunc();
        let mut n = truncated.mantissa().unsigned_abs();
        for _ in 0..truncated.scale() {
            n /= 10;
        }
        Ok(Self::from_u128(n))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The radix every digit is expressed in.
    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Digits, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits in the canonical form (at least one).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.as_slice() == [0]
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.as_slice() == [1]
    }

    /// Evaluate to a native integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds `u128::MAX`.
    pub fn to_u128(&self) -> NumericResult<u128> {
        let r = u128::from(self.radix);
        self.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(r)
                .and_then(|v| v.checked_add(u128::from(d)))
                .ok_or(NumericError::Overflow)
        })
    }

    /// Evaluate to a native integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds `u64::MAX`.
    pub fn to_u64(&self) -> NumericResult<u64> {
        self.to_u128()
            .and_then(|v| u64::try_from(v).map_err(|_| NumericError::Overflow))
    }

    #[inline]
    pub(crate) fn ensure_same_radix(&self, other: &Self) -> NumericResult<()> {
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
    /// Returns `RadixMismatch` if the radices differ.
    pub fn compare(&self, other: &Self) -> NumericResult<Ordering> {
        self.ensure_same_radix(other)?;
        Ok(self.compare_digits(other))
    }

    /// Canonical vectors of equal radix order by length, then from the top.
    pub(crate) fn compare_digits(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add two vectors of the same radix.
    ///
    /// Digits are summed pairwise, the longer tail is copied, and a single
    /// forward pass resolves carries. A carry into position `i + 1` is
    /// examined when the pass reaches `i + 1`, so ripples such as
    /// `999 + 1` cascade all the way up.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the radices differ.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_same_radix(other)?;
        Ok(self.add_digits(other))
    }

    pub(crate) fn add_digits(&self, other: &Self) -> Self {
        let (long, short) = if self.digits.len() >= other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut sums: Vec<u64> = long
            .digits
            .iter()
            .enumerate()
            .map(|(i, &d)| u64::from(d) + short.digits.get(i).map_or(0, |&s| u64::from(s)))
            .collect();

        let radix = u64::from(self.radix);
        let mut i = 0;
        while i < sums.len() {
            if sums[i] >= radix {
                sums[i] -= radix;
                if i + 1 == sums.len() {
                    sums.push(0);
                }
                sums[i + 1] += 1;
            }
            i += 1;
        }

        debug_assert!(sums.iter().all(|&d| d < radix), "unresolved carry");
        let digits = sums.into_iter().map(|d| d as Digit).collect();
        Self::from_buf(digits, self.radix)
    }

    /// Subtract `other` from `self`.
    ///
    /// # Errors
    /// - `RadixMismatch` if the radices differ
    /// - `Underflow` if `other > self`
    pub fn checked_sub(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_same_radix(other)?;
        if self.compare_digits(other) == Ordering::Less {
            return Err(NumericError::Underflow);
        }
        Ok(self.sub_digits(other))
    }

    /// Callers guarantee `self >= other`.
    pub(crate) fn sub_digits(&self, other: &Self) -> Self {
        let radix = u64::from(self.radix);
        let mut borrow = 0u64;
        let mut digits = DigitBuf::with_capacity(self.digits.len());
        for (i, &d) in self.digits.iter().enumerate() {
            let d = u64::from(d);
            let take = other.digits.get(i).map_or(0, |&s| u64::from(s)) + borrow;
            if d >= take {
                digits.push((d - take) as Digit);
                borrow = 0;
            } else {
                digits.push((d + radix - take) as Digit);
                borrow = 1;
            }
        }
        debug_assert_eq!(borrow, 0, "subtraction left a borrow");
        Self::from_buf(digits, self.radix)
    }

    /// Schoolbook multiplication.
    ///
    /// Each step computes `out + a * b + carry`, which stays below
    /// `radix^2` and therefore fits in a `u64` for every `u32` radix.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the radices differ.
    pub fn mul(&self, other: &Self) -> NumericResult<Self> {
        self.ensure_same_radix(other)?;
        Ok(self.mul_digits(other))
    }

    pub(crate) fn mul_digits(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return self.zero_like();
        }

        let radix = u64::from(self.radix);
        let width = other.digits.len();
        let mut out = vec![0u64; self.digits.len() + width];
        for (i, &a) in self.digits.iter().enumerate() {
            let a = u64::from(a);
            let mut carry = 0u64;
            for (j, &b) in other.digits.iter().enumerate() {
                let t = out[i + j] + a * u64::from(b) + carry;
                out[i + j] = t % radix;
                carry = t / radix;
            }
            out[i + width] += carry;
        }

        let digits = out.into_iter().map(|d| d as Digit).collect();
        Self::from_buf(digits, self.radix)
    }

    /// Multiply by a native scalar.
    pub fn mul_small(&self, k: u32) -> Self {
        if k == 0 || self.is_zero() {
            return self.zero_like();
        }
        let radix = u64::from(self.radix);
        let k = u64::from(k);
        let mut carry = 0u64;
        let mut digits = DigitBuf::with_capacity(self.digits.len() + 1);
        for &d in self.digits.iter() {
            let t = u64::from(d) * k + carry;
            digits.push((t % radix) as Digit);
            carry = t / radix;
        }
        while carry > 0 {
            digits.push((carry % radix) as Digit);
            carry /= radix;
        }
        Self::from_buf(digits, self.radix)
    }

    /// Long division by a native divisor, from the most significant digit.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor == 0`.
    pub fn div_rem_small(&self, divisor: u32) -> NumericResult<(Self, u32)> {
        NonZeroU32::new(divisor)
            .map(|divisor| self.div_rem_nonzero(divisor))
            .ok_or(NumericError::DivisionByZero)
    }

    pub(crate) fn div_rem_nonzero(&self, divisor: NonZeroU32) -> (Self, u32) {
        let radix = u64::from(self.radix);
        let divisor = u64::from(divisor.get());
        let mut remainder = 0u64;
        let mut quotient: DigitBuf = smallvec![0; self.digits.len()];
        for (i, &d) in self.digits.iter().enumerate().rev() {
            let current = remainder * radix + u64::from(d);
            quotient[i] = (current / divisor) as Digit;
            remainder = current % divisor;
        }
        (Self::from_buf(quotient, self.radix), remainder as u32)
    }

    /// Schoolbook long division.
    ///
    /// Each quotient digit is the largest `q` with `other * q <= remainder`,
    /// found by binary search over `0..radix`.
    ///
    /// # Errors
    /// - `RadixMismatch` if the radices differ
    /// - `DivisionByZero` if `other` is zero
    pub fn div_rem(&self, other: &Self) -> NumericResult<(Self, Self)> {
        self.ensure_same_radix(other)?;
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.div_rem_digits(other))
    }

    /// Callers guarantee `other` is nonzero and shares the radix.
    pub(crate) fn div_rem_digits(&self, other: &Self) -> (Self, Self) {
        if self.compare_digits(other) == Ordering::Less {
            return (self.zero_like(), self.clone());
        }
        if let (1, Some(divisor)) = (other.digits.len(), NonZeroU32::new(other.digits[0])) {
            let (quotient, remainder) = self.div_rem_nonzero(divisor);
            return (quotient, Self::from_buf(smallvec![remainder], self.radix));
        }

        let mut quotient: DigitBuf = smallvec![0; self.digits.len()];
        let mut remainder = self.zero_like();
        for (i, &d) in self.digits.iter().enumerate().rev() {
            remainder = remainder.shifted_in(d);

            let (mut lo, mut hi) = (0u32, self.radix - 1);
            while lo < hi {
                let mid = lo + (hi - lo).div_ceil(2);
                if other.mul_small(mid).compare_digits(&remainder) == Ordering::Greater {
                    hi = mid - 1;
                } else {
                    lo = mid;
                }
            }

            if lo > 0 {
                remainder = remainder.sub_digits(&other.mul_small(lo));
            }
            quotient[i] = lo;
        }

        (Self::from_buf(quotient, self.radix), remainder)
    }

    /// `self * radix + digit`.
    fn shifted_in(&self, digit: Digit) -> Self {
        let mut digits = DigitBuf::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        if !self.is_zero() {
            digits.extend_from_slice(&self.digits);
        }
        Self::from_buf(digits, self.radix)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for RadixDigitVector {
    /// Radices up to 36 print as plain digits (`0-9a-z`), most-significant
    /// first. Larger radices print as `[d_n:...:d_0]_radix`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radix <= 36 {
            for &d in self.digits.iter().rev() {
                let c = char::from_digit(d, self.radix).ok_or(fmt::Error)?;
                write!(f, "{}", c)?;
            }
            Ok(())
        } else {
            write!(f, "[")?;
            for (i, d) in self.digits.iter().rev().enumerate() {
                if i > 0 {
                    write!(f, ":")?;
                }
                write!(f, "{}", d)?;
            }
            write!(f, "]_{}", self.radix)
        }
    }
}

impl fmt::Debug for RadixDigitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RadixDigitVector<{}>({}, digits={:?})",
            self.radix,
            self,
            self.digits.as_slice()
        )
    }
}

// ============================================================================
// Serde representation (re-validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawDigitVector {
    radix: u32,
    digits: Vec<Digit>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDigitVector> for RadixDigitVector {
    type Error = NumericError;

    fn try_from(raw: RawDigitVector) -> Result<Self, Self::Error> {
        Self::from_digits(raw.digits, raw.radix)
    }
}

#[cfg(feature = "serde")]
impl From<RadixDigitVector> for RawDigitVector {
    fn from(v: RadixDigitVector) -> Self {
        Self {
            radix: v.radix,
            digits: v.digits.into_vec(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type Rdv = RadixDigitVector;

    fn dec(n: u64) -> Rdv {
        Rdv::from_u64(n)
    }

    #[test]
    fn test_from_u64_least_significant_first() {
        assert_eq!(dec(1024).digits(), &[4, 2, 0, 1]);
        assert_eq!(dec(0).digits(), &[0]);
        assert_eq!(dec(7).radix(), 10);
    }

    #[test]
    fn test_from_digits_canonicalizes() {
        let v = Rdv::from_digits([3, 0, 0, 0], 10).unwrap();
        assert_eq!(v.digits(), &[3]);

        let zero = Rdv::from_digits([0, 0, 0], 10).unwrap();
        assert_eq!(zero.digits(), &[0]);

        let empty = Rdv::from_digits([], 16).unwrap();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_from_digits_invalid() {
        assert_eq!(
            Rdv::from_digits([1, 10], 10),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(Rdv::from_digits([0], 1), Err(NumericError::InvalidRadix));
        assert_eq!(Rdv::zero(0), Err(NumericError::InvalidRadix));
    }

    #[test]
    fn test_from_i64() {
        assert_eq!(Rdv::from_i64(42).unwrap(), dec(42));
        assert_eq!(Rdv::from_i64(-1), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Rdv::from_f64(255.0).unwrap(), dec(255));
        assert_eq!(Rdv::from_f64(0.0).unwrap(), dec(0));
        assert_eq!(Rdv::from_f64(1e20).unwrap(), Rdv::from_u128(100_000_000_000_000_000_000));
        assert_eq!(
            Rdv::from_f64(2f64.powi(100)).unwrap(),
            Rdv::from_u128(1u128 << 100)
        );

        assert_eq!(Rdv::from_f64(2.5), Err(NumericError::InvalidInput));
        assert_eq!(Rdv::from_f64(-3.0), Err(NumericError::InvalidInput));
        assert_eq!(Rdv::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(Rdv::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64_beyond_u128() {
        // 2^200 has 61 decimal digits
        let v = Rdv::from_f64(2f64.powi(200)).unwrap();
        assert_eq!(v.digit_count(), 61);
        assert_eq!(v.to_u128(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(Rdv::from_decimal(Decimal::new(12300, 2)).unwrap(), dec(123));
        assert_eq!(Rdv::from_decimal(Decimal::ZERO).unwrap(), dec(0));
        assert_eq!(
            Rdv::from_decimal(Decimal::new(12345, 2)),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            Rdv::from_decimal(Decimal::new(-5, 0)),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_add_three_position_ripple() {
        let sum = dec(999).add(&dec(1)).unwrap();
        assert_eq!(sum.digits(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_add_cascading_carry() {
        // Pairwise sums 10, 9, 1: the first carry pushes the 9 to 10,
        // which has to carry again.
        let a = Rdv::from_digits([5, 4, 0], 10).unwrap();
        let b = Rdv::from_digits([5, 5, 1], 10).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.to_u64().unwrap(), 45 + 155);
        assert_eq!(sum.digits(), &[0, 0, 2]);
    }

    #[test]
    fn test_add_longer_tail_copied() {
        let sum = dec(123_456).add(&dec(44)).unwrap();
        assert_eq!(sum, dec(123_500));
    }

    #[test]
    fn test_add_identity_and_commutativity() {
        let a = dec(98_765);
        let zero = a.zero_like();
        assert_eq!(a.add(&zero).unwrap(), a);
        assert_eq!(dec(17).add(&dec(25)).unwrap(), dec(25).add(&dec(17)).unwrap());
    }

    #[test]
    fn test_add_binary() {
        let a = Rdv::from_u64_in_radix(0b1011, 2).unwrap();
        let b = Rdv::from_u64_in_radix(0b0101, 2).unwrap();
        assert_eq!(a.add(&b).unwrap().digits(), &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_add_radix_mismatch() {
        let a = dec(10);
        let b = Rdv::from_u64_in_radix(10, 16).unwrap();
        assert_eq!(a.add(&b), Err(NumericError::RadixMismatch));
    }

    #[test]
    fn test_add_large_radix() {
        let radix = u32::MAX;
        let a = Rdv::from_digits([radix - 1, radix - 1], radix).unwrap();
        let sum = a.add(&a.one_like()).unwrap();
        assert_eq!(sum.digits(), &[0, 0, 1]);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(dec(1000).checked_sub(&dec(1)).unwrap(), dec(999));
        assert_eq!(dec(42).checked_sub(&dec(42)).unwrap(), dec(0));
        assert_eq!(dec(1).checked_sub(&dec(2)), Err(NumericError::Underflow));
    }

    #[test]
    fn test_mul() {
        assert_eq!(dec(12).mul(&dec(34)).unwrap(), dec(408));
        assert_eq!(dec(999).mul(&dec(999)).unwrap(), dec(998_001));
        assert_eq!(dec(0).mul(&dec(12_345)).unwrap(), dec(0));
        assert_eq!(
            Rdv::from_u64(u64::MAX).mul(&Rdv::from_u64(u64::MAX)).unwrap(),
            Rdv::from_u128(u128::from(u64::MAX) * u128::from(u64::MAX))
        );
    }

    #[test]
    fn test_mul_small() {
        assert_eq!(dec(125).mul_small(8), dec(1000));
        assert_eq!(dec(125).mul_small(0), dec(0));
        assert_eq!(dec(1).mul_small(u32::MAX), Rdv::from_u64(u64::from(u32::MAX)));
    }

    #[test]
    fn test_div_rem_small() {
        let (q, r) = dec(1000).div_rem_small(7).unwrap();
        assert_eq!(q, dec(142));
        assert_eq!(r, 6);
        assert_eq!(dec(5).div_rem_small(0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = dec(123_456_789).div_rem(&dec(1_234)).unwrap();
        assert_eq!(q, dec(123_456_789 / 1_234));
        assert_eq!(r, dec(123_456_789 % 1_234));

        let (q, r) = dec(12).div_rem(&dec(345)).unwrap();
        assert_eq!(q, dec(0));
        assert_eq!(r, dec(12));

        assert_eq!(dec(5).div_rem(&dec(0)), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_div_rem_hex() {
        let a = Rdv::from_u64_in_radix(0xdead_beef, 16).unwrap();
        let b = Rdv::from_u64_in_radix(0xbeef, 16).unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_u64().unwrap(), 0xdead_beef / 0xbeef);
        assert_eq!(r.to_u64().unwrap(), 0xdead_beef % 0xbeef);
    }

    #[test]
    fn test_compare() {
        assert_eq!(dec(100).compare(&dec(99)).unwrap(), Ordering::Greater);
        assert_eq!(dec(99).compare(&dec(100)).unwrap(), Ordering::Less);
        assert_eq!(dec(5).compare(&dec(5)).unwrap(), Ordering::Equal);
        assert_eq!(
            dec(5).compare(&Rdv::from_u64_in_radix(5, 8).unwrap()),
            Err(NumericError::RadixMismatch)
        );
    }

    #[test]
    fn test_to_u64_overflow() {
        let big = Rdv::from_u128(u128::from(u64::MAX) + 1);
        assert_eq!(big.to_u64(), Err(NumericError::Overflow));
        assert_eq!(big.to_u128().unwrap(), u128::from(u64::MAX) + 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(dec(1024).to_string(), "1024");
        assert_eq!(Rdv::from_u64_in_radix(255, 16).unwrap().to_string(), "ff");
        assert_eq!(Rdv::from_u64_in_radix(5, 2).unwrap().to_string(), "101");
        assert_eq!(
            Rdv::from_u64_in_radix(1_000_001, 1000).unwrap().to_string(),
            "[1:0:1]_1000"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", dec(12)),
            "RadixDigitVector<10>(12, digits=[2, 1])"
        );
    }

    #[test]
    fn test_operands_unchanged() {
        let a = dec(999);
        let b = dec(1);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.add(&b).unwrap();
        let _ = a.mul(&b).unwrap();
        let _ = a.checked_sub(&b).unwrap();
        let _ = a.div_rem(&b).unwrap();
        let _ = a.mul_small(3);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_quickcheck_add_matches_native() {
        fn prop(a: u64, b: u64) -> bool {
            let sum = Rdv::from_u64(a).add(&Rdv::from_u64(b)).unwrap();
            sum.to_u128().unwrap() == u128::from(a) + u128::from(b)
        }
        quickcheck::quickcheck(prop as fn(u64, u64) -> bool);
    }

    #[test]
    fn test_quickcheck_add_commutative() {
        fn prop(a: u64, b: u64) -> bool {
            let (a, b) = (Rdv::from_u64(a), Rdv::from_u64(b));
            a.add(&b).unwrap() == b.add(&a).unwrap()
        }
        quickcheck::quickcheck(prop as fn(u64, u64) -> bool);
    }

    #[test]
    fn test_quickcheck_div_rem_matches_native() {
        fn prop(a: u64, b: u64) -> bool {
            if b == 0 {
                return true;
            }
            let (q, r) = Rdv::from_u64(a).div_rem(&Rdv::from_u64(b)).unwrap();
            q.to_u64().unwrap() == a / b && r.to_u64().unwrap() == a % b
        }
        quickcheck::quickcheck(prop as fn(u64, u64) -> bool);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_validation() {
        let v = Rdv::from_u64_in_radix(255, 16).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"radix":16,"digits":[15,15]}"#);
        let back: Rdv = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let bad: Result<Rdv, _> = serde_json::from_str(r#"{"radix":10,"digits":[12]}"#);
        assert!(bad.is_err());
    }
}
