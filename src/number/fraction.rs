// ============================================================================
// Fraction
// Exact ratios of two integers
// ============================================================================

use super::integer::Integer;
use super::kind::{Number, NumberKind};
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ratio of two integers with a nonzero denominator.
///
/// Arithmetic never reduces implicitly; call [`reduce`](Self::reduce) to
/// bring a fraction to lowest terms.
///
/// # Example
/// ```
/// use radix_numeric::number::{Fraction, Integer};
///
/// let half = Fraction::new(Integer::from_u64(1), Integer::from_u64(2)).unwrap();
/// let third = Fraction::new(Integer::from_u64(1), Integer::from_u64(3)).unwrap();
/// let sum = half.add(&third).unwrap();
/// assert_eq!(sum.to_string(), "5/6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFraction", into = "RawFraction"))]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Create `numerator / denominator`.
    ///
    /// # Errors
    /// - `RadixMismatch` if the two integers use different layouts
    /// - `DivisionByZero` if the denominator is zero
    pub fn new(numerator: Integer, denominator: Integer) -> NumericResult<Self> {
        numerator.ensure_compatible(&denominator)?;
        if denominator.is_zero() {
            tracing::debug!(numerator = %numerator, "rejected fraction with zero denominator");
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// `integer / 1`, keeping the integer's layout.
    pub fn from_integer(integer: Integer) -> Self {
        let denominator = integer.one_like();
        Self {
            numerator: integer,
            denominator,
        }
    }

    #[inline]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// True when the denominator divides the numerator.
    pub fn is_integral(&self) -> bool {
        self.denominator.is_one() || self.numerator.div_rem_parts(&self.denominator).1.is_zero()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// `a/b + c/d = (a·d + c·b) / (b·d)`, not reduced.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        let left = self.numerator.mul(&other.denominator)?;
        let right = other.numerator.mul(&self.denominator)?;
        let numerator = left.add(&right)?;
        let denominator = self.denominator.mul(&other.denominator)?;
        Self::new(numerator, denominator)
    }

    /// `a/b · c/d = (a·c) / (b·d)`, not reduced.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn mul(&self, other: &Self) -> NumericResult<Self> {
        let numerator = self.numerator.mul(&other.numerator)?;
        let denominator = self.denominator.mul(&other.denominator)?;
        Self::new(numerator, denominator)
    }

    /// Lowest terms, dividing both parts by their greatest common divisor.
    /// Zero reduces to `0/1`.
    pub fn reduce(&self) -> Self {
        let divisor = self.numerator.gcd_parts(&self.denominator);
        if divisor.is_one() {
            return self.clone();
        }

        tracing::trace!(divisor = %divisor, "reducing fraction");

        let (numerator, _) = self.numerator.div_rem_parts(&divisor);
        let (denominator, _) = self.denominator.div_rem_parts(&divisor);
        Self {
            numerator,
            denominator,
        }
    }

    /// Compare numeric values by cross-multiplication.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn compare(&self, other: &Self) -> NumericResult<Ordering> {
        let left = self.numerator.mul(&other.denominator)?;
        let right = other.numerator.mul(&self.denominator)?;
        left.compare(&right)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to another number kind.
    ///
    /// # Errors
    /// Returns `UnsupportedConversion` when converting to `Integer` and the
    /// denominator does not divide the numerator.
    pub fn convert(&self, kind: NumberKind) -> NumericResult<Number> {
        match kind {
            NumberKind::Fraction => Ok(Number::Fraction(self.clone())),
            NumberKind::Integer => {
                let (quotient, remainder) = self.numerator.div_rem_parts(&self.denominator);
                if remainder.is_zero() {
                    Ok(Number::Integer(quotient))
                } else {
                    Err(NumericError::UnsupportedConversion)
                }
            },
        }
    }
}

impl From<Integer> for Fraction {
    fn from(integer: Integer) -> Self {
        Self::from_integer(integer)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Serde representation (re-validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawFraction {
    numerator: Integer,
    denominator: Integer,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = NumericError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Self::new(raw.numerator, raw.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Fraction> for RawFraction {
    fn from(f: Fraction) -> Self {
        Self {
            numerator: f.numerator,
            denominator: f.denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::IntegerConfig;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(Integer::from_u64(n), Integer::from_u64(d)).unwrap()
    }

    #[test]
    fn test_half_plus_third() {
        let sum = frac(1, 2).add(&frac(1, 3)).unwrap();
        assert_eq!(sum.numerator(), &Integer::from_u64(5));
        assert_eq!(sum.denominator(), &Integer::from_u64(6));
    }

    #[test]
    fn test_add_is_not_reduced() {
        let sum = frac(1, 4).add(&frac(1, 4)).unwrap();
        assert_eq!(sum.numerator(), &Integer::from_u64(8));
        assert_eq!(sum.denominator(), &Integer::from_u64(16));
        assert_eq!(sum.reduce(), frac(1, 2));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Fraction::new(Integer::from_u64(1), Integer::from_u64(0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_radix_mismatch() {
        let grouped = Integer::from_config(3, &IntegerConfig::decimal_grouped()).unwrap();
        assert_eq!(
            Fraction::new(Integer::from_u64(1), grouped.clone()),
            Err(NumericError::RadixMismatch)
        );

        let other = Fraction::from_integer(grouped);
        assert_eq!(frac(1, 2).add(&other), Err(NumericError::RadixMismatch));
    }

    #[test]
    fn test_from_integer() {
        let f = Fraction::from(Integer::from_u64(42));
        assert_eq!(f.numerator(), &Integer::from_u64(42));
        assert!(f.denominator().is_one());
        assert!(f.is_integral());
    }

    #[test]
    fn test_mul() {
        let product = frac(2, 3).mul(&frac(3, 4)).unwrap();
        assert_eq!(product, frac(6, 12));
        assert_eq!(product.reduce(), frac(1, 2));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(frac(48, 18).reduce(), frac(8, 3));
        assert_eq!(frac(0, 5).reduce(), frac(0, 1));
        assert_eq!(frac(7, 9).reduce(), frac(7, 9));
    }

    #[test]
    fn test_compare() {
        assert_eq!(frac(1, 3).compare(&frac(1, 2)).unwrap(), Ordering::Less);
        assert_eq!(frac(2, 4).compare(&frac(1, 2)).unwrap(), Ordering::Equal);
        assert_eq!(frac(5, 3).compare(&frac(3, 2)).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            frac(6, 3).convert(NumberKind::Integer).unwrap(),
            Number::Integer(Integer::from_u64(2))
        );
        assert_eq!(
            frac(1, 2).convert(NumberKind::Integer),
            Err(NumericError::UnsupportedConversion)
        );
        assert_eq!(
            frac(1, 2).convert(NumberKind::Fraction).unwrap(),
            Number::Fraction(frac(1, 2))
        );
        assert!(!frac(1, 2).is_integral());
    }

    #[test]
    fn test_grouped_layout() {
        let config = IntegerConfig::decimal_grouped();
        let n = |v| Integer::from_config(v, &config).unwrap();
        let a = Fraction::new(n(999_999), n(1_000)).unwrap();
        let b = Fraction::new(n(1), n(1_000)).unwrap();
        let sum = a.add(&b).unwrap().reduce();
        assert_eq!(sum.numerator().to_u64().unwrap(), 1_000);
        assert!(sum.denominator().is_one());
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(5, 6).to_string(), "5/6");
    }

    #[test]
    fn test_operands_unchanged() {
        let a = frac(1, 2);
        let b = frac(1, 3);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.add(&b).unwrap();
        let _ = a.mul(&b).unwrap();
        let _ = a.compare(&b).unwrap();
        let _ = a.reduce();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_zero_denominator() {
        let json = serde_json::to_string(&frac(1, 2)).unwrap();
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frac(1, 2));

        let zero = serde_json::to_string(&Integer::from_u64(0)).unwrap();
        let one = serde_json::to_string(&Integer::from_u64(1)).unwrap();
        let bad = format!(r#"{{"numerator":{},"denominator":{}}}"#, one, zero);
        assert!(serde_json::from_str::<Fraction>(&bad).is_err());
    }
}
