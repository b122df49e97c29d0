// ============================================================================
// Number Kinds
// Closed set of numeric kinds and the conversions between them
// ============================================================================

use super::fraction::Fraction;
use super::integer::Integer;
use crate::numeric::NumericResult;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target of a [`convert`](Number::convert) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberKind {
    Integer,
    Fraction,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => write!(f, "integer"),
            NumberKind::Fraction => write!(f, "fraction"),
        }
    }
}

/// Any value of the numeric hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Integer(Integer),
    Fraction(Fraction),
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Fraction(_) => NumberKind::Fraction,
        }
    }

    /// Convert to `kind`.
    ///
    /// # Errors
    /// Returns `UnsupportedConversion` if no exact conversion exists
    /// (a fraction whose denominator does not divide its numerator cannot
    /// become an integer).
    pub fn convert(&self, kind: NumberKind) -> NumericResult<Number> {
        match self {
            Number::Integer(i) => i.convert(kind),
            Number::Fraction(f) => f.convert(kind),
        }
    }

    /// Add two numbers. Integers stay integers; any fraction operand
    /// promotes both sides to fractions.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the layouts differ.
    pub fn add(&self, other: &Number) -> NumericResult<Number> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.add(b).map(Number::Integer),
            _ => self
                .to_fraction()
                .add(&other.to_fraction())
                .map(Number::Fraction),
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Fraction(_) => None,
        }
    }

    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            Number::Integer(_) => None,
            Number::Fraction(f) => Some(f),
        }
    }

    fn to_fraction(&self) -> Fraction {
        match self {
            Number::Integer(i) => Fraction::from_integer(i.clone()),
            Number::Fraction(f) => f.clone(),
        }
    }
}

impl From<Integer> for Number {
    fn from(i: Integer) -> Self {
        Number::Integer(i)
    }
}

impl From<Fraction> for Number {
    fn from(f: Fraction) -> Self {
        Number::Fraction(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Fraction(fr) => write!(f, "{}", fr),
        }
    }
}
