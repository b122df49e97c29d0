// ============================================================================
// Radix Tour Example
// ============================================================================

use radix_numeric::prelude::*;

fn main() -> Result<(), NumericError> {
    // RUST_LOG-style filtering is left to the subscriber defaults; trace
    // output shows every radix conversion and fraction reduction.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Radix Numeric Tour ===\n");

    // Digit vectors
    let a = RadixDigitVector::from_u64(999);
    let b = RadixDigitVector::from_u64(1);
    let sum = a.add(&b)?;
    println!("{} + {} = {} (digits lsb-first: {:?})", a, b, sum, sum.digits());

    let v = RadixDigitVector::from_u64(255);
    println!("{} in base 16: {}", v, v.as_radix(16)?);
    println!("{} in base 2:  {}", v, v.as_radix(2)?);

    // Integers with grouped limbs
    let config = IntegerConfig::decimal_grouped();
    let x = Integer::from_config(123_456_789, &config)?;
    let y = Integer::from_config(987_654_321, &config)?;
    println!("\n{} has {} limbs of base {}", x, x.limb_count(), x.radix());
    println!("{} * {} = {}", x, y, x.mul(&y)?);
    println!("{} as base-65536 limbs: {:?}", x, x.as_radix(65_536)?.limbs());

    // Fractions
    let half = Fraction::new(Integer::from_u64(1), Integer::from_u64(2))?;
    let third = Fraction::new(Integer::from_u64(1), Integer::from_u64(3))?;
    let sixth = Fraction::new(Integer::from_u64(1), Integer::from_u64(6))?;
    let total = half.add(&third)?.add(&sixth)?;
    println!("\n{} + {} + {} = {} = {}", half, third, sixth, total, total.reduce());

    // Kind conversion
    let n = Number::from(total.reduce());
    println!("{} as integer: {}", n, n.convert(NumberKind::Integer)?);

    match Number::from(half).convert(NumberKind::Integer) {
        Ok(v) => println!("unexpected: {}", v),
        Err(e) => println!("1/2 as integer: {}", e),
    }

    Ok(())
}
