// ============================================================================
// Number Module
// Layered numeric hierarchy: Integer on digit vectors, Fraction on Integer
// ============================================================================

mod config;
mod fraction;
mod integer;
mod kind;

pub use config::IntegerConfig;
pub use fraction::Fraction;
pub use integer::Integer;
pub use kind::{Number, NumberKind};
