/// Numeric value representation.
///
/// Defines the `Number` type produced by evaluation: either an exact 64-bit
/// integer or a double precision real. Includes promotion between the two
/// and the canonical text rendering used by the calculator display.
pub mod number;

pub use number::Number;
