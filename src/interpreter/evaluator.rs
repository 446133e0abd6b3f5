/// Core evaluation logic.
///
/// Contains the tree walk, the depth guard, the node-kind allow-list, and
/// the public `evaluate` entry points.
pub mod core;

/// Unary operator evaluation.
///
/// Holds the unary operator table and the identity and negation functions.
pub mod unary;

/// Binary operator evaluation.
///
/// Holds the binary operator table and the arithmetic for addition,
/// subtraction, multiplication, true division, modulo and floor division.
pub mod binary;

/// Exponentiation.
///
/// Integer powers stay exact where possible; everything else is computed on
/// reals with explicit checks for zero bases, negative bases and overflow.
pub mod power;
