/// Core parsing entry points.
///
/// Contains the public `parse` functions, the result alias, and the nesting
/// budget threaded through every recursive rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from `or` down to
/// multiplication, and the token-to-operator mapping.
pub mod binary;

/// Unary, power and primary parsing.
///
/// Handles prefix operators, right-associative exponentiation, postfix calls
/// and attribute access, literals, names and parenthesized groups.
pub mod unary;

/// Structural validation.
///
/// Lowers a syntax tree into a validated arithmetic expression, rejecting
/// every construct outside the allow-list.
pub mod validate;
