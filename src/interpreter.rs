/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree bottom-up, looks every operator up in an
/// explicit table, and performs checked arithmetic. It repeats the
/// allow-list checks of the parser so that a tree which bypassed validation
/// still cannot reach anything but arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, unary and binary operations.
/// - Rejects unsupported node kinds and operators.
/// - Reports division by zero, overflow and domain errors as values.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer reads raw text and produces positioned tokens for numbers,
/// names, strings, keywords and operators. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Parses numeric literal values and rejects malformed ones.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds and validates expression trees.
///
/// The parser processes the token stream with recursive descent, producing a
/// syntax tree, then validates that tree down to the arithmetic subset.
///
/// # Responsibilities
/// - Converts tokens into a [`crate::ast::Node`] tree with correct
///   precedence and associativity.
/// - Reports malformed input with positions.
/// - Rejects non-arithmetic constructs and bounds recursion depth.
pub mod parser;
/// The value module defines the numeric type produced by evaluation.
pub mod value;
