/// Default bound on nested grouping, prefix and power recursion in the
/// parser.
pub const DEFAULT_MAX_NESTING: usize = 64;
/// Default bound on tree depth during validation and evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Resource limits shared by the parser and the evaluator.
///
/// Every recursive walk in the crate checks one of these before descending,
/// so hostile input fails with an error instead of exhausting the stack.
///
/// # Example
/// ```
/// use abacus::{calculate_with, config::Limits, error::ParseError, CalcError};
///
/// let limits = Limits { max_nesting: 2, ..Limits::default() };
/// assert!(calculate_with("((1))", &limits).is_ok());
/// assert!(matches!(calculate_with("(((1)))", &limits),
///                  Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 2, .. }))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of parentheses, prefix operators and powers.
    pub max_nesting: usize,
    /// Maximum depth of a tree accepted by validation or evaluation.
    pub max_depth:   usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_nesting: DEFAULT_MAX_NESTING,
               max_depth:   DEFAULT_MAX_DEPTH, }
    }
}
