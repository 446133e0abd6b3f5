/// Parsing errors.
///
/// Defines all error types that can occur during lexing, parsing and
/// structural validation of source text. These make up the syntax-error kind:
/// nothing has been evaluated when one of them is returned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree, such
/// as division by zero, overflow, or an allow-list violation caught by the
/// evaluator's own checks.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Text shown by the calculator when evaluation divides by zero.
pub const DIVISION_BY_ZERO_TEXT: &str = "Division by zero";
/// Text shown by the calculator for every other failure.
pub const GENERIC_ERROR_TEXT: &str = "Error";

/// Any failure of the parse-then-evaluate pipeline.
///
/// This is the single error type returned by [`crate::calculate`]; callers
/// match on the variant instead of inspecting messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The source text was rejected before evaluation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree was rejected or failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns `true` if the failure was a division (or modulo, or floor
    /// division) by zero.
    ///
    /// # Example
    /// ```
    /// use abacus::calculate;
    ///
    /// assert!(calculate("5 // 0").unwrap_err().is_division_by_zero());
    /// assert!(!calculate("5 +").unwrap_err().is_division_by_zero());
    /// ```
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::DivisionByZero { .. }))
    }

    /// Returns the user-visible text for this failure.
    #[must_use]
    pub const fn display_text(&self) -> &'static str {
        if self.is_division_by_zero() {
            DIVISION_BY_ZERO_TEXT
        } else {
            GENERIC_ERROR_TEXT
        }
    }
}
