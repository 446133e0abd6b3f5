use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

/// Signature shared by every entry of the unary operator table.
pub type UnaryFn = fn(Number, usize) -> EvalResult<Number>;

impl Evaluator {
    /// Looks up the function implementing a unary operator.
    ///
    /// Only `+` and `-` have entries; every other operator maps to `None`
    /// and is rejected by the caller. The match is exhaustive, so a new
    /// operator cannot be added without deciding its entry here.
    ///
    /// # Example
    /// ```
    /// use abacus::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert!(Evaluator::unary_operator_fn(UnaryOperator::Minus).is_some());
    /// assert!(Evaluator::unary_operator_fn(UnaryOperator::Not).is_none());
    /// ```
    #[must_use]
    pub fn unary_operator_fn(op: UnaryOperator) -> Option<UnaryFn> {
        let function: UnaryFn = match op {
            UnaryOperator::Plus => Self::identity,
            UnaryOperator::Minus => Self::negate,
            UnaryOperator::Not | UnaryOperator::Invert => return None,
        };
        Some(function)
    }

    /// Unary plus: returns the operand unchanged.
    ///
    /// # Errors
    /// Never fails; the signature matches the operator table.
    pub const fn identity(value: Number, _position: usize) -> EvalResult<Number> {
        Ok(value)
    }

    /// Unary minus: returns the additive inverse. Negating `i64::MIN` yields
    /// a real.
    ///
    /// # Errors
    /// Never fails; the signature matches the operator table.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::negate(Number::Integer(5), 0), Ok(Number::Integer(-5)));
    /// assert_eq!(Evaluator::negate(Number::Real(-0.5), 0), Ok(Number::Real(0.5)));
    /// assert_eq!(Evaluator::negate(Number::Integer(i64::MIN), 0),
    ///            Ok(Number::Real(9_223_372_036_854_775_808.0)));
    /// ```
    pub fn negate(value: Number, _position: usize) -> EvalResult<Number> {
        Ok(match value {
            Number::Integer(n) => n.checked_neg()
                                   .map_or_else(|| Number::Real(-value.as_real()), Number::Integer),
            Number::Real(r) => Number::Real(-r),
        })
    }
}
