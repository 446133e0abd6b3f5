use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
    util::num::{div_mod_f64, floor_div_i64, mod_i64},
};

/// Signature shared by every entry of the binary operator table.
pub type BinaryFn = fn(Number, Number, usize) -> EvalResult<Number>;

impl Evaluator {
    /// Looks up the function implementing a binary operator.
    ///
    /// The seven arithmetic operators have entries; comparisons, logical,
    /// bitwise and matrix operators map to `None` and are rejected by the
    /// caller. The match is exhaustive, so a new operator cannot be added
    /// without deciding its entry here.
    ///
    /// # Example
    /// ```
    /// use abacus::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert!(Evaluator::binary_operator_fn(BinaryOperator::FloorDiv).is_some());
    /// assert!(Evaluator::binary_operator_fn(BinaryOperator::LeftShift).is_none());
    /// ```
    #[must_use]
    pub fn binary_operator_fn(op: BinaryOperator) -> Option<BinaryFn> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual,
            LeftShift, Less, LessEqual, MatMul, Mod, Mul, NotEqual, Or, Pow, RightShift, Sub,
        };

        let function: BinaryFn = match op {
            Add => Self::add,
            Sub => Self::sub,
            Mul => Self::mul,
            Div => Self::true_div,
            Mod => Self::modulo,
            Pow => Self::pow,
            FloorDiv => Self::floor_div,
            MatMul | BitAnd | BitOr | BitXor | LeftShift | RightShift | Less | LessEqual
            | Greater | GreaterEqual | Equal | NotEqual | And | Or => return None,
        };
        Some(function)
    }

    /// Applies `integer` when both operands are integers and `real` otherwise.
    ///
    /// An integer result outside the `i64` range is recomputed with `real`
    /// on the promoted operands.
    fn integer_or_real(left: Number,
                       right: Number,
                       integer: fn(i64, i64) -> Option<i64>,
                       real: fn(f64, f64) -> f64)
                       -> Number {
        if let (Number::Integer(a), Number::Integer(b)) = (left, right)
           && let Some(n) = integer(a, b)
        {
            return Number::Integer(n);
        }
        let (a, b) = left.promote_to_real(right);
        Number::Real(real(a, b))
    }

    /// Rejects a zero divisor for `/`, `%` and `//`.
    fn check_divisor(right: Number, position: usize) -> EvalResult<()> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(())
    }

    /// Addition. An integer sum outside the `i64` range becomes a real.
    ///
    /// # Errors
    /// Never fails; the signature matches the operator table.
    pub fn add(left: Number, right: Number, _position: usize) -> EvalResult<Number> {
        Ok(Self::integer_or_real(left, right, i64::checked_add, |a, b| a + b))
    }

    /// Subtraction. An integer difference outside the `i64` range becomes a
    /// real.
    ///
    /// # Errors
    /// Never fails; the signature matches the operator table.
    pub fn sub(left: Number, right: Number, _position: usize) -> EvalResult<Number> {
        Ok(Self::integer_or_real(left, right, i64::checked_sub, |a, b| a - b))
    }

    /// Multiplication. An integer product outside the `i64` range becomes a
    /// real.
    ///
    /// # Errors
    /// Never fails; the signature matches the operator table.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::mul(Number::Integer(6), Number::Integer(7), 0),
    ///            Ok(Number::Integer(42)));
    /// assert_eq!(Evaluator::mul(Number::Integer(3), Number::Real(0.5), 0),
    ///            Ok(Number::Real(1.5)));
    /// assert_eq!(Evaluator::mul(Number::Integer(1 << 40), Number::Integer(1 << 40), 0),
    ///            Ok(Number::Real(2f64.powi(80))));
    /// ```
    pub fn mul(left: Number, right: Number, _position: usize) -> EvalResult<Number> {
        Ok(Self::integer_or_real(left, right, i64::checked_mul, |a, b| a * b))
    }

    /// True division. The result is always real.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::true_div(Number::Integer(1), Number::Integer(2), 0),
    ///            Ok(Number::Real(0.5)));
    /// assert_eq!(Evaluator::true_div(Number::Integer(6), Number::Integer(3), 0),
    ///            Ok(Number::Real(2.0)));
    /// ```
    pub fn true_div(left: Number, right: Number, position: usize) -> EvalResult<Number> {
        Self::check_divisor(right, position)?;
        let (a, b) = left.promote_to_real(right);
        Ok(Number::Real(a / b))
    }

    /// Modulo. The result takes the sign of the divisor.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::modulo(Number::Integer(-7), Number::Integer(3), 0),
    ///            Ok(Number::Integer(2)));
    /// assert_eq!(Evaluator::modulo(Number::Real(7.5), Number::Integer(-2), 0),
    ///            Ok(Number::Real(-0.5)));
    /// ```
    pub fn modulo(left: Number, right: Number, position: usize) -> EvalResult<Number> {
        Self::check_divisor(right, position)?;
        match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => {
                mod_i64(a, b).map(Number::Integer)
                             .ok_or(RuntimeError::DivisionByZero { position })
            },
            _ => {
                let (a, b) = left.promote_to_real(right);
                Ok(Number::Real(div_mod_f64(a, b).1))
            },
        }
    }

    /// Floor division. The quotient rounds toward negative infinity.
    ///
    /// `i64::MIN // -1` leaves the integer range and yields a real.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::{evaluator::core::Evaluator, value::Number};
    ///
    /// assert_eq!(Evaluator::floor_div(Number::Integer(-7), Number::Integer(2), 0),
    ///            Ok(Number::Integer(-4)));
    /// assert_eq!(Evaluator::floor_div(Number::Real(7.0), Number::Integer(2), 0),
    ///            Ok(Number::Real(3.0)));
    /// ```
    pub fn floor_div(left: Number, right: Number, position: usize) -> EvalResult<Number> {
        Self::check_divisor(right, position)?;
        Ok(Self::integer_or_real(left, right, floor_div_i64, |a, b| div_mod_f64(a, b).0))
    }
}
