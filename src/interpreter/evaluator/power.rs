use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer bases with non-negative integer exponents use checked
    /// integer arithmetic. A negative integer exponent, an integer result
    /// outside the `i64` range, or any real operand computes in floating
    /// point.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when zero is raised to a negative
    ///   power.
    /// - `RuntimeError::Domain` when a negative base is raised to a
    ///   non-integral exponent, which has no real result.
    /// - `RuntimeError::Overflow` when a power of finite operands is
    ///   infinite.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::Number},
    /// };
    ///
    /// assert_eq!(Evaluator::pow(Number::Integer(2), Number::Integer(10), 0),
    ///            Ok(Number::Integer(1024)));
    /// assert_eq!(Evaluator::pow(Number::Integer(2), Number::Integer(-1), 0),
    ///            Ok(Number::Real(0.5)));
    /// assert!(matches!(Evaluator::pow(Number::Integer(-8), Number::Real(0.5), 0),
    ///                  Err(RuntimeError::Domain { .. })));
    /// ```
    pub fn pow(base: Number, exponent: Number, position: usize) -> EvalResult<Number> {
        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && let Some(value) = Self::integer_pow(b, e)
        {
            return Ok(Number::Integer(value));
        }
        Self::real_pow(base.as_real(), exponent.as_real(), position)
    }

    /// Integer power, or `None` if the exponent is negative or the result
    /// leaves the `i64` range.
    fn integer_pow(base: i64, exponent: i64) -> Option<i64> {
        if exponent < 0 {
            return None;
        }
        match base {
            0 => Some(i64::from(exponent == 0)),
            1 => Some(1),
            -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => u32::try_from(exponent).ok().and_then(|e| base.checked_pow(e)),
        }
    }

    fn real_pow(base: f64, exponent: f64, position: usize) -> EvalResult<Number> {
        if exponent == 0.0 {
            return Ok(Number::Real(1.0));
        }
        if base == 0.0 && exponent < 0.0 && exponent.is_finite() {
            return Err(RuntimeError::DivisionByZero { position });
        }
        if base < 0.0 && base.is_finite() && exponent.is_finite() && exponent.fract() != 0.0 {
            let details = format!("{base} ** {exponent} is not a real number");
            return Err(RuntimeError::Domain { details, position });
        }

        let result = base.powf(exponent);
        if result.is_infinite() && base.is_finite() && exponent.is_finite() {
            return Err(RuntimeError::Overflow { position });
        }
        Ok(Number::Real(result))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{evaluator::core::Evaluator, value::Number},
    };

    #[test]
    fn integer_powers_stay_integers() {
        assert_eq!(Evaluator::pow(Number::Integer(-3), Number::Integer(3), 0),
                   Ok(Number::Integer(-27)));
        assert_eq!(Evaluator::pow(Number::Integer(0), Number::Integer(0), 0),
                   Ok(Number::Integer(1)));
        assert_eq!(Evaluator::pow(Number::Integer(-1), Number::Integer(i64::MAX), 0),
                   Ok(Number::Integer(-1)));
    }

    #[test]
    fn integer_overflow_falls_back_to_real() {
        assert_eq!(Evaluator::pow(Number::Integer(2), Number::Integer(64), 7),
                   Ok(Number::Real(18_446_744_073_709_551_616.0)));
        assert_eq!(Evaluator::pow(Number::Integer(-2), Number::Integer(63), 7),
                   Ok(Number::Integer(i64::MIN)));
        assert_eq!(Evaluator::pow(Number::Integer(-2), Number::Integer(65), 7),
                   Ok(Number::Real(-36_893_488_147_419_103_232.0)));
        assert_eq!(Evaluator::pow(Number::Integer(2), Number::Integer(i64::MAX), 7),
                   Err(RuntimeError::Overflow { position: 7 }));
    }

    #[test]
    fn zero_to_negative_power_divides_by_zero() {
        assert_eq!(Evaluator::pow(Number::Integer(0), Number::Integer(-1), 2),
                   Err(RuntimeError::DivisionByZero { position: 2 }));
        assert_eq!(Evaluator::pow(Number::Real(0.0), Number::Real(-0.5), 2),
                   Err(RuntimeError::DivisionByZero { position: 2 }));
    }

    #[test]
    fn negative_base_with_integral_real_exponent_is_fine() {
        assert_eq!(Evaluator::pow(Number::Real(-2.0), Number::Real(3.0), 0),
                   Ok(Number::Real(-8.0)));
    }

    #[test]
    fn real_overflow() {
        assert_eq!(Evaluator::pow(Number::Real(10.0), Number::Integer(400), 1),
                   Err(RuntimeError::Overflow { position: 1 }));
    }
}
