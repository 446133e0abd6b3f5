use crate::util::num::i64_to_f64;

/// A numeric value produced by evaluation.
///
/// Integers stay integers under `+ - * % // **` as long as the result is
/// representable; anything touching a real, and every true division, yields
/// a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Number {
    /// Returns `true` if the value is the additive identity (`0`, `0.0` or
    /// `-0.0`).
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::value::Number;
    ///
    /// assert!(Number::Integer(0).is_zero());
    /// assert!(Number::Real(-0.0).is_zero());
    /// assert!(!Number::Real(1e-300).is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable real, the
    /// same promotion mixed arithmetic performs.
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Promotes both operands to reals.
    #[must_use]
    pub fn promote_to_real(self, other: Self) -> (f64, f64) {
        (self.as_real(), other.as_real())
    }
}

/// Canonical rendering.
///
/// Integers print as decimal text. Reals with an integral value print
/// without a fractional part, other reals in plain decimal notation with the
/// shortest digits that round-trip. Negative zero prints as `0`.
///
/// # Example
/// ```
/// use abacus::interpreter::value::Number;
///
/// assert_eq!(Number::Integer(9).to_string(), "9");
/// assert_eq!(Number::Real(2.0).to_string(), "2");
/// assert_eq!(Number::Real(0.5).to_string(), "0.5");
/// assert_eq!(Number::Real(-0.0).to_string(), "0");
/// assert_eq!(Number::Real(f64::INFINITY).to_string(), "inf");
/// ```
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_nan() => write!(f, "nan"),
            Self::Real(r) if r.is_infinite() => {
                if r.is_sign_positive() {
                    write!(f, "inf")
                } else {
                    write!(f, "-inf")
                }
            },
            Self::Real(r) if *r == 0.0 => write!(f, "0"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
