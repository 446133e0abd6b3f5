/// Promotes an `i64` to the nearest `f64`.
///
/// Magnitudes beyond `2^53` lose precision, which matches how mixed
/// integer/real arithmetic behaves in ordinary calculators.
///
/// ## Example
/// ```
/// use abacus::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Integer floor division: rounds the quotient toward negative infinity.
///
/// ## Returns
/// - `Some(q)`: The floored quotient.
/// - `None`: If `divisor` is zero or the quotient overflows
///   (`i64::MIN // -1`).
///
/// ## Example
/// ```
/// use abacus::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(7, -2), Some(-4));
/// assert_eq!(floor_div_i64(1, 0), None);
/// assert_eq!(floor_div_i64(i64::MIN, -1), None);
/// ```
#[must_use]
pub fn floor_div_i64(dividend: i64, divisor: i64) -> Option<i64> {
    let quotient = dividend.checked_div(divisor)?;
    let remainder = dividend.wrapping_rem(divisor);
    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Integer modulo whose result takes the sign of the divisor.
///
/// ## Returns
/// - `Some(r)`: The remainder, with `0 <= r < divisor` for positive divisors
///   and `divisor < r <= 0` for negative ones.
/// - `None`: If `divisor` is zero.
///
/// ## Example
/// ```
/// use abacus::util::num::mod_i64;
///
/// assert_eq!(mod_i64(7, 3), Some(1));
/// assert_eq!(mod_i64(-7, 3), Some(2));
/// assert_eq!(mod_i64(7, -3), Some(-2));
/// assert_eq!(mod_i64(i64::MIN, -1), Some(0));
/// ```
#[must_use]
pub fn mod_i64(dividend: i64, divisor: i64) -> Option<i64> {
    if divisor == 0 {
        return None;
    }
    let remainder = dividend.wrapping_rem(divisor);
    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        Some(remainder + divisor)
    } else {
        Some(remainder)
    }
}

/// Real floor division and modulo computed together.
///
/// The remainder takes the sign of the divisor and the quotient is the
/// floored value of `(dividend - remainder) / divisor`, corrected for
/// rounding so that `quotient * divisor + remainder` stays as close to the
/// dividend as the representation allows.
///
/// The caller is responsible for rejecting a zero divisor.
///
/// ## Example
/// ```
/// use abacus::util::num::div_mod_f64;
///
/// assert_eq!(div_mod_f64(7.5, 2.0), (3.0, 1.5));
/// assert_eq!(div_mod_f64(-7.5, 2.0), (-4.0, 0.5));
/// assert_eq!(div_mod_f64(7.5, -2.0), (-4.0, -0.5));
/// ```
#[must_use]
pub fn div_mod_f64(dividend: f64, divisor: f64) -> (f64, f64) {
    let mut remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;

    if remainder == 0.0 {
        remainder = 0.0_f64.copysign(divisor);
    } else if (divisor < 0.0) != (remainder < 0.0) {
        remainder += divisor;
        quotient -= 1.0;
    }

    let floored = if quotient == 0.0 {
        0.0_f64.copysign(dividend / divisor)
    } else {
        let floor = quotient.floor();
        if quotient - floor > 0.5 { floor + 1.0 } else { floor }
    };

    (floored, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_agrees_with_mod() {
        for a in -20..=20 {
            for b in [-7, -3, -1, 1, 2, 5] {
                let q = floor_div_i64(a, b).unwrap();
                let r = mod_i64(a, b).unwrap();
                assert_eq!(q * b + r, a, "{a} // {b}");
            }
        }
    }

    #[test]
    fn real_remainder_sign_follows_divisor() {
        let (_, r) = div_mod_f64(-1.0, 3.0);
        assert!(r > 0.0);
        let (_, r) = div_mod_f64(1.0, -3.0);
        assert!(r < 0.0);
        let (_, r) = div_mod_f64(6.0, -3.0);
        assert!(r == 0.0 && r.is_sign_negative());
    }

    #[test]
    fn real_floor_division_of_small_quotient_keeps_sign() {
        let (q, _) = div_mod_f64(-0.5, 3.0);
        assert_eq!(q, -1.0);
        let (q, _) = div_mod_f64(0.5, 3.0);
        assert!(q == 0.0 && q.is_sign_positive());
    }

    #[test]
    fn zero_divisor_is_rejected_for_integers() {
        assert_eq!(floor_div_i64(5, 0), None);
        assert_eq!(mod_i64(5, 0), None);
    }
}
