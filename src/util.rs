/// Numeric helpers.
///
/// This module provides the integer-to-real promotion used by mixed
/// arithmetic, and floor division and modulo with the sign conventions the
/// calculator follows: the quotient rounds toward negative infinity and the
/// remainder takes the sign of the divisor.
///
/// Integer helpers return `None` when the result is not representable, so
/// callers can turn that into an evaluation error instead of panicking.
pub mod num;
