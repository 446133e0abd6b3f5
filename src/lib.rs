//! # abacus
//!
//! abacus evaluates user-typed arithmetic without ever executing code. Text
//! is parsed into a tree restricted to numeric literals, unary `+`/`-` and
//! the binary operators `+ - * / % ** //`, then evaluated against an
//! explicit operator table with checked arithmetic.
//!
//! A headless [`Calculator`] models the keypad front-end on top of the
//! evaluator: input accumulation, clear, backspace, equals, sign toggle and
//! percent.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the syntax tree produced by the parser (`Node`), the
/// validated arithmetic expression (`Expr`), and the operator and literal
/// types they are built from.
///
/// # Responsibilities
/// - Models every construct the parser recognizes, arithmetic or not.
/// - Records source positions for error reporting.
/// - Guarantees through `Expr` that a tree has passed validation.
pub mod ast;
/// The headless calculator front-end.
///
/// Models the display of a keypad calculator: which keys are accepted, how
/// they edit the display, and how results and errors are rendered.
pub mod calculator;
/// Resource limits shared by the parser and evaluator.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// validation or evaluation, and the top-level `CalcError` that wraps them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source positions and details for context.
/// - Maps failures to the calculator's user-visible text.
pub mod error;
/// Orchestrates the lexer, parser, validator and evaluator.
pub mod interpreter;
/// Numeric helpers shared by the evaluator.
pub mod util;

pub use crate::{
    calculator::{Calculator, Key, render},
    error::CalcError,
    interpreter::{
        evaluator::core::{evaluate, evaluate_node, evaluate_with},
        parser::core::{parse, parse_with},
        value::Number,
    },
};
use crate::config::Limits;

/// Parses and evaluates an arithmetic expression using the given limits.
///
/// # Errors
/// Returns `CalcError::Parse` if the text is rejected, or
/// `CalcError::Runtime` if evaluation fails.
pub fn calculate_with(source: &str, limits: &Limits) -> Result<Number, CalcError> {
    let expr = parse_with(source, limits)?;
    Ok(evaluate_with(&expr, limits)?)
}

/// Parses and evaluates an arithmetic expression.
///
/// # Errors
/// Returns `CalcError::Parse` if the text is rejected, or
/// `CalcError::Runtime` if evaluation fails.
///
/// # Examples
/// ```
/// use abacus::{Number, calculate};
///
/// assert_eq!(calculate("2 + 3 * 4"), Ok(Number::Integer(14)));
/// assert_eq!(calculate("1 / 2"), Ok(Number::Real(0.5)));
///
/// // Division by zero is reported, not panicked on.
/// assert!(calculate("5 / 0").unwrap_err().is_division_by_zero());
///
/// // Anything but arithmetic is rejected before evaluation.
/// assert!(calculate("__import__('os')").is_err());
/// ```
pub fn calculate(source: &str) -> Result<Number, CalcError> {
    calculate_with(source, &Limits::default())
}
