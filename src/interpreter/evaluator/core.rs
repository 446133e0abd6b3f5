use crate::{
    ast::{Expr, Literal, Node},
    config::Limits,
    error::RuntimeError,
    interpreter::value::Number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees and computes their values.
///
/// The evaluator is stateless apart from its depth limit and can be shared
/// freely. It does not trust its input: node kinds, literal kinds and
/// operators are checked again on every visit, independently of the
/// validation the parser performs.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl Evaluator {
    /// Creates an evaluator enforcing the depth limit from `limits`.
    #[must_use]
    pub const fn new(limits: &Limits) -> Self {
        Self { max_depth: limits.max_depth }
    }

    /// Evaluates a tree and returns the resulting number.
    ///
    /// Operands are evaluated left before right, and both before the
    /// operator is looked up, so the leftmost failure is the one reported.
    ///
    /// # Errors
    /// - `UnsupportedNode` for names, calls, attribute access and
    ///   non-numeric literals.
    /// - `UnsupportedOperator` for operators without a table entry.
    /// - `DivisionByZero`, `Overflow` or `Domain` from the arithmetic.
    /// - `TooDeep` if the tree exceeds the depth limit.
    pub fn eval(&self, node: &Node) -> EvalResult<Number> {
        self.eval_at(node, 1)
    }

    fn eval_at(&self, node: &Node, depth: usize) -> EvalResult<Number> {
        if depth > self.max_depth {
            return Err(RuntimeError::TooDeep { limit: self.max_depth });
        }

        match node {
            Node::Literal { value, position } => Self::eval_literal(value, *position),
            Node::UnaryOp { op,
                            operand,
                            position, } => {
                let value = self.eval_at(operand, depth + 1)?;
                let function = Self::unary_operator_fn(*op).ok_or_else(|| {
                                   RuntimeError::UnsupportedOperator { operator: op.to_string(),
                                                                       position: *position, }
                               })?;
                function(value, *position)
            },
            Node::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval_at(left, depth + 1)?;
                let right = self.eval_at(right, depth + 1)?;
                let function = Self::binary_operator_fn(*op).ok_or_else(|| {
                                   RuntimeError::UnsupportedOperator { operator: op.to_string(),
                                                                       position: *position, }
                               })?;
                function(left, right, *position)
            },
            Node::Name { .. } | Node::Call { .. } | Node::Attribute { .. } => {
                Err(RuntimeError::UnsupportedNode { kind:     node.describe(),
                                                    position: node.position(), })
            },
        }
    }

    /// Evaluates a literal, accepting only integers and reals.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::Literal,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::Number},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_literal(&Literal::Integer(3), 0), Ok(Number::Integer(3)));
    /// assert!(matches!(Evaluator::eval_literal(&Literal::Bool(true), 0),
    ///                  Err(RuntimeError::UnsupportedNode { .. })));
    /// ```
    pub fn eval_literal(value: &Literal, position: usize) -> EvalResult<Number> {
        value.as_number()
             .ok_or_else(|| RuntimeError::UnsupportedNode { kind: value.describe().to_string(),
                                                            position })
    }
}

/// Evaluates a validated expression using the given limits.
///
/// # Errors
/// Returns a `RuntimeError` if the arithmetic fails.
pub fn evaluate_with(expr: &Expr, limits: &Limits) -> EvalResult<Number> {
    let result = Evaluator::new(limits).eval(expr.node());
    match &result {
        Ok(value) => tracing::debug!(%value, "evaluated expression"),
        Err(e) => tracing::debug!(error = %e, "evaluation failed"),
    }
    result
}

/// Evaluates a validated expression.
///
/// # Errors
/// Returns a `RuntimeError` if the arithmetic fails, such as division by
/// zero.
///
/// # Example
/// ```
/// use abacus::{error::RuntimeError, evaluate, interpreter::value::Number, parse};
///
/// let expr = parse("2 ** 3 ** 2").unwrap();
/// assert_eq!(evaluate(&expr), Ok(Number::Integer(512)));
///
/// let expr = parse("5 % 0").unwrap();
/// assert!(matches!(evaluate(&expr), Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    evaluate_with(expr, &Limits::default())
}

/// Evaluates an unvalidated syntax tree.
///
/// This skips the parser's validation pass, leaving the evaluator's own
/// allow-list checks as the only guard.
///
/// # Errors
/// Returns `RuntimeError::UnsupportedNode` or
/// `RuntimeError::UnsupportedOperator` for constructs outside the
/// arithmetic subset, as well as every error [`evaluate`] can return.
///
/// # Example
/// ```
/// use abacus::{
///     config::Limits,
///     error::RuntimeError,
///     interpreter::{evaluator::core::evaluate_node, parser::core::parse_syntax},
/// };
///
/// let limits = Limits::default();
/// let node = parse_syntax("2 < 3", &limits).unwrap();
/// assert!(matches!(evaluate_node(&node, &limits),
///                  Err(RuntimeError::UnsupportedOperator { .. })));
/// ```
pub fn evaluate_node(node: &Node, limits: &Limits) -> EvalResult<Number> {
    Evaluator::new(limits).eval(node)
}
