use crate::{
    ast::{Expr, Literal, Node},
    config::Limits,
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Lowers a syntax tree into a validated arithmetic expression.
///
/// The tree is accepted only if every node is a numeric literal, a unary
/// `+`/`-`, or one of the binary operators `+ - * / % ** //`, and its depth
/// does not exceed `limits.max_depth`. The first offending node, in
/// left-to-right order, is reported.
///
/// # Errors
/// - `ParseError::Disallowed` naming the first construct outside the
///   arithmetic subset.
/// - `ParseError::TooDeep` if the tree is deeper than allowed.
///
/// # Example
/// ```
/// use abacus::{
///     ast::Node,
///     config::Limits,
///     error::ParseError,
///     interpreter::parser::validate::validate,
/// };
///
/// let name = Node::Name { name: "os".to_string(), position: 0 };
/// assert_eq!(validate(name, &Limits::default()),
///            Err(ParseError::Disallowed { construct: "name 'os'".to_string(), position: 0 }));
///
/// assert!(validate(Node::number(7, 0), &Limits::default()).is_ok());
/// ```
pub fn validate(node: Node, limits: &Limits) -> ParseResult<Expr> {
    check(&node, 1, limits.max_depth)?;
    Ok(Expr::new_unchecked(node))
}

fn check(node: &Node, depth: usize, max_depth: usize) -> ParseResult<()> {
    if depth > max_depth {
        return Err(ParseError::TooDeep { limit: max_depth });
    }

    match node {
        Node::Literal { value: Literal::Integer(_) | Literal::Real(_),
                        .. } => Ok(()),
        Node::UnaryOp { op, operand, .. } if op.is_arithmetic() => {
            check(operand, depth + 1, max_depth)
        },
        Node::BinaryOp { left, op, right, .. } if op.is_arithmetic() => {
            check(left, depth + 1, max_depth)?;
            check(right, depth + 1, max_depth)
        },
        Node::Literal { .. }
        | Node::Name { .. }
        | Node::Call { .. }
        | Node::Attribute { .. }
        | Node::UnaryOp { .. }
        | Node::BinaryOp { .. } => Err(ParseError::Disallowed { construct: node.describe(),
                                                                position:  node.position(), }),
    }
}
