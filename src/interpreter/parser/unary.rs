use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Literal, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            core::{Nesting, ParseResult, Parsed, parse_expression},
        },
    },
};

/// Parses a logical `not` expression.
///
/// Grammar:
/// ```text
///     not := "not" not
///          | comparison
/// ```
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, position)) = tokens.peek() {
        let position = *position;
        let nesting = nesting.enter(position)?;
        tokens.next();
        let operand = parse_logical_not(tokens, nesting)?;
        return nesting.build(Node::unary(UnaryOperator::Not, operand.node, position),
                             operand.height);
    }
    parse_comparison(tokens, nesting)
}

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+` (identity)
/// - `-` (numeric negation)
/// - `~` (bitwise inversion, rejected by validation)
///
/// Unary operators are right-associative, so `--x` is parsed as `-(-x)`.
/// They bind less tightly than `**` on their right: `-2 ** 2` is
/// `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "~") unary
///            | power
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `nesting`: The current recursion budget.
///
/// # Returns
/// A [`Node::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let prefix = match tokens.peek() {
        Some((Token::Plus, position)) => Some((UnaryOperator::Plus, *position)),
        Some((Token::Minus, position)) => Some((UnaryOperator::Minus, *position)),
        Some((Token::Tilde, position)) => Some((UnaryOperator::Invert, *position)),
        _ => None,
    };

    match prefix {
        Some((op, position)) => {
            let nesting = nesting.enter(position)?;
            tokens.next();
            let operand = parse_unary(tokens, nesting)?;
            nesting.build(Node::unary(op, operand.node, position), operand.height)
        },
        None => parse_power(tokens, nesting),
    }
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `**`
/// right-associative (`2 ** 3 ** 2` is `2 ** (3 ** 2)`) and allows a signed
/// exponent (`2 ** -1`).
///
/// Grammar: `power := postfix ("**" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens, nesting)?;

    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        let position = *position;
        let nesting = nesting.enter(position)?;
        tokens.next();
        let exponent = parse_unary(tokens, nesting)?;
        let height = base.height.max(exponent.height);
        return nesting.build(Node::binary(base.node, BinaryOperator::Pow, exponent.node, position),
                             height);
    }

    Ok(base)
}

/// Parses postfix calls and attribute accesses applied to a primary.
///
/// Neither construct is arithmetic; they are parsed so that inputs such as
/// `(1).__class__` or `f(2)` are reported precisely by validation.
///
/// Grammar:
/// ```text
///     postfix := primary ("(" arguments ")" | "." identifier)*
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens, nesting)?;

    loop {
        match tokens.peek() {
            Some((Token::LParen, position)) => {
                let position = *position;
                tokens.next();
                let arguments = parse_arguments(tokens, nesting.enter(position)?, position)?;
                let height = arguments.iter().fold(expr.height, |h, a| h.max(a.height));
                let call = Node::Call { callee: Box::new(expr.node),
                                        arguments: arguments.into_iter().map(|a| a.node).collect(),
                                        position };
                expr = nesting.build(call, height)?;
            },
            Some((Token::Dot, position)) => {
                let position = *position;
                tokens.next();
                match tokens.next() {
                    Some((Token::Identifier(attribute), _)) => {
                        let access = Node::Attribute { target: Box::new(expr.node),
                                                       attribute: attribute.clone(),
                                                       position };
                        expr = nesting.build(access, expr.height)?;
                    },
                    Some((token, position)) => {
                        return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                 position: *position, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput),
                }
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses the comma separated arguments of a call, after the opening
/// parenthesis.
///
/// A trailing comma is accepted.
fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                          nesting: Nesting,
                          open: usize)
                          -> ParseResult<Vec<Parsed>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();

    loop {
        if let Some((Token::RParen, _)) = tokens.peek() {
            tokens.next();
            return Ok(arguments);
        }

        arguments.push(parse_expression(tokens, nesting)?);

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => return Ok(arguments),
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                         position: *position, });
            },
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `nesting`: The current recursion budget.
///
/// # Returns
/// The parsed primary with its height, or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   nesting: Nesting)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let position = *position;

    let literal = match token {
        Token::Integer(n) => Literal::Integer(*n),
        Token::Real(r) => Literal::Real(*r),
        Token::Bool(b) => Literal::Bool(*b),
        Token::Str(s) => Literal::Str(s.clone()),
        Token::NoneLiteral => Literal::None,
        Token::Identifier(name) => {
            return nesting.build(Node::Name { name: name.clone(),
                                              position },
                                 0);
        },
        Token::LParen => return parse_grouping(tokens, nesting, position),
        tok => {
            return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     position });
        },
    };

    nesting.build(Node::Literal { value: literal,
                                  position },
                  0)
}

/// Parses a parenthesized expression, after the opening parenthesis.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         nesting: Nesting,
                         open: usize)
                         -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, nesting.enter(open)?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                     position: *position, }),
        None => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
