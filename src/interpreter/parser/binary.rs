use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nesting, ParseResult, Parsed},
            unary::{parse_logical_not, parse_unary},
        },
    },
};

/// Parses a left-associative chain of operators from `operators`.
///
/// The rule is: `level := operand (op operand)*` where `op` is any operator
/// in `operators`. The chain is built iteratively; each step goes through
/// [`Nesting::build`], so a long flat input fails as soon as the tree it
/// produces becomes deeper than later passes accept.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 nesting: Nesting,
                                 operators: &[BinaryOperator],
                                 operand: fn(&mut Peekable<I>, Nesting) -> ParseResult<Parsed>)
                                 -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens, nesting)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && operators.contains(&op)
        {
            let position = *position;
            tokens.next();
            let right = operand(tokens, nesting)?;
            let height = left.height.max(right.height);
            left = nesting.build(Node::binary(left.node, op, right.node, position), height)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, nesting, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := not ("and" not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, nesting, &[BinaryOperator::And], parse_logical_not)
}

/// Parses relational and equality operators.
///
/// Comparisons are folded left to right; they never survive validation, so
/// chained-comparison semantics are irrelevant.
///
/// Grammar: `comparison := bit_or (("<" | "<=" | ">" | ">=" | "==" | "!=")
/// bit_or)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    parse_left_associative(tokens,
                           nesting,
                           &[Less, LessEqual, Greater, GreaterEqual, Equal, NotEqual],
                           parse_bit_or)
}

/// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
fn parse_bit_or<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, nesting, &[BinaryOperator::BitOr], parse_bit_xor)
}

/// Grammar: `bit_xor := bit_and ("^" bit_and)*`
fn parse_bit_xor<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, nesting, &[BinaryOperator::BitXor], parse_bit_and)
}

/// Grammar: `bit_and := shift ("&" shift)*`
fn parse_bit_and<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, nesting, &[BinaryOperator::BitAnd], parse_shift)
}

/// Grammar: `shift := additive (("<<" | ">>") additive)*`
fn parse_shift<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           nesting,
                           &[BinaryOperator::LeftShift, BinaryOperator::RightShift],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
/// - `nesting`: The current recursion budget.
///
/// # Returns
/// A `Node::BinaryOp` tree representing the parsed expression, with its
/// height.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           nesting,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/`, `//`, `%` and `@`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%" | "@")
/// unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   nesting: Nesting)
                                   -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    use BinaryOperator::{Div, FloorDiv, MatMul, Mod, Mul};

    parse_left_associative(tokens, nesting, &[Mul, Div, FloorDiv, Mod, MatMul], parse_unary)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not infix operators. `**` is included
/// even though exponentiation is parsed by its own right-associative rule.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::At => Some(BinaryOperator::MatMul),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::ShiftLeft => Some(BinaryOperator::LeftShift),
        Token::ShiftRight => Some(BinaryOperator::RightShift),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
