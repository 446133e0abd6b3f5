use std::iter::Peekable;

use crate::{
    ast::{Expr, Node},
    config::Limits,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_logical_or, validate::validate},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursion budget carried through the parser.
///
/// `depth` counts how many grouping, prefix, power or call-argument rules
/// are currently active. Each of those rules calls [`Nesting::enter`] before
/// recursing, which fails once `max_nesting` is reached.
///
/// Tree depth is bounded separately: every node is built through
/// [`Nesting::build`], which checks the height of the new subtree against
/// `max_depth`. A tree the parser returns is therefore never deeper than
/// validation accepts, however chains and groups are combined.
#[derive(Debug, Clone, Copy)]
pub struct Nesting {
    depth:  usize,
    limits: Limits,
}

impl Nesting {
    /// Creates an empty budget for the given limits.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { depth: 0,
               limits }
    }

    /// Returns the budget for one more level of recursion.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the limit is reached.
    pub fn enter(self, position: usize) -> ParseResult<Self> {
        if self.depth >= self.limits.max_nesting {
            return Err(ParseError::NestingTooDeep { limit: self.limits.max_nesting,
                                                    position });
        }
        Ok(Self { depth:  self.depth + 1,
                  limits: self.limits, })
    }

    /// Pairs `node` with its height, given the height of its tallest child
    /// (`0` for a leaf).
    ///
    /// # Errors
    /// Returns `ParseError::TooDeep` if the subtree would be deeper than
    /// `max_depth`.
    pub fn build(self, node: Node, child_height: usize) -> ParseResult<Parsed> {
        let height = child_height + 1;
        if height > self.limits.max_depth {
            return Err(ParseError::TooDeep { limit: self.limits.max_depth });
        }
        Ok(Parsed { node, height })
    }
}

/// A subtree produced by the parser, together with its height.
///
/// Heights are carried up from the leaves so the depth limit never needs a
/// walk over an unbounded tree.
#[derive(Debug)]
pub struct Parsed {
    /// The subtree.
    pub node:   Node,
    /// Number of nodes on the longest path from this node to a leaf.
    pub height: usize,
}

/// Parses a full expression.
///
/// This is the entry point of the recursive descent. It begins at the
/// lowest-precedence level, logical `or`.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Parsed>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, nesting)
}

/// Parses source text into an unvalidated syntax tree.
///
/// The tree may contain names, calls, comparisons and other constructs that
/// [`parse`] would reject. It is mainly useful for feeding
/// [`crate::interpreter::evaluator::core::evaluate_node`], whose own
/// allow-list checks are the second line of defense.
///
/// # Errors
/// Returns a `ParseError` if the text is not syntactically well formed.
///
/// # Example
/// ```
/// use abacus::{ast::Node, config::Limits, interpreter::parser::core::parse_syntax};
///
/// let node = parse_syntax("x + 1", &Limits::default()).unwrap();
/// assert!(matches!(node, Node::BinaryOp { .. }));
/// ```
pub fn parse_syntax(source: &str, limits: &Limits) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut iter = tokens.iter().peekable();
    let parsed = parse_expression(&mut iter, Nesting::new(*limits))?;

    match iter.next() {
        None => Ok(parsed.node),
        Some((Token::RParen, position)) => {
            Err(ParseError::UnmatchedClosingParen { position: *position })
        },
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                     position: *position, }),
    }
}

/// Parses source text into a validated arithmetic expression using the
/// given limits.
///
/// # Errors
/// Returns a `ParseError` if the text is malformed or contains anything
/// outside the arithmetic subset.
pub fn parse_with(source: &str, limits: &Limits) -> ParseResult<Expr> {
    let result = parse_syntax(source, limits).and_then(|node| validate(node, limits));
    if let Err(e) = &result {
        tracing::debug!(error = %e, "rejected expression");
    }
    result
}

/// Parses source text into a validated arithmetic expression.
///
/// # Errors
/// Returns a `ParseError` if the text is malformed or contains anything
/// outside the arithmetic subset.
///
/// # Example
/// ```
/// use abacus::{error::ParseError, parse};
///
/// assert!(parse("(2 + 3) * 4").is_ok());
/// assert!(matches!(parse("2 +"), Err(ParseError::UnexpectedEndOfInput)));
/// assert!(matches!(parse("abs(2)"), Err(ParseError::Disallowed { .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with(source, &Limits::default())
}
