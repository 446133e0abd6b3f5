use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// The lexer recognizes more than the arithmetic grammar needs: names,
/// keywords, strings, comparisons and bitwise operators all produce tokens
/// so that the parser can reject them with a precise message instead of a
/// generic "unexpected character".
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `2.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Quoted string literals, such as `'abc'`.
    #[regex(r#""[^"\\\n]*""#, parse_string)]
    #[regex(r"'[^'\\\n]*'", parse_string)]
    Str(String),
    /// `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// `None`
    #[token("None")]
    NoneLiteral,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens, such as `x` or `__import__`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `@`
    #[token("@")]
    At,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "'{r}'"),
            Self::Integer(n) => write!(f, "'{n}'"),
            Self::Str(s) => write!(f, "string '{s}'"),
            Self::Bool(b) => write!(f, "'{}'", if *b { "True" } else { "False" }),
            Self::NoneLiteral => write!(f, "'None'"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// The source text of a punctuation or keyword token.
    const fn symbol(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::DoubleStar => "**",
            Self::DoubleSlash => "//",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::At => "@",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Real(_)
            | Self::Integer(_)
            | Self::Str(_)
            | Self::Bool(_)
            | Self::NoneLiteral
            | Self::Identifier(_) => "literal",
        }
    }
}

/// Errors raised inside the lexer before a position is attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// The input does not start any token.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal with a malformed form.
    InvalidLiteral,
    /// An integer literal that does not fit in an `i64`.
    IntegerOutOfRange,
}

/// Splits the source into tokens paired with their byte offsets.
///
/// # Errors
/// Returns a `ParseError` for the first character that starts no token,
/// for integer literals with leading zeros, and for integer literals too
/// large even for an `f64`.
///
/// Integer literals outside the `i64` range but within the `f64` range are
/// read as reals.
///
/// # Example
/// ```
/// use abacus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** .5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2), 0), (Token::DoubleStar, 2), (Token::Real(0.5), 5)]);
///
/// assert_eq!(tokenize("18446744073709551616").unwrap(),
///            vec![(Token::Real(18_446_744_073_709_551_616.0), 0)]);
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedCharacter { character, position });
            },
            Err(LexError::InvalidLiteral) => {
                return Err(ParseError::InvalidLiteral { literal: lexer.slice().to_string(),
                                                        position });
            },
            Err(LexError::IntegerOutOfRange) => {
                let real = lexer.slice()
                                .parse::<f64>()
                                .ok()
                                .filter(|r| r.is_finite())
                                .ok_or(ParseError::LiteralTooLarge { position })?;
                tokens.push((Token::Real(real), position));
            },
        }
    }

    Ok(tokens)
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::InvalidLiteral)
}

/// Parses an integer literal from the current token slice.
///
/// Leading zeros are only accepted when every digit is zero (`0`, `000`),
/// so `05` is rejected rather than silently read as decimal or octal.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    let slice = lex.slice();
    if slice.len() > 1 && slice.starts_with('0') && slice.bytes().any(|b| b != b'0') {
        return Err(LexError::InvalidLiteral);
    }
    slice.parse().map_err(|_| LexError::IntegerOutOfRange)
}

/// Strips the quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::{Token, tokenize};
    use crate::error::ParseError;

    #[test]
    fn literal_forms() {
        let kinds: Vec<Token> = tokenize("1 1. .5 1.5 2e3 0 000")
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(kinds,
                   vec![Token::Integer(1),
                        Token::Real(1.0),
                        Token::Real(0.5),
                        Token::Real(1.5),
                        Token::Real(2000.0),
                        Token::Integer(0),
                        Token::Integer(0),]);
    }

    #[test]
    fn double_dot_splits_into_two_reals() {
        let kinds: Vec<Token> = tokenize("2..3").unwrap().into_iter().map(|(t, _)| t).collect();
        assert_eq!(kinds, vec![Token::Real(2.0), Token::Real(0.3)]);
    }

    #[test]
    fn leading_zero_is_invalid() {
        assert_eq!(tokenize("1 + 05"),
                   Err(ParseError::InvalidLiteral { literal:  "05".to_string(),
                                                    position: 4, }));
    }

    #[test]
    fn oversized_integer_becomes_real() {
        assert_eq!(tokenize("1 + 99999999999999999999"),
                   Ok(vec![(Token::Integer(1), 0),
                           (Token::Plus, 2),
                           (Token::Real(1e20), 4)]));
    }

    #[test]
    fn integer_beyond_real_range_is_rejected() {
        let source = format!("1{}", "0".repeat(400));
        assert_eq!(tokenize(&source), Err(ParseError::LiteralTooLarge { position: 0 }));
    }

    #[test]
    fn unknown_character_reports_position() {
        assert_eq!(tokenize("1 + $"),
                   Err(ParseError::UnexpectedCharacter { character: '$',
                                                         position:  4, }));
    }

    #[test]
    fn keywords_win_over_identifiers() {
        let kinds: Vec<Token> = tokenize("not notx True").unwrap()
                                                         .into_iter()
                                                         .map(|(t, _)| t)
                                                         .collect();
        assert_eq!(kinds,
                   vec![Token::Not, Token::Identifier("notx".to_string()), Token::Bool(true)]);
    }
}
