/// Represents all errors that can occur during lexing, parsing or
/// validation.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Syntax error: empty expression.")]
    EmptyInput,
    /// A character that does not start any token.
    #[error("Syntax error at {position}: unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the source.
        position:  usize,
    },
    /// A numeric literal with an invalid form, such as `05`.
    #[error("Syntax error at {position}: invalid literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An integer literal too large to be represented, even as a real.
    #[error("Syntax error at {position}: literal is too large.")]
    LiteralTooLarge {
        /// Byte offset in the source.
        position: usize,
    },
    /// Found a token where none of the grammar rules allow it.
    #[error("Syntax error at {position}: unexpected token {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Syntax error: unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A `(` was never closed.
    #[error("Syntax error at {position}: expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A `)` with no matching `(`.
    #[error("Syntax error at {position}: unmatched closing parenthesis ')'.")]
    UnmatchedClosingParen {
        /// Byte offset of the closing parenthesis.
        position: usize,
    },
    /// The text parsed, but contains a construct outside the arithmetic
    /// subset.
    #[error("Syntax error at {position}: {construct} is not allowed.")]
    Disallowed {
        /// Description of the construct, e.g. `name 'x'`.
        construct: String,
        /// Byte offset in the source.
        position:  usize,
    },
    /// Parentheses, prefix operators or powers nested deeper than the parser
    /// permits.
    #[error("Syntax error at {position}: nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured limit.
        limit:    usize,
        /// Byte offset where the limit was hit.
        position: usize,
    },
    /// The tree is deeper than the validation pass permits.
    #[error("Syntax error: expression exceeds the maximum depth of {limit}.")]
    TooDeep {
        /// The configured limit.
        limit: usize,
    },
}
