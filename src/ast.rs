use crate::interpreter::value::Number;

/// Represents a literal value as written in the source.
///
/// The syntax pass accepts every literal kind the lexer knows so that the
/// validation pass can reject the non-numeric ones by name. Only
/// `Integer` and `Real` survive into an [`Expr`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `1.5`, `.5` or `2e3`.
    Real(f64),
    /// `True` or `False`.
    Bool(bool),
    /// A single- or double-quoted string literal.
    Str(String),
    /// `None`.
    None,
}

impl Literal {
    /// Returns the numeric value of the literal, or `None` for non-numeric
    /// literals.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Integer(*n)),
            Self::Real(r) => Some(Number::Real(*r)),
            Self::Bool(_) | Self::Str(_) | Self::None => None,
        }
    }

    /// A short human-readable description used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer literal",
            Self::Real(_) => "real literal",
            Self::Bool(_) => "boolean literal",
            Self::Str(_) => "string literal",
            Self::None => "None literal",
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// A syntax tree node produced by the parser.
///
/// `Node` models everything the syntax pass understands, which is wider than
/// what may be evaluated. Each variant records the byte offset in the source
/// where the construct starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Literal {
        /// The constant value.
        value:    Literal,
        /// Byte offset in the source.
        position: usize,
    },
    /// A bare identifier such as `x` or `__import__`.
    Name {
        /// The identifier text.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A call expression such as `f(1, 2)`.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Byte offset in the source.
        position:  usize,
    },
    /// Attribute access such as `x.real`.
    Attribute {
        /// The expression whose attribute is read.
        target:    Box<Self>,
        /// The attribute name.
        attribute: String,
        /// Byte offset in the source.
        position:  usize,
    },
    /// A prefix operation.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Byte offset in the source.
        position: usize,
    },
    /// An infix operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Node {
    /// Returns the byte offset where this node starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Name { position, .. }
            | Self::Call { position, .. }
            | Self::Attribute { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// A short description of the node kind, used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Literal { value, .. } => value.describe().to_string(),
            Self::Name { name, .. } => format!("name '{name}'"),
            Self::Call { .. } => "function call".to_string(),
            Self::Attribute { attribute, .. } => format!("attribute access '.{attribute}'"),
            Self::UnaryOp { op, .. } => format!("unary operator '{op}'"),
            Self::BinaryOp { op, .. } => format!("operator '{op}'"),
        }
    }

    /// Convenience constructor for a numeric literal node.
    #[must_use]
    pub fn number(value: impl Into<Literal>, position: usize) -> Self {
        Self::Literal { value: value.into(),
                        position }
    }

    /// Convenience constructor for a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self, position: usize) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand),
                        position }
    }

    /// Convenience constructor for a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }
}

/// A validated arithmetic expression tree.
///
/// An `Expr` wraps a [`Node`] that contains only numeric literals, unary
/// `+`/`-`, and the binary operators `+ - * / % ** //`. The only way to
/// obtain one is through the parser's validation pass, so holding an `Expr`
/// proves the tree is inside the arithmetic subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Node);

impl Expr {
    /// Wraps a node that has already been checked by the validation pass.
    pub(crate) const fn new_unchecked(node: Node) -> Self {
        Self(node)
    }

    /// Returns the underlying syntax tree.
    #[must_use]
    pub const fn node(&self) -> &Node {
        &self.0
    }
}

/// Infix operators known to the syntax pass.
///
/// Only the first seven are arithmetic; the rest exist so that the parser
/// can recognize and reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Floor division (`//`)
    FloorDiv,
    /// Matrix multiplication (`@`)
    MatMul,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    LeftShift,
    /// Right shift (`>>`)
    RightShift,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Returns `true` for the operators an [`Expr`] may contain.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self,
                 Self::Add
                 | Self::Sub
                 | Self::Mul
                 | Self::Div
                 | Self::Mod
                 | Self::Pow
                 | Self::FloorDiv)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual,
            LeftShift, Less, LessEqual, MatMul, Mod, Mul, NotEqual, Or, Pow, RightShift, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            FloorDiv => "//",
            MatMul => "@",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Prefix operators known to the syntax pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`)
    Plus,
    /// Arithmetic negation (`-x`)
    Minus,
    /// Logical negation (`not x`)
    Not,
    /// Bitwise inversion (`~x`)
    Invert,
}

impl UnaryOperator {
    /// Returns `true` for the operators an [`Expr`] may contain.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "not",
            Self::Invert => "~",
        };
        write!(f, "{operator}")
    }
}
