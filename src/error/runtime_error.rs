/// Represents all errors that can occur during evaluation.
///
/// Positions are byte offsets into the source the tree was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The tree contains a node or literal kind outside the allow-list.
    #[error("Error at {position}: unsupported expression: {kind}.")]
    UnsupportedNode {
        /// Description of the node kind.
        kind:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An operator has no entry in the evaluator's operator table.
    #[error("Error at {position}: operator '{operator}' is not allowed.")]
    UnsupportedOperator {
        /// The operator symbol.
        operator: String,
        /// Byte offset in the source.
        position: usize,
    },
    /// Attempted division, modulo or floor division by zero.
    #[error("Error at {position}: division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A power of finite operands has no finite result.
    #[error("Error at {position}: numeric overflow while computing result.")]
    Overflow {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The operation has no real-valued result, such as a negative base
    /// raised to a fractional power.
    #[error("Error at {position}: math domain error: {details}.")]
    Domain {
        /// Details about the failing operation.
        details:  String,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An unvalidated tree is deeper than the evaluator permits.
    #[error("Error: expression exceeds the maximum depth of {limit}.")]
    TooDeep {
        /// The configured limit.
        limit: usize,
    },
}
