use thiserror::Error;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors raised while validating a problem, before any pivot work
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A constraint row does not match the objective width
    #[error("constraint row {row} has {got} coefficients, expected {expected}")]
    ConstraintWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The RHS vector does not match the number of constraints
    #[error("RHS vector has {got} entries, expected {expected}")]
    RhsLength { expected: usize, got: usize },

    /// The operator list does not match the number of constraints
    #[error("operator list has {got} entries, expected {expected}")]
    OperatorLength { expected: usize, got: usize },
}
