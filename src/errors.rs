use thiserror::Error as ThisError;

/// An error structure that contains the error variants that occur when
/// constructing or solving a square system.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SystemError {
    /// The coefficient matrix is not square, or the right hand side vector
    /// length does not match the order of the matrix. The system cannot be
    /// constructed; correct the input and construct a fresh one.
    #[error(
        "Invalid dimensions: coefficient matrix is {}x{} with a right hand side of length {}. The matrix must be square and the right hand side must match its order.",
        nrows,
        ncols,
        rhs_len
    )]
    InvalidDimension {
        /// number of rows of the given coefficient matrix
        nrows: usize,
        /// number of columns of the given coefficient matrix. For row-wise
        /// construction from ragged input this is the length of the first
        /// offending row.
        ncols: usize,
        /// length of the given right hand side vector
        rhs_len: usize,
    },

    /// During factorization a pivot column had no nonzero entry in any of the
    /// remaining rows, so the coefficient matrix is singular and the system
    /// has no unique solution. The storage of a system that failed this way
    /// is partially mutated and meaningless; it is consumed by the failing
    /// call so it cannot be solved again.
    #[error(
        "Singular matrix: no nonzero pivot available in column {}. The system has no unique solution.",
        column
    )]
    SingularMatrix {
        /// the pivot column for which no nonzero entry was found
        column: usize,
    },
}
