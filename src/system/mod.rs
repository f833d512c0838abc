
use crate::errors::SystemError;
use crate::factorization::{back_substitute, factorize, forward_eliminate};
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;
use std::fmt;

/// A square linear system `$A\vec{x} = \vec{b}$` that has not been solved yet.
///
/// The system owns exclusive working copies of the coefficient matrix `$A$` and
/// the right hand side `$\vec{b}$`. Solving mutates both in place and consumes
/// the system, producing a [`SolvedSystem`]; a system that failed to solve is
/// consumed as well, since its storage is left in a partially factorized state
/// that is of no further use.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareSystem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// the coefficient matrix
    a: DMatrix<ScalarType>,
    /// the right hand side vector
    b: DVector<ScalarType>,
}

impl<ScalarType> SquareSystem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// Create a system from a coefficient matrix and a right hand side vector.
    ///
    /// # Errors
    /// Fails with [`SystemError::InvalidDimension`] if `a` is not square or if
    /// the length of `b` does not equal the order of `a`.
    pub fn new(a: DMatrix<ScalarType>, b: DVector<ScalarType>) -> Result<Self, SystemError> {
        if a.nrows() != a.ncols() || b.len() != a.nrows() {
            return Err(SystemError::InvalidDimension {
                nrows: a.nrows(),
                ncols: a.ncols(),
                rhs_len: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Create a system from row-wise coefficient data, e.g. rows parsed from
    /// text input. Unlike [`SquareSystem::new`], this entry point can observe
    /// ragged input, where individual rows differ in length.
    ///
    /// # Errors
    /// Fails with [`SystemError::InvalidDimension`] if any row length differs
    /// from the number of rows, or if `b`'s length does.
    pub fn from_rows(rows: Vec<Vec<ScalarType>>, b: Vec<ScalarType>) -> Result<Self, SystemError> {
        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(SystemError::InvalidDimension {
                    nrows: n,
                    ncols: row.len(),
                    rhs_len: b.len(),
                });
            }
        }
        let a = DMatrix::from_row_iterator(n, n, rows.into_iter().flatten());
        Self::new(a, DVector::from(b))
    }

    /// the order N of this N-by-N system
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// the coefficient matrix `$A$`
    pub fn matrix(&self) -> &DMatrix<ScalarType> {
        &self.a
    }

    /// the right hand side vector `$\vec{b}$`
    pub fn rhs(&self) -> &DVector<ScalarType> {
        &self.b
    }

    /// Solve this system by LU factorization with partial pivoting, forward
    /// elimination and back substitution, in that fixed order. All three steps
    /// operate in place: afterwards the matrix storage holds the combined LU
    /// factors and the right hand side storage holds the solution `$\vec{x}$`.
    ///
    /// Rows of `$A$` and the corresponding entries of `$\vec{b}$` may have been
    /// reordered by pivoting relative to the order they were constructed with.
    ///
    /// # Errors
    /// Fails with [`SystemError::SingularMatrix`] if the coefficient matrix is
    /// singular. The system is consumed either way; after a failure, construct
    /// a fresh system from corrected input instead of retrying.
    pub fn solve(mut self) -> Result<SolvedSystem<ScalarType>, SystemError> {
        factorize(&mut self.a, &mut self.b)?;
        forward_eliminate(&self.a, &mut self.b);
        back_substitute(&self.a, &mut self.b)?;
        Ok(SolvedSystem {
            lu: self.a,
            x: self.b,
        })
    }
}

/// The terminal state of a solved square system.
///
/// Holds the same storage as the [`SquareSystem`] it was produced from: the
/// matrix now contains the combined LU factorization and the former right hand
/// side contains the solution vector. Both are exposed as read-only views with
/// raw floating-point values; rounding for display is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedSystem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// the combined LU factors: L strictly below the diagonal with an implicit
    /// unit diagonal, U on and above
    lu: DMatrix<ScalarType>,
    /// the solution vector x
    x: DVector<ScalarType>,
}

impl<ScalarType> SolvedSystem<ScalarType>
where
    ScalarType: Scalar + Float,
{
    /// Solving an already solved system is a no-op that returns the same state
    /// unchanged. No recomputation takes place, so the exposed factorization
    /// and solution values are bit-identical before and after.
    pub fn solve(self) -> SolvedSystem<ScalarType> {
        self
    }

    /// the order N of the solved N-by-N system
    pub fn order(&self) -> usize {
        self.lu.nrows()
    }

    /// The factored matrix in combined LU storage. The entries strictly below
    /// the diagonal are the multipliers of `$L$` (unit diagonal implicit), the
    /// diagonal and above hold `$U$`. Row order reflects any pivoting swaps.
    pub fn factorization(&self) -> &DMatrix<ScalarType> {
        &self.lu
    }

    /// the solution vector `$\vec{x}$`
    pub fn solution(&self) -> &DVector<ScalarType> {
        &self.x
    }
}

impl<ScalarType> fmt::Display for SquareSystem<ScalarType>
where
    ScalarType: Scalar + Float + fmt::Display,
{
    /// Render the system for console display: the matrix rows at two decimal
    /// places followed by the right hand side entries, one `b<i> = ...` line
    /// each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nA =")?;
        write_matrix(f, &self.a)?;
        writeln!(f)?;
        for (i, entry) in self.b.iter().enumerate() {
            writeln!(f, "b{} = {:.2}", i, entry)?;
        }
        Ok(())
    }
}

impl<ScalarType> fmt::Display for SolvedSystem<ScalarType>
where
    ScalarType: Scalar + Float + fmt::Display,
{
    /// Render the solved state: the combined LU storage at two decimal places
    /// and the solution entries at six, one `x<i> = ...` line each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nLU Factorization =")?;
        write_matrix(f, &self.lu)?;
        writeln!(f)?;
        for (i, entry) in self.x.iter().enumerate() {
            writeln!(f, "x{} = {:.6}", i, entry)?;
        }
        Ok(())
    }
}

fn write_matrix<ScalarType>(
    f: &mut fmt::Formatter<'_>,
    matrix: &DMatrix<ScalarType>,
) -> fmt::Result
where
    ScalarType: Scalar + Float + fmt::Display,
{
    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            write!(f, "{:.2} ", matrix[(i, j)])?;
        }
        writeln!(f)?;
    }
    Ok(())
}
