#[cfg(test)]
mod test;

use crate::errors::SystemError;
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;

/// Factorize the square matrix `a` in place into its combined LU form, applying
/// partial pivoting to `a` and `b` together.
///
/// After this returns successfully, the entries of `a` strictly below the
/// diagonal hold the multipliers of the lower-triangular factor `$L$` (its unit
/// diagonal is implicit) and the diagonal and everything above hold the
/// upper-triangular factor `$U$`. Row swaps performed while pivoting reorder
/// both `a` and `b` directly; no permutation record is kept, so the caller must
/// not assume the original row order is recoverable.
///
/// When a pivot entry is exactly zero, the rows below it in the same column are
/// searched top to bottom, including the last row, and the first row with a
/// nonzero entry is swapped up. If the entire remainder of the column is zero
/// the matrix is singular and the function fails with
/// [`SystemError::SingularMatrix`], leaving `a` and `b` partially mutated and
/// algorithmically meaningless.
pub fn factorize<ScalarType>(
    a: &mut DMatrix<ScalarType>,
    b: &mut DVector<ScalarType>,
) -> Result<(), SystemError>
where
    ScalarType: Scalar + Float,
{
    let n = a.nrows();
    for k in 0..n.saturating_sub(1) {
        if a[(k, k)] == ScalarType::zero() {
            let pivot = (k + 1..n)
                .find(|&p| a[(p, k)] != ScalarType::zero())
                .ok_or(SystemError::SingularMatrix { column: k })?;
            a.swap_rows(k, pivot);
            b.swap_rows(k, pivot);
        }
        for i in k + 1..n {
            let f = a[(i, k)] / a[(k, k)];
            // the freed cell below the diagonal becomes the L entry for (i,k)
            a[(i, k)] = f;
            for j in k + 1..n {
                a[(i, j)] = a[(i, j)] - f * a[(k, j)];
            }
        }
    }
    Ok(())
}

/// Solve `$L\vec{y} = \vec{b}$` in place on `b`, where `$L$` is the implicit
/// unit-diagonal lower-triangular factor stored below the diagonal of the
/// factorized `a`. No divisions occur because the diagonal of `$L$` is one.
pub fn forward_eliminate<ScalarType>(a: &DMatrix<ScalarType>, b: &mut DVector<ScalarType>)
where
    ScalarType: Scalar + Float,
{
    for i in 1..a.nrows() {
        for j in 0..i {
            b[i] = b[i] - a[(i, j)] * b[j];
        }
    }
}

/// Solve `$U\vec{x} = \vec{y}$` in place on `b`, where `$U$` is the
/// upper-triangular factor stored on and above the diagonal of the factorized
/// `a`. Proceeds from the last equation to the first.
///
/// A successful factorization guarantees nonzero diagonal entries, but an
/// update step may still underflow one to exactly zero; that case fails with
/// [`SystemError::SingularMatrix`] instead of dividing by zero.
pub fn back_substitute<ScalarType>(
    a: &DMatrix<ScalarType>,
    b: &mut DVector<ScalarType>,
) -> Result<(), SystemError>
where
    ScalarType: Scalar + Float,
{
    for i in (0..a.nrows()).rev() {
        for j in i + 1..a.nrows() {
            b[i] = b[i] - a[(i, j)] * b[j];
        }
        if a[(i, i)] == ScalarType::zero() {
            return Err(SystemError::SingularMatrix { column: i });
        }
        b[i] = b[i] / a[(i, i)];
    }
    Ok(())
}
