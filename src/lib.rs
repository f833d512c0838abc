#![warn(missing_docs)]
//!
//! # Introduction
//!
//! This crate solves dense square linear systems `$A\vec{x} = \vec{b}$` for the
//! vector `$\vec{x}$`, where `$A$` is an `$N \times N$` coefficient matrix and
//! `$\vec{b}$` is a length-`$N$` right hand side. The solver performs an in-place
//! LU factorization of `$A$` with partial pivoting, followed by forward
//! elimination and back substitution.
//!
//! The factorization overwrites `$A$` with both triangular factors at once: the
//! entries strictly below the diagonal hold the lower-triangular factor `$L$`
//! (whose unit diagonal is implicit), while the diagonal and everything above it
//! hold the upper-triangular factor `$U$`. Row swaps performed while pivoting are
//! applied directly to the working copies of `$A$` and `$\vec{b}$`, so no separate
//! permutation matrix is recorded and the original row order is not recoverable
//! from the factored result.
//!
//! # Usage
//!
//! Construct a [`SquareSystem`](crate::system::SquareSystem) from a coefficient
//! matrix and a right hand side, then call
//! [`solve`](crate::system::SquareSystem::solve). Solving consumes the system and
//! returns a [`SolvedSystem`](crate::system::SolvedSystem), which exposes the
//! combined LU storage and the solution vector as read-only views. Calling
//! [`solve`](crate::system::SolvedSystem::solve) on an already solved system is a
//! no-op that hands the same state back.
//!
//! ```rust
//! use nalgebra::{dmatrix, dvector};
//! use square_system::prelude::*;
//!
//! let a: nalgebra::DMatrix<f64> = dmatrix![
//!     2., 1., 1.;
//!     1., 3., 2.;
//!     1., 0., 0.;
//! ];
//! let b = dvector![4., 5., 6.];
//!
//! let system = SquareSystem::new(a, b).unwrap();
//! let solved = system.solve().unwrap();
//! // x = (6, 15, -23)
//! let x = solved.solution();
//! assert!((x[0] - 6.).abs() < 1e-9);
//! ```
//!
//! # Errors
//!
//! Construction fails with [`SystemError::InvalidDimension`](crate::errors::SystemError)
//! when the matrix is not square or the right hand side length does not match its
//! order. Solving fails with [`SystemError::SingularMatrix`](crate::errors::SystemError)
//! when some pivot column has no nonzero entry left to swap in, which means the
//! system has no unique solution. A failed solve consumes the system; the caller
//! constructs a fresh one with corrected input rather than retrying on the
//! partially factored storage.
//!
//! Non-finite entries (NaN or infinities) are not rejected up front and will
//! propagate into the computed factors and solution.

/// error types returned by construction and solving
pub mod errors;
/// the in-place factorization, elimination and substitution routines
pub mod factorization;
/// commonly useful imports
pub mod prelude;
/// an interactive console session for entering and solving systems
pub mod session;
/// the square system type and its solved counterpart
pub mod system;
