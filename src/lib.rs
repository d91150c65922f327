//! __densolve__ is a dense direct solver for square linear systems $Ax = b$.
//!
//! For each input matrix the solver classifies $A$ and picks a factorization:
//! symmetric positive definite matrices are factored as $A = LL^T$ (Cholesky),
//! and all other square matrices as $A = LU$ with unit lower triangular $L$
//! (Doolittle's method, computed without row pivoting).  The solution is then
//! recovered by forward and back substitution against the triangular factors.
//!
//! ```
//! use densolve::algebra::Matrix;
//! use densolve::solver::{DirectSolver, SolveMethod};
//!
//! let A = Matrix::from(&[
//!     [4.0, 1.0], //
//!     [1.0, 3.0], //
//! ]);
//! let b = [1.0, 2.0];
//!
//! let solution = DirectSolver::default().solve(&A, &b).unwrap();
//! assert_eq!(solution.method, SolveMethod::Cholesky);
//! ```
//!
//! The Doolittle path performs no row interchange, matching the classical
//! textbook elimination.  Systems whose pivot sequence encounters a zero (or
//! near zero) leading entry are reported as failures rather than reordered;
//! see [`DoolittleEngine`](crate::algebra::DoolittleEngine).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod solver;
