//! Row-reduction engine: LU decomposition, determinant, inverse, rank, trace
//!
//! Determinant rides on LU with partial pivoting; inverse uses
//! Gauss-Jordan on the augmented `[A | I]`; rank uses plain row-echelon
//! reduction. The epsilon thresholds are named constants so tests can
//! probe boundary behavior precisely.

use crate::types::{Matrix, MatrixError};
use nalgebra::DMatrix;

/// A determinant below this magnitude is treated as zero for inversion
pub const SINGULAR_EPS: f64 = 1e-10;

/// A candidate pivot below this magnitude counts as a zero column entry
pub const PIVOT_EPS: f64 = 1e-10;

/// Result of `P·A = L·U` with partial pivoting
///
/// `lower` has a unit diagonal; `permutation[i]` is the source row of
/// output row `i`; `sign` flips with every row swap and carries the
/// determinant sign of `P`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    pub lower: Matrix,
    pub upper: Matrix,
    pub permutation: Vec<usize>,
    pub sign: f64,
}

impl Matrix {
    /// LU decomposition with partial pivoting
    ///
    /// At each pivot column the largest-magnitude candidate in the
    /// remaining rows is swapped into place before elimination. A zero
    /// pivot column is left as-is; the zero simply stays on the diagonal
    /// of `U` and the determinant product reflects it.
    pub fn lu(&self) -> Result<LuFactors, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }

        let n = self.rows();
        let mut upper = self.as_dmatrix().clone();
        let mut lower = DMatrix::<f64>::identity(n, n);
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for i in 0..n {
            // Partial pivoting: largest |value| in column i among rows i..n
            let mut pivot_row = i;
            for r in (i + 1)..n {
                if upper[(r, i)].abs() > upper[(pivot_row, i)].abs() {
                    pivot_row = r;
                }
            }

            if pivot_row != i {
                upper.swap_rows(i, pivot_row);
                permutation.swap(i, pivot_row);
                sign = -sign;
                // Multipliers recorded so far move with their rows
                for c in 0..i {
                    let tmp = lower[(i, c)];
                    lower[(i, c)] = lower[(pivot_row, c)];
                    lower[(pivot_row, c)] = tmp;
                }
            }

            let pivot = upper[(i, i)];
            if pivot.abs() <= PIVOT_EPS {
                continue;
            }

            for r in (i + 1)..n {
                let factor = upper[(r, i)] / pivot;
                lower[(r, i)] = factor;
                for c in i..n {
                    upper[(r, c)] -= factor * upper[(i, c)];
                }
            }
        }

        Ok(LuFactors {
            lower: Matrix::from_dmatrix(lower),
            upper: Matrix::from_dmatrix(upper),
            permutation,
            sign,
        })
    }

    /// Determinant of a square matrix
    ///
    /// 1×1 and 2×2 use the closed forms; larger matrices use LU, where
    /// `det = sign × Π U[i][i]`. A (near-)singular matrix simply yields a
    /// (near-)zero product, never an error.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }

        let a = self.as_dmatrix();
        match self.rows() {
            1 => Ok(a[(0, 0)]),
            2 => Ok(a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)]),
            _ => {
                let factors = self.lu()?;
                let u = factors.upper.as_dmatrix();
                let mut det = factors.sign;
                for i in 0..self.rows() {
                    det *= u[(i, i)];
                }
                Ok(det)
            }
        }
    }

    /// Inverse of a square, non-singular matrix
    ///
    /// Checks the determinant first; a magnitude below [`SINGULAR_EPS`]
    /// fails with `Singular` rather than producing garbage. Otherwise the
    /// augmented `[A | I]` is reduced by Gauss-Jordan elimination with
    /// partial pivoting and the right half is the inverse.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }

        let det = self.determinant()?;
        if det.abs() < SINGULAR_EPS {
            return Err(MatrixError::Singular);
        }

        let n = self.rows();
        let mut aug = DMatrix::<f64>::zeros(n, 2 * n);
        aug.view_mut((0, 0), (n, n)).copy_from(self.as_dmatrix());
        for i in 0..n {
            aug[(i, n + i)] = 1.0;
        }

        for col in 0..n {
            let mut pivot_row = col;
            for r in (col + 1)..n {
                if aug[(r, col)].abs() > aug[(pivot_row, col)].abs() {
                    pivot_row = r;
                }
            }
            if pivot_row != col {
                aug.swap_rows(col, pivot_row);
            }

            let pivot = aug[(col, col)];
            if pivot.abs() < PIVOT_EPS {
                // Determinant check above makes this unreachable in practice
                return Err(MatrixError::Singular);
            }

            for c in 0..(2 * n) {
                aug[(col, c)] /= pivot;
            }

            // Eliminate this column in every other row, not just below
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = aug[(r, col)];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..(2 * n) {
                    aug[(r, c)] -= factor * aug[(col, c)];
                }
            }
        }

        let inv = aug.view((0, n), (n, n)).clone_owned();
        Ok(Matrix::from_dmatrix(inv))
    }

    /// Rank via row-echelon reduction; defined for any shape
    pub fn rank(&self) -> usize {
        let mut a = self.as_dmatrix().clone();
        let (rows, cols) = (a.nrows(), a.ncols());

        let mut pivot_row = 0;
        for col in 0..cols {
            if pivot_row == rows {
                break;
            }

            // Largest candidate at or below the current pivot row
            let mut best = pivot_row;
            for r in (pivot_row + 1)..rows {
                if a[(r, col)].abs() > a[(best, col)].abs() {
                    best = r;
                }
            }
            if a[(best, col)].abs() <= PIVOT_EPS {
                continue;
            }

            if best != pivot_row {
                a.swap_rows(pivot_row, best);
            }

            let pivot = a[(pivot_row, col)];
            for r in (pivot_row + 1)..rows {
                let factor = a[(r, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for c in col..cols {
                    a[(r, c)] -= factor * a[(pivot_row, c)];
                }
            }

            pivot_row += 1;
        }

        pivot_row
    }

    /// Sum of diagonal elements of a square matrix
    pub fn trace(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }
        let a = self.as_dmatrix();
        Ok((0..self.rows()).map(|i| a[(i, i)]).sum())
    }
}
