//! Elementary matrix operations: add, sub, multiply, transpose, power
//!
//! Direct formula implementations with strict dimension checking. Inputs
//! are bounded to MAX_DIM per side, so the textbook algorithms are more
//! than fast enough; no blocking or other optimization is applied.

use crate::types::{Matrix, MatrixError};
use nalgebra::DMatrix;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MatrixError::DimensionMismatch {
                a_rows: self.rows(),
                a_cols: self.cols(),
                b_rows: other.rows(),
                b_cols: other.cols(),
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { rows: self.rows(), cols: self.cols() });
        }
        Ok(())
    }

    /// Element-wise sum; both operands must have the same shape
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(other)?;
        Ok(Matrix::from_dmatrix(self.as_dmatrix() + other.as_dmatrix()))
    }

    /// Element-wise difference; both operands must have the same shape
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(other)?;
        Ok(Matrix::from_dmatrix(self.as_dmatrix() - other.as_dmatrix()))
    }

    /// Matrix product; requires `self.cols() == other.rows()`
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                a_rows: self.rows(),
                a_cols: self.cols(),
                b_rows: other.rows(),
                b_cols: other.cols(),
            });
        }

        let a = self.as_dmatrix();
        let b = other.as_dmatrix();
        let mut out = DMatrix::zeros(self.rows(), other.cols());
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += a[(i, k)] * b[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(Matrix::from_dmatrix(out))
    }

    /// Transpose; always succeeds
    pub fn transpose(&self) -> Matrix {
        Matrix::from_dmatrix(self.as_dmatrix().transpose())
    }

    /// Integer power by repeated multiplication
    ///
    /// `k == 0` yields the identity of the same size, `k == 1` a copy.
    /// Requires a square matrix and a non-negative exponent.
    pub fn pow(&self, k: i64) -> Result<Matrix, MatrixError> {
        self.check_square()?;
        if k < 0 {
            return Err(MatrixError::InvalidExponent(k));
        }

        let n = self.rows();
        if k == 0 {
            return Ok(Matrix::from_dmatrix(DMatrix::identity(n, n)));
        }

        let mut result = self.clone();
        for _ in 1..k {
            result = result.mul(self)?;
        }
        Ok(result)
    }
}
