//! Core matrix type
//!
//! The calculator UI edits matrices as loosely-typed nested arrays; here
//! the matrix is an explicit fixed-shape value of 64-bit floats, validated
//! on every constructor call. Matrices are immutable: operations produce
//! new matrices rather than mutating inputs.

use nalgebra::DMatrix;
use reckon_core::{ReckonError, Value};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Largest matrix side the application accepts (UI offers 1-10 per side)
pub const MAX_DIM: usize = 10;

/// Largest exponent `mat_power` accepts; power is computed by repeated
/// multiplication, so the exponent bounds the work directly
pub const MAX_EXPONENT: i64 = 100;

/// Error type for matrix operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("dimension mismatch: {a_rows}×{a_cols} and {b_rows}×{b_cols} are incompatible")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    #[error("operation requires a square matrix, got {rows}×{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("exponent must be a non-negative integer, got {0}")]
    InvalidExponent(i64),

    #[error("matrix is singular, inverse does not exist")]
    Singular,

    #[error("invalid shape: {0}")]
    InvalidShape(String),
}

impl From<MatrixError> for ReckonError {
    fn from(err: MatrixError) -> Self {
        let message = err.to_string();
        match err {
            MatrixError::DimensionMismatch { .. } => ReckonError::dimension_mismatch(message),
            MatrixError::NotSquare { .. } => ReckonError::not_square(message),
            MatrixError::InvalidExponent(_) => ReckonError::invalid_exponent(message),
            MatrixError::Singular => ReckonError::singular_matrix(message),
            MatrixError::InvalidShape(_) => ReckonError::invalid_shape(message),
        }
    }
}

/// A rows×cols matrix of 64-bit floats
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Create a matrix from row-major nested data
    ///
    /// Rejects empty input, ragged rows, and sides above [`MAX_DIM`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::InvalidShape("matrix cannot be empty".to_string()));
        }

        let n_rows = rows.len();
        let n_cols = rows[0].len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::InvalidShape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }

        Self::check_bounds(n_rows, n_cols)?;

        let data = DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i][j]);
        Ok(Self { data })
    }

    /// The n×n identity matrix
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::check_bounds(n, n)?;
        Ok(Self { data: DMatrix::identity(n, n) })
    }

    /// The rows×cols all-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::check_bounds(rows, cols)?;
        Ok(Self { data: DMatrix::zeros(rows, cols) })
    }

    fn check_bounds(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape("dimensions must be at least 1".to_string()));
        }
        if rows > MAX_DIM || cols > MAX_DIM {
            return Err(MatrixError::InvalidShape(format!(
                "{}×{} exceeds the {}×{} limit",
                rows, cols, MAX_DIM, MAX_DIM
            )));
        }
        Ok(())
    }

    /// Wrap an already-validated storage matrix
    pub(crate) fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    pub(crate) fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Element at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[(row, col)])
        } else {
            None
        }
    }

    /// Row-major nested copy of the data
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.data[(i, j)]).collect())
            .collect()
    }

    /// Element-wise comparison within an absolute tolerance
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[(i, j)])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Encode a matrix as a Value object the UI can render as a grid
impl From<Matrix> for Value {
    fn from(m: Matrix) -> Value {
        let mut obj = HashMap::new();
        obj.insert("type".to_string(), Value::Text("Matrix".to_string()));
        obj.insert("rows".to_string(), Value::Number(m.rows() as f64));
        obj.insert("cols".to_string(), Value::Number(m.cols() as f64));

        let data: Vec<Value> = m
            .to_nested()
            .into_iter()
            .map(|row| Value::List(row.into_iter().map(Value::Number).collect()))
            .collect();
        obj.insert("data".to_string(), Value::List(data));

        Value::Object(obj)
    }
}
