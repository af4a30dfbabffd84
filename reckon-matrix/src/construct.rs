//! Matrix construction functions: matrix, identity, zeros, random_matrix, resize

use crate::helpers::*;
use crate::types::{Matrix, MAX_DIM};
use reckon_plugin::prelude::*;

// ============ matrix ============

pub struct MatrixFn;

static MATRIX_ARGS: [ArgMeta; 1] = [ArgMeta::required(
    "data",
    "List",
    "Nested list of numbers [[row1], [row2], ...]",
)];

static MATRIX_EXAMPLES: [&str; 2] = [
    "matrix([[1,2,3],[4,5,6]]) → 2×3 matrix",
    "matrix([[1,2],[3,4]]) → 2×2 matrix",
];

static MATRIX_RELATED: [&str; 3] = ["identity", "zeros", "random_matrix"];

impl FunctionPlugin for MatrixFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matrix",
            description: "Create a matrix from a nested list",
            usage: "matrix(data)",
            args: &MATRIX_ARGS,
            returns: "Matrix",
            examples: &MATRIX_EXAMPLES,
            category: "matrix/construct",
            related: &MATRIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(ReckonError::arg_count("matrix", 1, 0));
        }

        match extract_matrix(&args[0], "matrix", "data") {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ identity ============

pub struct IdentityFn;

static IDENTITY_ARGS: [ArgMeta; 1] =
    [ArgMeta::required("n", "Number", "Size of the identity matrix")];

static IDENTITY_EXAMPLES: [&str; 1] = ["identity(3) → 3×3 identity matrix"];

static IDENTITY_RELATED: [&str; 2] = ["zeros", "matrix"];

impl FunctionPlugin for IdentityFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "identity",
            description: "Create an n×n identity matrix",
            usage: "identity(n)",
            args: &IDENTITY_ARGS,
            returns: "Matrix",
            examples: &IDENTITY_EXAMPLES,
            category: "matrix/construct",
            related: &IDENTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(ReckonError::arg_count("identity", 1, 0));
        }

        let n = match extract_usize(&args[0], "identity", "n") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        match Matrix::identity(n) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ zeros ============

pub struct ZerosFn;

static ZEROS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("rows", "Number", "Number of rows"),
    ArgMeta::required("cols", "Number", "Number of columns"),
];

static ZEROS_EXAMPLES: [&str; 1] = ["zeros(2, 3) → 2×3 zero matrix"];

static ZEROS_RELATED: [&str; 2] = ["identity", "matrix"];

impl FunctionPlugin for ZerosFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "zeros",
            description: "Create a rows×cols matrix of zeros",
            usage: "zeros(rows, cols)",
            args: &ZEROS_ARGS,
            returns: "Matrix",
            examples: &ZEROS_EXAMPLES,
            category: "matrix/construct",
            related: &ZEROS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("zeros", 2, args.len()));
        }

        let rows = match extract_usize(&args[0], "zeros", "rows") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let cols = match extract_usize(&args[1], "zeros", "cols") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        match Matrix::zeros(rows, cols) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ random_matrix ============

pub struct RandomMatrixFn;

static RANDOM_MATRIX_ARGS: [ArgMeta; 5] = [
    ArgMeta::required("rows", "Number", "Number of rows"),
    ArgMeta::required("cols", "Number", "Number of columns"),
    ArgMeta::optional("min", "Number", "Minimum value", "0"),
    ArgMeta::optional("max", "Number", "Maximum value", "10"),
    ArgMeta::optional("seed", "Number", "Random seed for reproducibility", "12345"),
];

static RANDOM_MATRIX_EXAMPLES: [&str; 1] = ["random_matrix(3, 3, 0, 10) → random 3×3"];

static RANDOM_MATRIX_RELATED: [&str; 2] = ["zeros", "matrix"];

impl FunctionPlugin for RandomMatrixFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "random_matrix",
            description: "Create a matrix of uniform random values",
            usage: "random_matrix(rows, cols, [min], [max], [seed])",
            args: &RANDOM_MATRIX_ARGS,
            returns: "Matrix",
            examples: &RANDOM_MATRIX_EXAMPLES,
            category: "matrix/construct",
            related: &RANDOM_MATRIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("random_matrix", 2, args.len()));
        }

        let rows = match extract_usize(&args[0], "random_matrix", "rows") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let cols = match extract_usize(&args[1], "random_matrix", "cols") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        let min = args.get(2).and_then(|v| v.as_number()).unwrap_or(0.0);
        let max = args.get(3).and_then(|v| v.as_number()).unwrap_or(10.0);
        let seed = args
            .get(4)
            .and_then(|v| v.as_number())
            .map(|n| n as u64)
            .unwrap_or(12345);

        if max < min {
            return Value::Error(ReckonError::domain_error("random_matrix: max must be >= min"));
        }

        // Simple LCG keeps presets reproducible without an RNG dependency
        let mut state = seed;
        let range = max - min;
        let data: Vec<Vec<f64>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        state = state.wrapping_mul(1103515245).wrapping_add(12345);
                        let r = ((state >> 16) & 0x7fff) as f64 / 32768.0;
                        min + r * range
                    })
                    .collect()
            })
            .collect();

        match Matrix::from_rows(data) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ resize ============

pub struct ResizeFn;

static RESIZE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("matrix", "Matrix", "Matrix to resize"),
    ArgMeta::required("rows", "Number", "New number of rows (1-10)"),
    ArgMeta::required("cols", "Number", "New number of columns (1-10)"),
];

static RESIZE_EXAMPLES: [&str; 1] =
    ["resize(matrix([[1,2],[3,4]]), 3, 3) → 3×3, overlap kept, rest zero"];

static RESIZE_RELATED: [&str; 2] = ["matrix", "zeros"];

impl FunctionPlugin for ResizeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "resize",
            description: "Resize a matrix, keeping the overlapping cells and zero-filling the rest",
            usage: "resize(matrix, rows, cols)",
            args: &RESIZE_ARGS,
            returns: "Matrix",
            examples: &RESIZE_EXAMPLES,
            category: "matrix/construct",
            related: &RESIZE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 3 {
            return Value::Error(ReckonError::arg_count("resize", 3, args.len()));
        }

        let m = match extract_matrix(&args[0], "resize", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let rows = match extract_usize(&args[1], "resize", "rows") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };
        let cols = match extract_usize(&args[2], "resize", "cols") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
            return Value::Error(ReckonError::domain_error(format!(
                "resize: dimensions must be between 1 and {}",
                MAX_DIM
            )));
        }

        let data: Vec<Vec<f64>> = (0..rows)
            .map(|i| (0..cols).map(|j| m.get(i, j).unwrap_or(0.0)).collect())
            .collect();

        match Matrix::from_rows(data) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}
