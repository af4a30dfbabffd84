//! Matrix analysis functions: determinant, inverse, rank, trace, shape

use crate::helpers::extract_matrix;
use reckon_plugin::prelude::*;

// ============================================================================
// DETERMINANT
// ============================================================================

pub struct DeterminantFn;

static DET_ARGS: [ArgMeta; 1] = [ArgMeta::required("matrix", "Matrix", "Square matrix")];

static DET_EXAMPLES: [&str; 2] = [
    "determinant([[1,2],[3,4]]) → -2",
    "determinant(identity(3)) → 1",
];

static DET_RELATED: [&str; 2] = ["inverse", "rank"];

impl FunctionPlugin for DeterminantFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "determinant",
            description: "Determinant of a square matrix",
            usage: "determinant(matrix)",
            args: &DET_ARGS,
            returns: "Number",
            examples: &DET_EXAMPLES,
            category: "matrix/analysis",
            related: &DET_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(ReckonError::arg_count("determinant", 1, args.len()));
        }

        let matrix = match extract_matrix(&args[0], "determinant", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match matrix.determinant() {
            Ok(det) => Value::Number(det),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============================================================================
// INVERSE
// ============================================================================

pub struct InverseFn;

static INVERSE_ARGS: [ArgMeta; 1] =
    [ArgMeta::required("matrix", "Matrix", "Square, non-singular matrix")];

static INVERSE_EXAMPLES: [&str; 1] = ["inverse([[2,0],[0,2]]) → [[0.5,0],[0,0.5]]"];

static INVERSE_RELATED: [&str; 2] = ["determinant", "matmul"];

impl FunctionPlugin for InverseFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "inverse",
            description: "Inverse of a square matrix via Gauss-Jordan elimination",
            usage: "inverse(matrix)",
            args: &INVERSE_ARGS,
            returns: "Matrix",
            examples: &INVERSE_EXAMPLES,
            category: "matrix/analysis",
            related: &INVERSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(ReckonError::arg_count("inverse", 1, args.len()));
        }

        let matrix = match extract_matrix(&args[0], "inverse", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match matrix.inverse() {
            Ok(inv) => inv.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============================================================================
// RANK
// ============================================================================

pub struct RankFn;

static RANK_ARGS: [ArgMeta; 1] = [ArgMeta::required("matrix", "Matrix", "Matrix to analyze")];

static RANK_EXAMPLES: [&str; 2] = [
    "rank(identity(3)) → 3",
    "rank([[1,2,3],[2,4,6]]) → 1",
];

static RANK_RELATED: [&str; 2] = ["determinant", "inverse"];

impl FunctionPlugin for RankFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "rank",
            description: "Rank of a matrix via row-echelon reduction",
            usage: "rank(matrix)",
            args: &RANK_ARGS,
            returns: "Number",
            examples: &RANK_EXAMPLES,
            category: "matrix/analysis",
            related: &RANK_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(ReckonError::arg_count("rank", 1, args.len()));
        }

        let matrix = match extract_matrix(&args[0], "rank", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        Value::Number(matrix.rank() as f64)
    }
}

// ============================================================================
// TRACE
// ============================================================================

pub struct TraceFn;

static TRACE_ARGS: [ArgMeta; 1] = [ArgMeta::required("matrix", "Matrix", "Square matrix")];

static TRACE_EXAMPLES: [&str; 2] = [
    "trace(identity(3)) → 3",
    "trace([[1,2],[3,4]]) → 5",
];

static TRACE_RELATED: [&str; 2] = ["determinant", "shape"];

impl FunctionPlugin for TraceFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "trace",
            description: "Sum of diagonal elements of a square matrix",
            usage: "trace(matrix)",
            args: &TRACE_ARGS,
            returns: "Number",
            examples: &TRACE_EXAMPLES,
            category: "matrix/analysis",
            related: &TRACE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(ReckonError::arg_count("trace", 1, args.len()));
        }

        let matrix = match extract_matrix(&args[0], "trace", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match matrix.trace() {
            Ok(t) => Value::Number(t),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============================================================================
// SHAPE
// ============================================================================

pub struct ShapeFn;

static SHAPE_ARGS: [ArgMeta; 1] = [ArgMeta::required("matrix", "Matrix", "Matrix to query")];

static SHAPE_EXAMPLES: [&str; 1] = ["shape([[1,2,3],[4,5,6]]) → [2, 3]"];

static SHAPE_RELATED: [&str; 2] = ["matrix", "resize"];

impl FunctionPlugin for ShapeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "shape",
            description: "Matrix dimensions as [rows, cols]",
            usage: "shape(matrix)",
            args: &SHAPE_ARGS,
            returns: "List",
            examples: &SHAPE_EXAMPLES,
            category: "matrix/analysis",
            related: &SHAPE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() != 1 {
            return Value::Error(ReckonError::arg_count("shape", 1, args.len()));
        }

        let matrix = match extract_matrix(&args[0], "shape", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        Value::List(vec![
            Value::Number(matrix.rows() as f64),
            Value::Number(matrix.cols() as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ctx() -> EvalContext {
        EvalContext::new(Arc::new(PluginRegistry::new()))
    }

    fn nested(rows: &[&[f64]]) -> Value {
        Value::List(
            rows.iter()
                .map(|r| Value::List(r.iter().map(|&n| Value::Number(n)).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_determinant_fn() {
        let result = DeterminantFn.call(&[nested(&[&[1.0, 2.0], &[3.0, 4.0]])], &ctx());
        assert_eq!(result.as_number(), Some(-2.0));
    }

    #[test]
    fn test_determinant_not_square() {
        let result = DeterminantFn.call(&[nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::NOT_SQUARE);
    }

    #[test]
    fn test_inverse_fn() {
        let result = InverseFn.call(&[nested(&[&[2.0, 0.0], &[0.0, 2.0]])], &ctx());
        let data = result.get("data");
        let first = data.as_list().unwrap()[0].as_list().unwrap()[0].as_number().unwrap();
        assert!((first - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_singular_reports_the_right_error() {
        // Two identical rows: determinant 0
        let result = InverseFn.call(
            &[nested(&[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])],
            &ctx(),
        );
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::SINGULAR_MATRIX);
        assert!(err.message.contains("singular"));
    }

    #[test]
    fn test_rank_fn() {
        let result = RankFn.call(
            &[nested(&[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])],
            &ctx(),
        );
        assert_eq!(result.as_number(), Some(2.0));
    }

    #[test]
    fn test_trace_fn() {
        let result = TraceFn.call(&[nested(&[&[1.0, 2.0], &[3.0, 4.0]])], &ctx());
        assert_eq!(result.as_number(), Some(5.0));
    }

    #[test]
    fn test_trace_not_square() {
        let result = TraceFn.call(&[nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::NOT_SQUARE);
    }

    #[test]
    fn test_shape_fn() {
        let result = ShapeFn.call(&[nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])], &ctx());
        let dims = result.as_list().unwrap();
        assert_eq!(dims[0].as_number(), Some(2.0));
        assert_eq!(dims[1].as_number(), Some(3.0));
    }
}
