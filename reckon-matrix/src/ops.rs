//! Binary and structural matrix operations: mat_add, mat_sub, matmul, transpose, mat_power

use crate::helpers::*;
use crate::types::MAX_EXPONENT;
use reckon_plugin::prelude::*;

// ============ mat_add ============

pub struct MatAddFn;

static MAT_ADD_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Matrix", "First matrix"),
    ArgMeta::required("b", "Matrix", "Second matrix"),
];

static MAT_ADD_EXAMPLES: [&str; 1] = ["mat_add([[1,2],[3,4]], [[1,1],[1,1]]) → [[2,3],[4,5]]"];

static MAT_ADD_RELATED: [&str; 2] = ["mat_sub", "matmul"];

impl FunctionPlugin for MatAddFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mat_add",
            description: "Element-wise matrix addition",
            usage: "mat_add(a, b)",
            args: &MAT_ADD_ARGS,
            returns: "Matrix",
            examples: &MAT_ADD_EXAMPLES,
            category: "matrix/ops",
            related: &MAT_ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("mat_add", 2, args.len()));
        }

        let a = match extract_matrix(&args[0], "mat_add", "a") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let b = match extract_matrix(&args[1], "mat_add", "b") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match a.add(&b) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ mat_sub ============

pub struct MatSubFn;

static MAT_SUB_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Matrix", "First matrix"),
    ArgMeta::required("b", "Matrix", "Second matrix"),
];

static MAT_SUB_EXAMPLES: [&str; 1] = ["mat_sub([[2,3],[4,5]], [[1,1],[1,1]]) → [[1,2],[3,4]]"];

static MAT_SUB_RELATED: [&str; 2] = ["mat_add", "matmul"];

impl FunctionPlugin for MatSubFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mat_sub",
            description: "Element-wise matrix subtraction",
            usage: "mat_sub(a, b)",
            args: &MAT_SUB_ARGS,
            returns: "Matrix",
            examples: &MAT_SUB_EXAMPLES,
            category: "matrix/ops",
            related: &MAT_SUB_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("mat_sub", 2, args.len()));
        }

        let a = match extract_matrix(&args[0], "mat_sub", "a") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let b = match extract_matrix(&args[1], "mat_sub", "b") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match a.sub(&b) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ matmul ============

pub struct MatmulFn;

static MATMUL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("a", "Matrix", "First matrix (m×n)"),
    ArgMeta::required("b", "Matrix", "Second matrix (n×p)"),
];

static MATMUL_EXAMPLES: [&str; 1] = ["matmul([[1,2],[3,4]], [[5,6],[7,8]]) → [[19,22],[43,50]]"];

static MATMUL_RELATED: [&str; 2] = ["transpose", "mat_power"];

impl FunctionPlugin for MatmulFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "matmul",
            description: "Matrix multiplication",
            usage: "matmul(a, b)",
            args: &MATMUL_ARGS,
            returns: "Matrix",
            examples: &MATMUL_EXAMPLES,
            category: "matrix/ops",
            related: &MATMUL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("matmul", 2, args.len()));
        }

        let a = match extract_matrix(&args[0], "matmul", "a") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let b = match extract_matrix(&args[1], "matmul", "b") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };

        match a.mul(&b) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ transpose ============

pub struct TransposeFn;

static TRANSPOSE_ARGS: [ArgMeta; 1] = [ArgMeta::required("matrix", "Matrix", "Matrix to transpose")];

static TRANSPOSE_EXAMPLES: [&str; 1] = ["transpose([[1,2,3],[4,5,6]]) → 3×2 matrix"];

static TRANSPOSE_RELATED: [&str; 2] = ["matmul", "inverse"];

impl FunctionPlugin for TransposeFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "transpose",
            description: "Matrix transpose",
            usage: "transpose(matrix)",
            args: &TRANSPOSE_ARGS,
            returns: "Matrix",
            examples: &TRANSPOSE_EXAMPLES,
            category: "matrix/ops",
            related: &TRANSPOSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(ReckonError::arg_count("transpose", 1, 0));
        }

        match extract_matrix(&args[0], "transpose", "matrix") {
            Ok(m) => m.transpose().into(),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ mat_power ============

pub struct MatPowerFn;

static MAT_POWER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("matrix", "Matrix", "Square matrix"),
    ArgMeta::required("k", "Number", "Non-negative integer exponent (0-100)"),
];

static MAT_POWER_EXAMPLES: [&str; 2] = [
    "mat_power([[2,0],[0,2]], 3) → [[8,0],[0,8]]",
    "mat_power(m, 0) → identity of m's size",
];

static MAT_POWER_RELATED: [&str; 2] = ["matmul", "inverse"];

impl FunctionPlugin for MatPowerFn {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "mat_power",
            description: "Matrix power by repeated multiplication",
            usage: "mat_power(matrix, k)",
            args: &MAT_POWER_ARGS,
            returns: "Matrix",
            examples: &MAT_POWER_EXAMPLES,
            category: "matrix/ops",
            related: &MAT_POWER_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(ReckonError::arg_count("mat_power", 2, args.len()));
        }

        let m = match extract_matrix(&args[0], "mat_power", "matrix") {
            Ok(m) => m,
            Err(e) => return Value::Error(e),
        };
        let k = match extract_int(&args[1], "mat_power", "k") {
            Ok(k) => k,
            Err(e) => return Value::Error(e),
        };
        if k > MAX_EXPONENT {
            return Value::Error(ReckonError::invalid_exponent(format!(
                "mat_power: exponent must be at most {}, got {}",
                MAX_EXPONENT, k
            )));
        }

        match m.pow(k) {
            Ok(m) => m.into(),
            Err(e) => Value::Error(e.into()),
        }
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

    fn cell(v: &Value, i: usize, j: usize) -> f64 {
        v.get("data").as_list().unwrap()[i].as_list().unwrap()[j]
            .as_number()
            .unwrap()
    }

    #[test]
    fn test_mat_add() {
        let result = MatAddFn.call(
            &[nested(&[&[1.0, 2.0]]), nested(&[&[3.0, 4.0]])],
            &ctx(),
        );
        assert_eq!(cell(&result, 0, 0), 4.0);
        assert_eq!(cell(&result, 0, 1), 6.0);
    }

    #[test]
    fn test_mat_add_dimension_mismatch() {
        let result = MatAddFn.call(
            &[nested(&[&[1.0, 2.0]]), nested(&[&[1.0], &[2.0]])],
            &ctx(),
        );
        assert_eq!(result.as_error().unwrap().code, codes::DIMENSION_MISMATCH);
    }

    #[test]
    fn test_matmul_incompatible_2x3_times_2x3() {
        let a = nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let result = MatmulFn.call(&[a.clone(), a], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::DIMENSION_MISMATCH);
    }

    #[test]
    fn test_matmul_with_transpose() {
        let a = nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let at = TransposeFn.call(&[a.clone()], &ctx());
        let result = MatmulFn.call(&[a, at], &ctx());
        assert_eq!(result.get("rows").as_number(), Some(2.0));
        assert_eq!(result.get("cols").as_number(), Some(2.0));
        // [1,2,3]·[1,2,3] = 14
        assert_eq!(cell(&result, 0, 0), 14.0);
    }

    #[test]
    fn test_mat_power_zero() {
        let result = MatPowerFn.call(
            &[nested(&[&[5.0, 1.0], &[2.0, 3.0]]), Value::Number(0.0)],
            &ctx(),
        );
        assert_eq!(cell(&result, 0, 0), 1.0);
        assert_eq!(cell(&result, 0, 1), 0.0);
    }

    #[test]
    fn test_mat_power_negative_exponent() {
        let result = MatPowerFn.call(
            &[nested(&[&[1.0, 0.0], &[0.0, 1.0]]), Value::Number(-2.0)],
            &ctx(),
        );
        assert_eq!(result.as_error().unwrap().code, codes::INVALID_EXPONENT);
    }

    #[test]
    fn test_mat_power_exponent_over_cap() {
        let m = nested(&[&[1.0, 0.0], &[0.0, 1.0]]);

        let at_cap = MatPowerFn.call(&[m.clone(), Value::Number(MAX_EXPONENT as f64)], &ctx());
        assert!(!at_cap.is_error());

        let over = MatPowerFn.call(&[m, Value::Number(1e12)], &ctx());
        let err = over.as_error().unwrap();
        assert_eq!(err.code, codes::INVALID_EXPONENT);
        assert!(err.message.contains("at most"));
    }

    #[test]
    fn test_mat_power_not_square() {
        let result = MatPowerFn.call(
            &[nested(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]), Value::Number(2.0)],
            &ctx(),
        );
        assert_eq!(result.as_error().unwrap().code, codes::NOT_SQUARE);
    }
}
