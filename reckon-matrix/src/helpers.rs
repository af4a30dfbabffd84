//! Argument extraction helpers for matrix functions

use crate::types::Matrix;
use reckon_core::{ReckonError, Value};

/// Extract an f64 from a Value
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, ReckonError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        _ => Err(ReckonError::arg_type(func, arg, "Number", value.type_name())),
    }
}

/// Extract an integer from a Value
pub fn extract_int(value: &Value, func: &str, arg: &str) -> Result<i64, ReckonError> {
    let n = extract_number(value, func, arg)?;
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(ReckonError::domain_error(format!("{}: {} must be an integer", func, arg)));
    }
    Ok(n as i64)
}

/// Extract a usize from a Value
pub fn extract_usize(value: &Value, func: &str, arg: &str) -> Result<usize, ReckonError> {
    let i = extract_int(value, func, arg)?;
    if i < 0 {
        return Err(ReckonError::domain_error(format!("{}: {} must be non-negative", func, arg)));
    }
    Ok(i as usize)
}

/// Extract a matrix from a Value (either a Matrix object or a nested list)
pub fn extract_matrix(value: &Value, func: &str, arg: &str) -> Result<Matrix, ReckonError> {
    match value {
        Value::Object(obj) => {
            if let Some(Value::Text(t)) = obj.get("type") {
                if t == "Matrix" {
                    if let Some(Value::List(data)) = obj.get("data") {
                        return extract_matrix_from_rows(data, func, arg);
                    }
                }
            }
            Err(ReckonError::arg_type(func, arg, "Matrix", "Object"))
        }
        Value::List(rows) => extract_matrix_from_rows(rows, func, arg),
        Value::Error(e) => Err(e.clone()),
        _ => Err(ReckonError::arg_type(func, arg, "Matrix", value.type_name())),
    }
}

fn extract_matrix_from_rows(rows: &[Value], func: &str, arg: &str) -> Result<Matrix, ReckonError> {
    let mut data = Vec::with_capacity(rows.len());

    for (i, row_val) in rows.iter().enumerate() {
        match row_val {
            Value::List(cols) => {
                let mut row = Vec::with_capacity(cols.len());
                for (j, col_val) in cols.iter().enumerate() {
                    match col_val {
                        Value::Number(n) => row.push(*n),
                        _ => {
                            return Err(ReckonError::domain_error(format!(
                                "{}: {}[{}][{}] must be a Number",
                                func, arg, i, j
                            )))
                        }
                    }
                }
                data.push(row);
            }
            _ => {
                return Err(ReckonError::domain_error(format!(
                    "{}: {} row {} must be a list",
                    func, arg, i
                )))
            }
        }
    }

    Matrix::from_rows(data).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(42.0), "t", "x").unwrap(), 42.0);
        assert!(extract_number(&Value::Bool(true), "t", "x").is_err());
    }

    #[test]
    fn test_extract_int_rejects_fractions() {
        assert_eq!(extract_int(&Value::Number(3.0), "t", "x").unwrap(), 3);
        assert!(extract_int(&Value::Number(3.5), "t", "x").is_err());
    }

    #[test]
    fn test_extract_usize_rejects_negative() {
        assert!(extract_usize(&Value::Number(-1.0), "t", "x").is_err());
    }

    #[test]
    fn test_extract_matrix_from_nested_list() {
        let val = Value::List(vec![
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::List(vec![Value::Number(3.0), Value::Number(4.0)]),
        ]);
        let m = extract_matrix(&val, "t", "m").unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
    }

    #[test]
    fn test_extract_matrix_round_trips_through_value() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let v: Value = m.clone().into();
        let back = extract_matrix(&v, "t", "m").unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_extract_matrix_ragged_fails() {
        let val = Value::List(vec![
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::List(vec![Value::Number(3.0)]),
        ]);
        assert!(extract_matrix(&val, "t", "m").is_err());
    }
}
