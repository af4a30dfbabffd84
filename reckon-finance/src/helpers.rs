//! Common financial utilities

use reckon_core::{ReckonError, Value};

/// Extract a number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, ReckonError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(ReckonError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract optional number parameter with default
pub fn extract_number_or_default(args: &[Value], index: usize, default: f64) -> f64 {
    args.get(index)
        .and_then(|v| v.as_number())
        .unwrap_or(default)
}

/// A principal, deposit, or balance must not be negative
pub fn validate_non_negative(value: f64, func: &str, arg: &str) -> Result<(), ReckonError> {
    if value < 0.0 || !value.is_finite() {
        return Err(ReckonError::domain_error(format!(
            "{}: {} must be a non-negative number",
            func, arg
        )));
    }
    Ok(())
}

/// A term or compounding frequency must be strictly positive
pub fn validate_positive(value: f64, func: &str, arg: &str) -> Result<(), ReckonError> {
    if value <= 0.0 || !value.is_finite() {
        return Err(ReckonError::domain_error(format!(
            "{}: {} must be a positive number",
            func, arg
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_number_propagates_errors() {
        let err = Value::Error(ReckonError::domain_error("upstream"));
        assert!(extract_number(&err, "emi", "principal").is_err());
    }

    #[test]
    fn test_extract_number_or_default() {
        let args = [Value::Number(1.0)];
        assert_eq!(extract_number_or_default(&args, 0, 9.0), 1.0);
        assert_eq!(extract_number_or_default(&args, 1, 9.0), 9.0);
    }

    #[test]
    fn test_validators() {
        assert!(validate_non_negative(0.0, "t", "x").is_ok());
        assert!(validate_non_negative(-1.0, "t", "x").is_err());
        assert!(validate_positive(1.0, "t", "x").is_ok());
        assert!(validate_positive(0.0, "t", "x").is_err());
        assert!(validate_positive(f64::NAN, "t", "x").is_err());
    }
}
