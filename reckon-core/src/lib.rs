//! Reckon Core - Fundamental types
//!
//! This crate provides the core types used throughout Reckon:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `ReckonError`: Structured errors surfaced to the calculator UI

mod error;
mod value;

pub use error::{codes, ReckonError};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ReckonError, Value};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(2.0).as_number(), Some(2.0));
        assert_eq!(Value::from(7i64).as_number(), Some(7.0));
        assert_eq!(Value::from("hi").as_text(), Some("hi"));
    }

    #[test]
    fn test_error_as_value() {
        let v: Value = ReckonError::undefined_func("determinant2").into();
        assert!(v.is_error());
        assert_eq!(v.as_error().unwrap().code, codes::UNDEFINED_FUNC);
    }
}
