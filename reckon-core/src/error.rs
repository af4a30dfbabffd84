//! Structured errors for calculator functions
//!
//! Errors never crash the engine. They are values that propagate through
//! computations and carry enough information for the surrounding UI to
//! display a useful message. Every error here is a user-input error: the
//! caller can always recover by adjusting inputs and calling again.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const INVALID_EXPONENT: &str = "INVALID_EXPONENT";
    pub const SINGULAR_MATRIX: &str = "SINGULAR_MATRIX";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const INVALID_SHAPE: &str = "INVALID_SHAPE";
}

/// Structured error returned by calculator functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReckonError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ReckonError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(
            codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got),
        )
        .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(
            codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got),
        )
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use help() to list available functions")
    }

    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::DIMENSION_MISMATCH, details.into())
            .with_suggestion("Check that the matrix dimensions are compatible")
    }

    pub fn not_square(details: impl Into<String>) -> Self {
        Self::new(codes::NOT_SQUARE, details.into())
            .with_suggestion("This operation requires a square matrix (rows == cols)")
    }

    pub fn invalid_exponent(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_EXPONENT, details.into())
            .with_suggestion("Use a non-negative integer exponent")
    }

    pub fn singular_matrix(details: impl Into<String>) -> Self {
        Self::new(codes::SINGULAR_MATRIX, details.into())
            .with_suggestion("The determinant is (near) zero; adjust the matrix entries")
    }

    pub fn invalid_shape(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_SHAPE, details.into())
    }
}

impl std::fmt::Display for ReckonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ReckonError {}
