//! Reckon - Matrix and Finance Calculator Engine
//!
//! A plugin-based calculator built around a shared [`Value`] type. Matrices
//! up to 10x10 with elementary operations, LU-based reductions, and a small
//! set of financial calculators, all callable by function name.
//!
//! ```
//! use reckon::Reckon;
//! use reckon_core::Value;
//!
//! let engine = Reckon::with_standard_library();
//! let m = engine.call("identity", &[Value::Number(3.0)]);
//! let det = engine.call("determinant", &[m]);
//! assert_eq!(det.as_number(), Some(1.0));
//! ```

pub use reckon_core::{ReckonError, Value};
pub use reckon_matrix::Matrix;
pub use reckon_plugin::{EvalContext, PluginRegistry};

use std::sync::Arc;

/// Main Reckon engine
pub struct Reckon {
    registry: Arc<PluginRegistry>,
    default_precision: u32,
}

impl Reckon {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            default_precision: 6,
        }
    }

    /// Engine with the matrix and finance libraries loaded
    pub fn with_standard_library() -> Self {
        let registry = PluginRegistry::new();
        let registry = reckon_matrix::load_matrix_library(registry);
        let registry = reckon_finance::load_finance_library(registry);
        Self::new(registry)
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.default_precision = precision;
        self
    }

    /// Call a registered function by name. Failures come back as
    /// `Value::Error`, never as a panic.
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        let ctx = EvalContext::new(self.registry.clone())
            .with_precision(self.default_precision);
        self.registry.call_function(name, args, &ctx)
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    pub fn function_count(&self) -> usize {
        self.registry.function_count()
    }

    /// Render a result as JSON, for transport or display
    pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }
}

impl Default for Reckon {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

/// Build a matrix literal as a `Value` from nested rows
#[macro_export]
macro_rules! rows {
    [ $( [ $($x:expr),* $(,)? ] ),* $(,)? ] => {
        reckon_core::Value::List(vec![
            $(
                reckon_core::Value::List(vec![
                    $( reckon_core::Value::Number(f64::from($x)) ),*
                ])
            ),*
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Reckon {
        Reckon::with_standard_library()
    }

    fn cell(value: &Value, i: usize, j: usize) -> f64 {
        let obj = value.as_object().unwrap();
        let data = obj["data"].as_list().unwrap();
        let row = data[i].as_list().unwrap();
        row[j].as_number().unwrap()
    }

    #[test]
    fn test_standard_library_loads() {
        let engine = engine();
        assert_eq!(engine.function_count(), 18);
    }

    #[test]
    fn test_matrix_add_end_to_end() {
        let engine = engine();
        let a = engine.call("matrix", &[rows![[1, 2], [3, 4]]]);
        let b = engine.call("matrix", &[rows![[5, 6], [7, 8]]]);
        let sum = engine.call("mat_add", &[a, b]);
        assert_eq!(cell(&sum, 0, 0), 6.0);
        assert_eq!(cell(&sum, 1, 1), 12.0);
    }

    #[test]
    fn test_multiply_with_transpose() {
        let engine = engine();
        let a = engine.call("matrix", &[rows![[1, 2, 3], [4, 5, 6]]]);
        let at = engine.call("transpose", &[a.clone()]);
        let product = engine.call("matmul", &[a.clone(), at]);
        // 2x3 times 3x2 gives 2x2
        let obj = product.as_object().unwrap();
        assert_eq!(obj["rows"].as_number(), Some(2.0));
        assert_eq!(obj["cols"].as_number(), Some(2.0));
        assert_eq!(cell(&product, 0, 0), 14.0);

        // 2x3 times 2x3 is a dimension mismatch
        let bad = engine.call("matmul", &[a.clone(), a]);
        match bad {
            Value::Error(e) => assert_eq!(e.code, reckon_core::codes::DIMENSION_MISMATCH),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_determinant_and_inverse() {
        let engine = engine();
        let a = engine.call("matrix", &[rows![[2, 0], [0, 2]]]);
        let det = engine.call("determinant", &[a.clone()]);
        assert_eq!(det.as_number(), Some(4.0));

        let inv = engine.call("inverse", &[a]);
        assert_eq!(cell(&inv, 0, 0), 0.5);
        assert_eq!(cell(&inv, 1, 1), 0.5);
    }

    #[test]
    fn test_singular_matrix_error() {
        let engine = engine();
        let singular = engine.call("matrix", &[rows![[1, 2], [2, 4]]]);
        let inv = engine.call("inverse", &[singular.clone()]);
        match inv {
            Value::Error(e) => assert_eq!(e.code, reckon_core::codes::SINGULAR_MATRIX),
            other => panic!("expected error, got {:?}", other),
        }
        // Rank still works on the same matrix
        let rank = engine.call("rank", &[singular]);
        assert_eq!(rank.as_number(), Some(1.0));
    }

    #[test]
    fn test_power_and_trace() {
        let engine = engine();
        let a = engine.call("matrix", &[rows![[1, 1], [0, 1]]]);
        let cubed = engine.call("mat_power", &[a, Value::Number(3.0)]);
        assert_eq!(cell(&cubed, 0, 1), 3.0);

        let trace = engine.call("trace", &[cubed]);
        assert_eq!(trace.as_number(), Some(2.0));
    }

    #[test]
    fn test_error_values_flow_through_pipelines() {
        let engine = engine();
        let bad = engine.call("matrix", &[rows![[1, 2], [3]]]);
        assert!(bad.is_error());
        // Feeding an error into a later call keeps the original error
        let det = engine.call("determinant", &[bad.clone()]);
        assert_eq!(det.as_error(), bad.as_error());
    }

    #[test]
    fn test_finance_through_engine() {
        let engine = engine();
        let result = engine.call(
            "emi",
            &[Value::Number(250000.0), Value::Number(7.5), Value::Number(240.0)],
        );
        let obj = result.as_object().unwrap();
        let emi = obj["emi"].as_number().unwrap();
        assert!((emi - 2014.06).abs() < 0.01);
    }

    #[test]
    fn test_unknown_function_suggests() {
        let engine = engine();
        let result = engine.call("determinnt", &[]);
        match result {
            Value::Error(e) => {
                assert_eq!(e.code, reckon_core::codes::UNDEFINED_FUNC);
                assert!(e.suggestion.is_some());
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_help_and_listing() {
        let engine = engine();
        let help = engine.help(Some("matmul"));
        assert!(matches!(help, Value::Object(_)));

        let funcs = engine.list_functions(Some("matrix/analysis"));
        assert!(matches!(funcs, Value::List(_)));
    }

    #[test]
    fn test_to_json() {
        let engine = engine();
        let m = engine.call("identity", &[Value::Number(2.0)]);
        let json = Reckon::to_json(&m).unwrap();
        assert!(json.contains("\"rows\""));
    }
}
