//! Reckon Matrix - Linear algebra core for the matrix calculator
//!
//! Provides the matrix value type and the operations behind the matrix
//! calculator page:
//! - Construction (matrix, identity, zeros, random_matrix, resize)
//! - Elementary operations (mat_add, mat_sub, matmul, transpose, mat_power)
//! - Analysis (determinant, inverse, rank, trace, shape)
//!
//! Matrices are bounded to 10×10 (the UI's input range) and stored as
//! 64-bit floats. Determinant rides on LU decomposition with partial
//! pivoting; inverse uses Gauss-Jordan elimination on `[A | I]`; rank
//! uses row-echelon reduction.

mod construct;
mod elementary;
mod helpers;
mod ops;
mod props;
mod reduce;
mod types;

pub use helpers::extract_matrix;
pub use reduce::{LuFactors, PIVOT_EPS, SINGULAR_EPS};
pub use types::{Matrix, MatrixError, MAX_DIM, MAX_EXPONENT};

use reckon_plugin::PluginRegistry;

/// Load matrix functions into registry
pub fn load_matrix_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Construction
        .with_function(construct::MatrixFn)
        .with_function(construct::IdentityFn)
        .with_function(construct::ZerosFn)
        .with_function(construct::RandomMatrixFn)
        .with_function(construct::ResizeFn)
        // Operations
        .with_function(ops::MatAddFn)
        .with_function(ops::MatSubFn)
        .with_function(ops::MatmulFn)
        .with_function(ops::TransposeFn)
        .with_function(ops::MatPowerFn)
        // Analysis
        .with_function(props::DeterminantFn)
        .with_function(props::InverseFn)
        .with_function(props::RankFn)
        .with_function(props::TraceFn)
        .with_function(props::ShapeFn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_matrix_library() {
        let registry = load_matrix_library(PluginRegistry::new());

        assert!(registry.get_function("matrix").is_some());
        assert!(registry.get_function("identity").is_some());
        assert!(registry.get_function("matmul").is_some());
        assert!(registry.get_function("determinant").is_some());
        assert!(registry.get_function("inverse").is_some());
        assert!(registry.get_function("rank").is_some());
        assert!(registry.get_function("trace").is_some());
        assert_eq!(registry.function_count(), 15);
    }
}
