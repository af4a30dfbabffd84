//! Evaluation Context

use crate::PluginRegistry;
use std::sync::Arc;

/// Context passed to calculator functions
///
/// Carries display precision (decimal digits for rendered results) and a
/// handle to the registry so functions can compose.
pub struct EvalContext {
    pub precision: u32,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { precision: 6, registry }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}
