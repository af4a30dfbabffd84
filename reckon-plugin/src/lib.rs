//! Reckon Plugin System
//!
//! Provides the trait and registry for calculator functions: each
//! calculator page in the application maps to one or more registered
//! `FunctionPlugin` implementations with self-describing metadata.

mod context;
mod registry;
mod traits;

pub use context::EvalContext;
pub use registry::PluginRegistry;
pub use traits::{ArgMeta, FunctionMeta, FunctionPlugin};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin, PluginRegistry};
    pub use reckon_core::prelude::*;
}
