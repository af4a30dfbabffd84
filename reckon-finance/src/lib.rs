//! Reckon Finance Functions Plugin
//!
//! Loan and interest calculators: EMI, compound interest, simple interest.
//! All calculations use f64 and report invalid inputs as error values.

mod helpers;
mod interest;
mod loans;

use reckon_plugin::PluginRegistry;

/// Load finance functions into registry
pub fn load_finance_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Loans (1 function)
        .with_function(loans::EmiFn)
        // Interest (2 functions)
        .with_function(interest::CompoundInterestFn)
        .with_function(interest::SimpleInterestFn)
}
