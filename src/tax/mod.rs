//! Progressive tax calculation: bracket tables, offsets, and levies.

mod tax_calculator;
mod tax_model;
mod tax_tables;

pub use tax_calculator::*;
pub use tax_model::*;
pub use tax_tables::*;
