//! Budget progress tracking and end-of-period projections.

mod budgets_model;
mod budgets_service;

pub use budgets_model::*;
pub use budgets_service::*;
