//! Finance metrics: income, expense, tax, and savings summaries.

mod metrics_model;
mod metrics_service;

pub use metrics_model::*;
pub use metrics_service::*;
