//! The metrics engine: orchestration, memoization, and custom metrics.

mod custom_metrics;
mod engine_model;
mod engine_service;
mod input_hash;

pub use custom_metrics::*;
pub use engine_model::*;
pub use engine_service::*;
pub use input_hash::*;
