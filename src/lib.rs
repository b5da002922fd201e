//! Pfinance Core - the metrics computation engine.
//!
//! This crate contains the derivation pipeline that turns raw income,
//! expense, tax, and budget records into periodized financial summaries,
//! a progressive-tax calculation, an income-flow (Sankey) allocation,
//! and budget-progress projections. It is a pure, synchronous layer:
//! no storage, no network, no rendering. Collaborators hand it whole
//! input snapshots and it produces new immutable output records.

pub mod budgets;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod flows;
pub mod metrics;
pub mod periods;
pub mod records;
pub mod tax;
pub mod utils;

// Re-export the main entry points and common types
pub use engine::*;
pub use metrics::*;
pub use periods::*;
pub use records::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
