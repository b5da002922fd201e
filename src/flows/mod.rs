//! Income-flow (Sankey) graph allocation.

mod flows_model;
mod flows_service;

pub use flows_model::*;
pub use flows_service::*;
