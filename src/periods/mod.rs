//! Period conversion between payment frequencies via annual equivalents.

mod period_converter;
mod periods_model;

pub use period_converter::*;
pub use periods_model::*;
