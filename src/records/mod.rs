//! Plain input records handed to the engine by external collaborators.

mod records_model;

pub use records_model::*;
