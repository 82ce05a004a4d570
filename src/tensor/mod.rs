//! The cost tensor and its builder.

pub mod builder;
pub mod cost_tensor;

pub use builder::build_cost_tensor;
pub use cost_tensor::{CostTensor, AFTER, BEFORE, TIED};
