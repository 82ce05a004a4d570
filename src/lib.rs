//! Numerical core of a BioConsert-style bucket-order rank-aggregation
//! solver.
//!
//! Exposes [`solve`], the single entry point: given a positions matrix of
//! input rankings, scoring weights, and a set of departure bucket orders,
//! it drives each departure to a local minimum of the weighted pairwise
//! disagreement cost and reports the cost improvement achieved.

mod driver;
mod engine;
pub mod error;
pub mod model;
pub mod problem;
mod solve;
pub mod tensor;

pub use error::{Result, SolveError};
pub use model::{BucketOrder, PositionsMatrix, RelationCounts, ScoringWeights};
pub use solve::solve;
pub use tensor::{build_cost_tensor, CostTensor};
