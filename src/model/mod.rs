//! Caller-facing data types: bucket orders, the positions matrix, and
//! scoring weights.
//!
//! Uses flat, contiguous, row-major buffers throughout rather than nested
//! containers: the cumulative scans in the move engine and the tensor's
//! `M[x][y][k]` access pattern are cache-friendly exactly because the
//! underlying storage is laid out this way.

pub mod bucket_order;
pub mod positions;
pub mod weights;

pub use bucket_order::BucketOrder;
pub use positions::PositionsMatrix;
pub use weights::{RelationCounts, ScoringWeights};
