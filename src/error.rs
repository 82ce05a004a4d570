//! Error types for the solver.
//!
//! Mirrors the protocol-layer error style elsewhere in this crate: one
//! variant per distinguishable failure, with a message that names the
//! offending value.

/// Failure modes of [`crate::solve::solve`] and the lower-level builders it
/// calls.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// A precondition on the caller-supplied buffers was violated.
    /// No buffer is mutated before this error is returned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scratch buffer or the cost tensor could not be allocated.
    #[error("allocation failure: {0}")]
    Alloc(String),
}

impl SolveError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        SolveError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
