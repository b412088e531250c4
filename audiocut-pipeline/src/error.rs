//! Pipeline error types.

use thiserror::Error;

/// Pipeline error type.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Structurally invalid request reached the compiler. This is a
    /// contract violation from the upstream validator; the compiler
    /// rejects rather than repairs.
    #[error("Invalid edit request: {0}")]
    InvalidRequest(String),

    /// The execution engine failed. Propagated verbatim, no retry.
    #[error("Engine execution failed: {0}")]
    Engine(String),

    /// Engine initialization failed.
    #[error("Engine initialization failed: {0}")]
    EngineInit(String),

    /// The job was aborted via its abort token.
    #[error("Job aborted")]
    Aborted,

    /// Core error.
    #[error(transparent)]
    Core(#[from] audiocut_core::Error),
}

/// Pipeline result type.
pub type Result<T> = std::result::Result<T, PipelineError>;
