//! Execution engine boundary.
//!
//! The engine that actually decodes, filters, and encodes is an external
//! collaborator: it takes raw bytes and a compiled pipeline and returns
//! transformed bytes. It is heavyweight to initialize, so [`EngineHandle`]
//! owns it behind a load-once / reuse / explicit-release lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::graph::PipelineDescription;

/// Transformed media returned by the engine.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Raw encoded bytes.
    pub data: Vec<u8>,
    /// MIME type derived from the pipeline's output format.
    pub mime_type: &'static str,
}

/// Cancellation token for an in-flight job.
///
/// Clones share state; aborting any clone aborts the job. Engines are
/// expected to poll the token between processing steps.
#[derive(Debug, Clone, Default)]
pub struct AbortToken {
    aborted: Arc<AtomicBool>,
}

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested.
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

/// Per-job context handed to the engine: cancellation plus optional
/// progress reporting.
pub struct JobContext {
    abort: AbortToken,
    progress: Option<Box<dyn Fn(f64) + Send + Sync>>,
}

impl Default for JobContext {
    fn default() -> Self {
        Self::new()
    }
}

impl JobContext {
    pub fn new() -> Self {
        Self {
            abort: AbortToken::new(),
            progress: None,
        }
    }

    /// Use an existing abort token.
    #[must_use]
    pub fn with_abort(mut self, token: AbortToken) -> Self {
        self.abort = token;
        self
    }

    /// Attach a progress callback receiving fractions in [0.0, 1.0].
    #[must_use]
    pub fn with_progress<F: Fn(f64) + Send + Sync + 'static>(mut self, callback: F) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// The job's abort token.
    pub fn abort_token(&self) -> &AbortToken {
        &self.abort
    }

    /// Report progress. Values are clamped to [0.0, 1.0] and treated as
    /// opaque telemetry.
    pub fn report_progress(&self, fraction: f64) {
        if let Some(callback) = &self.progress {
            callback(fraction.clamp(0.0, 1.0));
        }
    }
}

/// An external media-processing engine.
///
/// Opaque black box: bytes and a pipeline description in, bytes out.
/// Implementations run one job at a time; callers must not assume
/// concurrent jobs are efficient.
pub trait ExecutionEngine: Send {
    /// Engine name for diagnostics.
    fn name(&self) -> &str;

    /// Execute a compiled pipeline over the source bytes.
    fn execute(
        &mut self,
        input: &[u8],
        pipeline: &PipelineDescription,
        ctx: &JobContext,
    ) -> Result<EngineOutput>;
}

/// Factory producing an engine on first use.
pub type EngineFactory = Box<dyn Fn() -> Result<Box<dyn ExecutionEngine>> + Send>;

/// Explicitly-owned, lazily-initialized engine resource.
///
/// The engine loads on the first job and is reused by reference for every
/// subsequent one until [`release`](EngineHandle::release) or drop.
pub struct EngineHandle {
    factory: EngineFactory,
    engine: Option<Box<dyn ExecutionEngine>>,
}

impl EngineHandle {
    /// Create a handle with a factory. Nothing is initialized yet.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn ExecutionEngine>> + Send + 'static,
    {
        Self {
            factory: Box::new(factory),
            engine: None,
        }
    }

    /// Whether the engine has been initialized.
    pub fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    /// Run a job, initializing the engine on first use.
    ///
    /// Checks the abort token before touching the engine; a pre-aborted
    /// job fails with [`PipelineError::Aborted`] without any engine work.
    pub fn run(
        &mut self,
        input: &[u8],
        pipeline: &PipelineDescription,
        ctx: &JobContext,
    ) -> Result<EngineOutput> {
        if ctx.abort_token().is_aborted() {
            return Err(PipelineError::Aborted);
        }

        if self.engine.is_none() {
            let engine = (self.factory)()?;
            info!(engine = engine.name(), "Execution engine initialized");
            self.engine = Some(engine);
        }

        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| PipelineError::EngineInit("engine unavailable".into()))?;
        debug!(
            engine = engine.name(),
            input_bytes = input.len(),
            "Dispatching job to engine"
        );
        engine.execute(input, pipeline, ctx)
    }

    /// Tear the engine down. The next job re-initializes it.
    pub fn release(&mut self) {
        if let Some(engine) = self.engine.take() {
            info!(engine = engine.name(), "Execution engine released");
        }
    }
}
