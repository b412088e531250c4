//! High-level export driver.
//!
//! Wires the pieces together: validate the request, compile it to a
//! pipeline description, hand it to the execution engine, and return the
//! transformed bytes tagged with their MIME type.

use thiserror::Error;
use tracing::info;

use audiocut_edit::EditRequest;
use audiocut_pipeline::{compile, EngineHandle, JobContext, PipelineError};

/// Facade error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Edit(#[from] audiocut_edit::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Facade result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A finished export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Encoded output bytes.
    pub data: Vec<u8>,
    /// MIME type of the output.
    pub mime_type: &'static str,
    /// Output duration in seconds, as computed by the compiler.
    pub duration_secs: f64,
}

/// Drives exports against an owned execution engine.
///
/// The engine initializes lazily on the first export and is reused for
/// every subsequent one until [`release_engine`](Exporter::release_engine).
pub struct Exporter {
    engine: EngineHandle,
}

impl Exporter {
    /// Create an exporter around an engine handle.
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Export with a default job context (no abort, no progress).
    pub fn export(&mut self, source: &[u8], request: &EditRequest) -> Result<ExportResult> {
        self.export_with(source, request, &JobContext::new())
    }

    /// Export with an explicit job context for cancellation and progress.
    pub fn export_with(
        &mut self,
        source: &[u8],
        request: &EditRequest,
        ctx: &JobContext,
    ) -> Result<ExportResult> {
        let pipeline = compile(request)?;
        info!(
            format = %pipeline.format,
            stages = pipeline.total_stages(),
            duration_secs = pipeline.result_duration,
            "Exporting edit"
        );

        let output = self.engine.run(source, &pipeline, ctx)?;
        Ok(ExportResult {
            data: output.data,
            mime_type: output.mime_type,
            duration_secs: pipeline.result_duration,
        })
    }

    /// Whether the engine has been initialized.
    pub fn engine_loaded(&self) -> bool {
        self.engine.is_loaded()
    }

    /// Tear down the engine. The next export re-initializes it.
    pub fn release_engine(&mut self) {
        self.engine.release();
    }
}
