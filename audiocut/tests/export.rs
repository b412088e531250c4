//! Export integration tests.
//!
//! Drives the exporter end to end with a mock execution engine to verify
//! lazy initialization, MIME tagging, progress plumbing, and abort
//! handling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use audiocut::{
    AbortToken, EditMode, EngineHandle, EngineOutput, Error, ExecutionEngine, Exporter, FadeSpec,
    JobContext, OutputFormat, PipelineDescription, PipelineError, SelectionModel,
};

// =============================================================================
// Mock Implementations
// =============================================================================

/// Mock engine that echoes the input and reports synthetic progress.
struct MockEngine {
    executions: Arc<AtomicUsize>,
}

impl ExecutionEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn execute(
        &mut self,
        input: &[u8],
        pipeline: &PipelineDescription,
        ctx: &JobContext,
    ) -> audiocut_pipeline::Result<EngineOutput> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        for step in 0..=4 {
            if ctx.abort_token().is_aborted() {
                return Err(PipelineError::Aborted);
            }
            ctx.report_progress(f64::from(step) / 4.0);
        }
        Ok(EngineOutput {
            data: input.to_vec(),
            mime_type: pipeline.format.mime_type(),
        })
    }
}

fn mock_handle(executions: Arc<AtomicUsize>, inits: Arc<AtomicUsize>) -> EngineHandle {
    EngineHandle::new(move || {
        inits.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockEngine {
            executions: Arc::clone(&executions),
        }))
    })
}

fn request(format: OutputFormat) -> audiocut::EditRequest {
    let mut model = SelectionModel::new();
    model.load_source(60.0);
    model.set_selection(5.0, 15.0);
    model
        .build_request(EditMode::Extract, format, FadeSpec::none())
        .unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn engine_initializes_once_across_exports() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(Arc::clone(&executions), Arc::clone(&inits)));

    assert!(!exporter.engine_loaded());
    exporter.export(b"abc", &request(OutputFormat::Mp3)).unwrap();
    exporter.export(b"abc", &request(OutputFormat::Wav)).unwrap();
    exporter.export(b"abc", &request(OutputFormat::Ogg)).unwrap();

    assert!(exporter.engine_loaded());
    assert_eq!(inits.load(Ordering::SeqCst), 1);
    assert_eq!(executions.load(Ordering::SeqCst), 3);
}

#[test]
fn release_forces_reinitialization() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(Arc::clone(&executions), Arc::clone(&inits)));

    exporter.export(b"abc", &request(OutputFormat::Mp3)).unwrap();
    exporter.release_engine();
    assert!(!exporter.engine_loaded());
    exporter.export(b"abc", &request(OutputFormat::Mp3)).unwrap();

    assert_eq!(inits.load(Ordering::SeqCst), 2);
}

#[test]
fn output_carries_format_mime_type() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(executions, inits));

    let result = exporter.export(b"abc", &request(OutputFormat::Flac)).unwrap();
    assert_eq!(result.mime_type, "audio/flac");
    assert_eq!(result.data, b"abc");
    assert!((result.duration_secs - 10.0).abs() < 1e-9);
}

#[test]
fn progress_reaches_completion() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(executions, inits));

    let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let ctx = JobContext::new().with_progress(move |p| sink.lock().unwrap().push(p));

    exporter
        .export_with(b"abc", &request(OutputFormat::Mp3), &ctx)
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&0.0));
    assert_eq!(seen.last(), Some(&1.0));
}

#[test]
fn pre_aborted_job_skips_engine_work() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(Arc::clone(&executions), Arc::clone(&inits)));

    let token = AbortToken::new();
    token.abort();
    let ctx = JobContext::new().with_abort(token);

    let result = exporter.export_with(b"abc", &request(OutputFormat::Mp3), &ctx);
    assert!(matches!(
        result,
        Err(Error::Pipeline(PipelineError::Aborted))
    ));
    assert_eq!(inits.load(Ordering::SeqCst), 0);
    assert_eq!(executions.load(Ordering::SeqCst), 0);
}

#[test]
fn invalid_request_fails_before_engine_invocation() {
    let executions = Arc::new(AtomicUsize::new(0));
    let inits = Arc::new(AtomicUsize::new(0));
    let mut exporter = Exporter::new(mock_handle(Arc::clone(&executions), Arc::clone(&inits)));

    let mut bad = request(OutputFormat::Mp3);
    bad.speed_factor = 5.0;

    let result = exporter.export(b"abc", &bad);
    assert!(matches!(
        result,
        Err(Error::Pipeline(PipelineError::InvalidRequest(_)))
    ));
    assert_eq!(executions.load(Ordering::SeqCst), 0);
}
