//! # audiocut
//!
//! Compiles a user's audio-edit intent (a time-range selection, effect
//! parameters, an action mode, and an output codec) into a deterministic
//! filter-graph pipeline executed by an external media engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use audiocut::{
//!     EditMode, EngineHandle, Exporter, FadeSpec, OutputFormat, SelectionModel,
//! };
//!
//! fn main() -> audiocut::Result<()> {
//!     let mut model = SelectionModel::new();
//!     model.load_source(240.0);
//!     model.set_selection(30.0, 90.0);
//!     model.set_volume(120);
//!
//!     let request = model.build_request(
//!         EditMode::Extract,
//!         OutputFormat::Mp3,
//!         FadeSpec::new(true, true),
//!     )?;
//!
//!     let handle = EngineHandle::new(|| todo!("construct your engine here"));
//!     let mut exporter = Exporter::new(handle);
//!     let result = exporter.export(b"raw source bytes", &request)?;
//!     assert_eq!(result.mime_type, "audio/mpeg");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several crates:
//! - `audiocut-core`: time ranges, output format tables, base errors
//! - `audiocut-edit`: selection and parameter model
//! - `audiocut-pipeline`: filter-graph compiler and engine boundary
//!
//! This crate re-exports the most commonly used types and provides the
//! high-level [`Exporter`] driver.

mod exporter;

// Re-export core types
pub use audiocut_core::{OutputFormat, TimeRange};

// Re-export the selection and request model
pub use audiocut_edit::{EditMode, EditRequest, EqBand, EqGains, FadeSpec, SelectionModel};

// Re-export pipeline types
pub use audiocut_pipeline::{
    compile, render, result_duration, AbortToken, EngineHandle, EngineOutput, ExecutionEngine,
    FilterChain, FilterParam, FilterStage, JobContext, PipelineDescription, PipelineError,
};

pub use exporter::{Error, ExportResult, Exporter, Result};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string.
pub fn version() -> &'static str {
    VERSION
}
