//! Deterministic pipeline compilation for audio edits.
//!
//! Compiles a validated [`EditRequest`](audiocut_edit::EditRequest) into a
//! [`PipelineDescription`]: an ordered filter graph the external media
//! engine executes. Compilation is pure and deterministic; identical
//! requests always produce identical descriptions. Stringification of the
//! graph into the engine's textual syntax is a separate, final step in
//! [`render`].
//!
//! # Example
//!
//! ```
//! use audiocut_core::{OutputFormat, TimeRange};
//! use audiocut_edit::{EditMode, EditRequest, EqGains, FadeSpec};
//! use audiocut_pipeline::compile;
//!
//! let request = EditRequest {
//!     source_duration: 100.0,
//!     selection: TimeRange::new(10.0, 20.0),
//!     mode: EditMode::Extract,
//!     volume_percent: 100,
//!     speed_factor: 1.0,
//!     eq: EqGains::default(),
//!     fade: FadeSpec::none(),
//!     output_format: OutputFormat::Mp3,
//! };
//!
//! let pipeline = compile(&request).unwrap();
//! assert_eq!(pipeline.stage_count("atrim"), 1);
//! assert!((pipeline.result_duration - 10.0).abs() < 1e-9);
//! ```

mod compiler;
mod engine;
mod error;
mod graph;
pub mod render;

pub use compiler::{compile, result_duration};
pub use engine::{AbortToken, EngineFactory, EngineHandle, EngineOutput, ExecutionEngine, JobContext};
pub use error::{PipelineError, Result};
pub use graph::{FilterChain, FilterParam, FilterStage, PipelineDescription, SOURCE_LABEL};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
