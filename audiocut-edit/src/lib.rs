//! Selection and parameter model for audio editing.
//!
//! Holds the user-facing editing state (time-range selection, volume,
//! speed, EQ) and produces validated, immutable [`EditRequest`] snapshots
//! for the pipeline compiler. Setters follow a forgiving-UI contract:
//! out-of-domain values are clamped, never rejected.
//!
//! # Example
//!
//! ```
//! use audiocut_core::OutputFormat;
//! use audiocut_edit::{EditMode, FadeSpec, SelectionModel};
//!
//! let mut model = SelectionModel::new();
//! model.load_source(120.0);
//! model.set_selection(10.0, 30.0);
//! model.set_volume(150);
//!
//! let request = model
//!     .build_request(EditMode::Extract, OutputFormat::Mp3, FadeSpec::none())
//!     .unwrap();
//! assert!((request.selection_duration() - 20.0).abs() < 1e-9);
//! ```

mod error;
mod request;
mod selection;

pub use error::{Error, Result};
pub use request::{EditMode, EditRequest, EqBand, EqGains, FadeSpec};
pub use selection::SelectionModel;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
