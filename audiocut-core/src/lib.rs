//! Core types for the audiocut editing library.
//!
//! Provides the fundamentals shared by the selection model and the
//! pipeline compiler: time ranges in seconds, output format and codec
//! tables, and the base error type.

mod error;
mod format;
mod time;

pub use error::{Error, Result};
pub use format::OutputFormat;
pub use time::TimeRange;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
