use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid selection: {start}s to {end}s")]
    InvalidSelection { start: f64, end: f64 },

    #[error("Source duration unknown: no media loaded")]
    SourceNotLoaded,

    #[error(transparent)]
    Core(#[from] audiocut_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
