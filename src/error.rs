//! Error types for cartridge generation.

use thiserror::Error;

/// Errors that can occur while building a cartridge package.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: &'static str,
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the name of the build stage that produced it.
    pub(crate) fn at_stage(self, stage: &'static str) -> Error {
        Error::Stage {
            stage,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
