//! Error types for the `renc` driver.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong running `renc` on a single file.
#[derive(Debug, Error)]
pub enum DrvError {
    #[error("couldn't read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Lex(#[from] ren_lex::LexError),

    #[error("couldn't serialize module metadata: {0}")]
    Meta(#[from] ren_util::ModuleMetaError),
}

pub type Result<T> = std::result::Result<T, DrvError>;
