use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("translation alphabets differ in length: {source_len} source chars, {target_len} target chars")]
    TransLength { source_len: usize, target_len: usize },

    #[error("cannot locate executable directory: {0}")]
    ExeDir(#[source] io::Error),
}

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;
