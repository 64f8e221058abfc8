use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a render. All of these are fatal.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read input file {path}: {source}")]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure from a reader with no file path attached
    #[error("cannot read input: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("line {line_no}: {reason}: {line:?}")]
    InputParse {
        line_no: usize,
        line: String,
        reason: String,
    },

    #[error("geographic dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("unsupported output format for {0} (expected .svg)")]
    UnsupportedFormat(PathBuf),

    #[error("cannot write output file {path}: {source}")]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
