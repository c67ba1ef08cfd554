use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an assembly run. None of these are recovered from.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("input directory does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("failed to read input directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no files ending in {suffix:?} found in {}", .dir.display())]
    NoFrames { dir: PathBuf, suffix: String },

    /// A file matched the suffix but its stem is not a non-negative integer.
    #[error("frame name {name:?} is not numeric")]
    NonNumericName { name: String },

    #[error("failed to decode frame {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot encode an empty frame sequence")]
    EmptySequence,

    #[error("failed to encode gif")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssembleError>;
