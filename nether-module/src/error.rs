//! Error types for module loading

use std::io;

use thiserror::Error;

use crate::sniff::ModuleFormat;

/// Errors returned by the load entry points
///
/// Any of these leaves the live model exactly as it was before the call.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The sniffer did not recognize the file
    #[error("Not a supported module")]
    UnsupportedFormat,
    /// The file was recognized but nobody registered a loader for it
    #[error("No loader registered for {0} modules")]
    NoLoader(ModuleFormat),
    /// The file exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },
    /// The loader rejected the file; staging was rolled back
    #[error("Malformed {format} module: {source}")]
    Malformed {
        format: ModuleFormat,
        #[source]
        source: LoaderError,
    },
}

/// Errors a per-format loader reports back to the pipeline
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Ran out of bytes in the middle of a structure
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Read failure other than a short read
    #[error("IO error: {0}")]
    Io(#[source] io::Error),
    /// A field had a value the format does not allow
    #[error("Invalid data: {0}")]
    Invalid(String),
    /// A staging allocation was refused
    #[error(transparent)]
    Staging(#[from] StagingError),
}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(err)
        }
    }
}

/// Errors from the staging allocator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StagingError {
    /// Pattern index is not below 256
    #[error("Pattern index {0} out of range")]
    PatternOutOfRange(usize),
    /// A pattern was already allocated at this index
    #[error("Pattern {0} already allocated")]
    PatternAlreadyAllocated(usize),
    /// Instrument index is 0 or past the staging slots
    #[error("Instrument index {0} out of range")]
    InstrumentOutOfRange(usize),
    /// An instrument was already allocated at this index
    #[error("Instrument {0} already allocated")]
    InstrumentAlreadyAllocated(usize),
    /// The allocator could not reserve memory
    #[error("Out of memory while staging")]
    OutOfMemory,
}
