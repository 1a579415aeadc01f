use std::io;
use std::path::PathBuf;

use bstree::CodecError;

/// Errors from reading, writing, or persisting tracked words
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("failed to access `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unusable snapshot `{}`", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

/// Reasons a snapshot could not be encoded or decoded
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("not a word tracker snapshot")]
    BadMagic,
    #[error("snapshot ends before its version byte")]
    Truncated,
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),
    #[error("malformed snapshot contents")]
    Codec(#[from] CodecError),
}

/// A command line that cannot be run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("expected 2 or 3 arguments but got {0}, nothing will run")]
    WrongCount(usize),
    #[error("invalid print format `{0}`, expected one of -pf, -pl, -po")]
    UnknownFormat(String),
    #[error("invalid output file specifier `{0}`, expected -f<output-file>")]
    BadOutput(String),
}
