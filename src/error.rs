use std::io;
use std::path::PathBuf;

use thiserror::Error;

// The four failure kinds this program can hit, in pipeline order: bad
// arguments, bad argument values, unreadable file, unparsable file. Nothing
// is retried; every variant is fatal and maps to exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Usage: calsift <file_path> <days_before>\n   or: calsift <file_path> <start_date:dd_mm_yyyy> <end_date:dd_mm_yyyy>"
    )]
    Usage,

    #[error("{0}")]
    Parse(String),

    #[error("Failed to read calendar file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid calendar document {path}: {message}")]
    Format { path: PathBuf, message: String },

    // write failures on stdout, e.g. a closed pipe
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}
