//! Error handling for substitute.
//! Every variant is fatal: the driver stops at the first one and reports it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a substitution run.
#[derive(Error, Debug)]
pub enum Error {
    /// The substitution file could not be read
    #[error("Failed to read substitution file '{}': {source}.", .path.display())]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The substitution file is not valid YAML or has the wrong shape
    #[error("Failed to parse substitution file: {0}.")]
    ConfigParseError(#[from] serde_yaml::Error),

    /// A template referenced by an entry could not be read
    #[error("Failed to read template file '{}': {source}.", .path.display())]
    TemplateReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The parent directory of an output file could not be created
    #[error("Failed to create output directory '{}': {source}.", .path.display())]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written
    #[error("Failed to write output file '{}': {source}.", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
