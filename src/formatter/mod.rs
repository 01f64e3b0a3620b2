use std::{io, process::ExitStatus, string::FromUtf8Error};

use thiserror::Error;

pub mod clang_format;

pub use self::clang_format::ClangFormat;

/// Turns assembled C into its final, human readable layout.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Leaves the source exactly as the assembler produced it
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

impl<F> Formatter for F
where
    F: Fn(&str) -> Result<String, FormatError>,
{
    fn format(&self, source: &str) -> Result<String, FormatError> {
        self(source)
    }
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Couldn't start formatter `{program:}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO Error while talking to the formatter")]
    Io(
        #[from]
        io::Error,
    ),

    #[error("Formatter exited with {status:}: {stderr:}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("Formatter produced invalid UTF-8")]
    Utf8(
        #[from]
        FromUtf8Error,
    ),
}
