use std::{
    io::Write,
    process::{Command, Stdio},
};

use super::{FormatError, Formatter};

pub const DEFAULT_PROGRAM: &str = "clang-format";
pub const DEFAULT_STYLE: &str = "{IndentWidth: 4}";

/// Pipes the source through an external `clang-format` binary
#[derive(Debug, Clone)]
pub struct ClangFormat {
    pub program: String,
    pub style: String,
}

impl ClangFormat {
    pub fn new(program: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            style: style.into(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(format!("--style={}", self.style))
            // reading from stdin, so tell it which language it's looking at
            .arg("--assume-filename=main.c")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_STYLE)
    }
}

impl Formatter for ClangFormat {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = self.command().spawn().map_err(|e| FormatError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        // dropping stdin closes the pipe so the formatter sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        // always reap the child, its exit status explains a broken pipe
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(FormatError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        Ok(String::from_utf8(output.stdout)?)
    }
}
