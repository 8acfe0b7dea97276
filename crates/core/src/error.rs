//! Error taxonomy shared by every fiorigen operation.
//!
//! Each variant maps to one abort reason in the scaffolding pipeline. Errors
//! are never retried: the invocation stops at the first failure and the
//! filesystem is left in whatever state the already-completed steps produced.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expected project marker (`webapp/manifest.json`) is absent or unusable.
    #[error("not a SAPUI5 project: {0}")]
    Configuration(String),

    /// A derived output path already exists; nothing has been touched.
    #[error("'{}' already exists", .0.display())]
    Collision(PathBuf),

    /// No candidate files, or no extension point in the chosen file.
    #[error("{0}")]
    NotFound(String),

    /// Source text (or a filled snippet template) is not parseable JavaScript.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The mutated source failed to re-parse; the original file is untouched.
    #[error("mutated source did not re-serialize cleanly: {0}")]
    Serialization(String),

    /// Filesystem failure while reading or writing project files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable lowercase label for the error kind, used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "configuration",
            Error::Collision(_) => "collision",
            Error::NotFound(_) => "not-found",
            Error::Syntax(_) => "syntax",
            Error::Serialization(_) => "serialization",
            Error::Io(_) => "io",
        }
    }
}
