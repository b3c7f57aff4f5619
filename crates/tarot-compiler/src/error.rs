//! Error types for deck compilation.

use std::path::PathBuf;

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that abort a compilation run.
///
/// Content problems (unclassifiable cards, missing images, incomplete
/// records) are not errors; they are counted in the
/// [`CompileReport`](crate::CompileReport).
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A description file, image directory, or output file could not be accessed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The deck document could not be serialized.
    #[error(transparent)]
    Core(#[from] tarot_core::CoreError),
}
