//! Error types for deck loading and drawing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for deck loading.
pub type DeckResult<T> = Result<T, DeckError>;

/// Result type for readings.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors raised while loading a deck document that exists on disk.
///
/// A missing deck is not an error: the repository falls back to an empty
/// deck instead.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The deck file exists but could not be read.
    #[error("cannot read deck {}: {source}", path.display())]
    Io {
        /// The deck file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The deck file is not a valid deck document.
    #[error("invalid deck {}: {source}", path.display())]
    Parse {
        /// The deck file.
        path: PathBuf,
        /// What was wrong with it.
        #[source]
        source: tarot_core::CoreError,
    },
}

/// Errors raised while drawing a reading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadingError {
    /// The deck has fewer cards than the spread needs.
    #[error("deck has {available} cards, a reading needs {required}")]
    InsufficientDeck {
        /// Cards in the deck.
        available: usize,
        /// Cards the spread needs.
        required: usize,
    },
}
