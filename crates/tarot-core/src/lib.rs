//! Core types for the tarot deck: cards, suits, and the canonical deck document.
//!
//! The deck document is produced once by the compiler and treated as
//! read-only afterwards. Everything downstream (loading, drawing, formatting)
//! works against the types defined here.

/// Card definitions, arcana kinds, and suits.
pub mod card;
/// The canonical deck document and its builder.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;

/// Re-export card types.
pub use card::{Arcana, CardDefinition, CardDescription, Suit};
/// Re-export deck types.
pub use deck::{CardRef, DeckBuilder, DeckDocument, MinorArcana};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
