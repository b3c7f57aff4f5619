//! Offline deck compiler.
//!
//! Turns the free-form card description text and the image asset tree into
//! the canonical [`DeckDocument`](tarot_core::DeckDocument). Every decision
//! (record boundaries, arcana/suit classification, image matching) is a pure
//! function of the card name and the directory listing, so compiling the same
//! inputs twice yields byte-identical output.

pub mod classify;
pub mod config;
pub mod error;
pub mod images;
pub mod parser;
pub mod rank;

mod compiler;

pub use classify::{Classification, classify_card};
pub use compiler::{CompileOutput, CompileReport, compile, compile_files};
pub use config::CompilerConfig;
pub use error::{CompileError, CompileResult};
pub use images::{ImageIndex, map_card_to_image};
pub use parser::{CardRecord, parse};
pub use rank::Rank;
