//! Runtime side of the tarot core.
//!
//! Loads the compiled deck document from a prioritized list of locations,
//! draws fair three-card spreads from it with OS-backed randomness, and
//! renders readings as narration text and as the event payload consumed by
//! the visual client.
//!
//! ```no_run
//! use tarot_reading::{DeckRepository, ReadingEngine, TarotReader, narration};
//!
//! let loaded = DeckRepository::default().load()?;
//! let engine = ReadingEngine::from_loaded(&loaded);
//! let reading = engine.draw_reading()?;
//! println!("{}", narration(&reading));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod reading;
pub mod repository;

pub use config::{DECK_PATH_ENV, RepositoryConfig};
pub use engine::{ReadingEngine, SPREAD_SIZE, TarotReader};
pub use error::{DeckError, DeckResult, ReadingError, ReadingResult};
pub use format::{
    DrawnCardView, ReadingEvent, ReadingPayload, SHOW_CARDS_EVENT, event_payload, narration,
    user_event,
};
pub use reading::{DrawnCard, Orientation, Position, Reading};
pub use repository::{DeckRepository, DeckSource, LoadedDeck};
