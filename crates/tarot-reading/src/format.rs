//! Rendering a reading as narration text and as the client event payload.
//!
//! Everything here is a pure function of the [`Reading`].

use serde::{Deserialize, Serialize};
use tarot_core::{Arcana, Suit};

use crate::reading::{DrawnCard, Reading};

/// Event type the visual client listens for.
pub const SHOW_CARDS_EVENT: &str = "show_tarot_cards";

const NARRATION_HEADER: &str = "I have drawn three cards for you:";

/// One drawn card as sent to the visual client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCardView {
    /// Card name.
    pub name: String,
    /// Image path, `null` when the card has none.
    pub image: Option<String>,
    /// Whether the card was drawn reversed.
    pub reversed: bool,
    /// `"major"` or `"minor"`.
    pub arcana: Arcana,
    /// Suit name, omitted for major arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
    /// The meaning selected by the orientation.
    pub meaning: String,
    /// The yes/no verdict.
    pub yes_or_no: String,
}

impl From<&DrawnCard> for DrawnCardView {
    fn from(drawn: &DrawnCard) -> Self {
        Self {
            name: drawn.card.name.clone(),
            image: drawn.card.image.clone(),
            reversed: drawn.orientation.is_reversed(),
            arcana: drawn.arcana,
            suit: drawn.suit,
            meaning: drawn.meaning.clone(),
            yes_or_no: drawn.yes_or_no.clone(),
        }
    }
}

/// The full spread as sent to the visual client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPayload {
    /// The past card.
    pub past: DrawnCardView,
    /// The present card.
    pub present: DrawnCardView,
    /// The future card.
    pub future: DrawnCardView,
}

/// The user event wrapping a payload: `{"type": "show_tarot_cards", "reading": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEvent {
    /// Always [`SHOW_CARDS_EVENT`].
    #[serde(rename = "type")]
    pub kind: String,
    /// The spread.
    pub reading: ReadingPayload,
}

/// Narration for the voice agent: one block per position, past to future.
pub fn narration(reading: &Reading) -> String {
    let mut lines = vec![format!("{NARRATION_HEADER}\n")];
    for (position, drawn) in reading.cards() {
        lines.push(format!(
            "{} - {} ({})",
            position.key().to_uppercase(),
            drawn.name(),
            drawn.orientation
        ));
        lines.push(format!("Meaning: {}", drawn.meaning));
        lines.push(format!("Yes/No: {}\n", drawn.yes_or_no));
    }
    lines.join("\n")
}

/// The structured payload for the visual client.
pub fn event_payload(reading: &Reading) -> ReadingPayload {
    ReadingPayload {
        past: DrawnCardView::from(&reading.past),
        present: DrawnCardView::from(&reading.present),
        future: DrawnCardView::from(&reading.future),
    }
}

/// The payload wrapped in its user event envelope.
pub fn user_event(reading: &Reading) -> ReadingEvent {
    ReadingEvent {
        kind: SHOW_CARDS_EVENT.to_string(),
        reading: event_payload(reading),
    }
}
