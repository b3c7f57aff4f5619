//! Line-oriented parser for the card description text.
//!
//! The text is a loose, human-edited listing:
//!
//! ```text
//! Major Arcana
//! The N00b (0)
//! Upright: ...
//! Reversed: ...
//! Yes or No: ...
//!
//! Minor Arcana
//! Suit of Linux
//! Ace of Linux
//! Upright: ...
//! ```
//!
//! Section and suit headers are delimiters only. A record starts at a card
//! name line and collects field lines until the next card name.

use tarot_core::CardDescription;

use crate::rank::Rank;

const UPRIGHT: &str = "Upright:";
const REVERSED: &str = "Reversed:";
const YES_OR_NO: &str = "Yes or No:";

/// One card as read from the description text, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    /// The card name line, trimmed.
    pub name: String,
    /// Upright meaning, empty if the text never set it.
    pub upright: String,
    /// Reversed meaning, empty if the text never set it.
    pub reversed: String,
    /// Yes/no verdict, empty if the text never set it.
    pub yes_or_no: String,
}

impl CardRecord {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Names of the fields the text left unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.upright.is_empty() {
            missing.push("upright");
        }
        if self.reversed.is_empty() {
            missing.push("reversed");
        }
        if self.yes_or_no.is_empty() {
            missing.push("yes_or_no");
        }
        missing
    }

    /// The three texts as a card description.
    pub fn description(&self) -> CardDescription {
        CardDescription {
            upright: self.upright.clone(),
            reversed: self.reversed.clone(),
            yes_or_no: self.yes_or_no.clone(),
        }
    }
}

/// Parse description text into card records, in text order.
pub fn parse(text: &str) -> Vec<CardRecord> {
    let mut records = Vec::new();
    let mut current: Option<CardRecord> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || is_section_header(line) {
            continue;
        }

        // Field lines are checked first: meaning text may contain parentheses.
        if let Some(card) = current.as_mut() {
            if let Some(rest) = line.strip_prefix(UPRIGHT) {
                card.upright = rest.trim().to_string();
                continue;
            }
            if let Some(rest) = line.strip_prefix(REVERSED) {
                card.reversed = rest.trim().to_string();
                continue;
            }
            if let Some(rest) = line.strip_prefix(YES_OR_NO) {
                card.yes_or_no = rest.trim().to_string();
                continue;
            }
        }

        if is_card_name(line) {
            records.extend(current.replace(CardRecord::named(line)));
        }
    }

    records.extend(current);
    records
}

fn is_section_header(line: &str) -> bool {
    line == "Major Arcana" || line == "Minor Arcana" || line.starts_with("Suit of ")
}

fn is_card_name(line: &str) -> bool {
    (line.contains('(') && line.contains(')')) || Rank::starts_line(line)
}
