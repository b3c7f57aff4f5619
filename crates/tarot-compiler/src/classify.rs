//! Major/minor classification from a card name.

use tarot_core::Suit;

use crate::rank::Rank;

/// Lower-case markers that identify a suit anywhere in a card name.
const SUIT_MARKERS: [(&str, Suit); 4] = [
    ("linux", Suit::Linux),
    ("docker", Suit::Docker),
    ("cloud developer", Suit::CloudDevelopers),
    ("freeswitch developer", Suit::FreeswitchDevelopers),
];

/// Where a card belongs in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A major-arcana card.
    Major,
    /// A minor-arcana card of the given suit.
    Minor(Suit),
    /// The name has a minor rank phrase but no recognisable suit.
    Unclassifiable,
}

/// Classify a card by its name.
pub fn classify_card(name: &str) -> Classification {
    if Rank::split_name(name).is_none() {
        return Classification::Major;
    }
    let lower = name.to_lowercase();
    SUIT_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(*marker))
        .map_or(Classification::Unclassifiable, |(_, suit)| {
            Classification::Minor(*suit)
        })
}
