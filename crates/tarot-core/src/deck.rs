use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::{Arcana, CardDefinition, Suit};
use crate::error::{CoreError, CoreResult};

/// The minor arcana, one ordered card list per suit.
///
/// Field order is the canonical suit order, so serialization always emits
/// the suits as Linux, Docker, Cloud Developers, FreeSWITCH Developers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinorArcana {
    #[serde(rename = "Linux", default)]
    linux: Vec<CardDefinition>,
    #[serde(rename = "Docker", default)]
    docker: Vec<CardDefinition>,
    #[serde(rename = "Cloud Developers", default)]
    cloud_developers: Vec<CardDefinition>,
    #[serde(rename = "FreeSWITCH Developers", default)]
    freeswitch_developers: Vec<CardDefinition>,
}

impl MinorArcana {
    /// Cards of one suit, in document order.
    pub fn suit(&self, suit: Suit) -> &[CardDefinition] {
        match suit {
            Suit::Linux => &self.linux,
            Suit::Docker => &self.docker,
            Suit::CloudDevelopers => &self.cloud_developers,
            Suit::FreeswitchDevelopers => &self.freeswitch_developers,
        }
    }

    fn suit_mut(&mut self, suit: Suit) -> &mut Vec<CardDefinition> {
        match suit {
            Suit::Linux => &mut self.linux,
            Suit::Docker => &mut self.docker,
            Suit::CloudDevelopers => &mut self.cloud_developers,
            Suit::FreeswitchDevelopers => &mut self.freeswitch_developers,
        }
    }
}

/// A card together with the arcana and suit implied by its position in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef<'a> {
    /// The card definition.
    pub card: &'a CardDefinition,
    /// Major or minor.
    pub arcana: Arcana,
    /// The suit, present iff the card is minor.
    pub suit: Option<Suit>,
}

/// The canonical deck document.
///
/// Built once through [`DeckBuilder`] or loaded from JSON, and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDocument {
    #[serde(default)]
    major_arcana: Vec<CardDefinition>,
    #[serde(default)]
    minor_arcana: MinorArcana,
}

impl DeckDocument {
    /// A deck with no major cards and four empty suits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Major-arcana cards in document order.
    pub fn major(&self) -> &[CardDefinition] {
        &self.major_arcana
    }

    /// Minor-arcana cards of one suit in document order.
    pub fn minor(&self, suit: Suit) -> &[CardDefinition] {
        self.minor_arcana.suit(suit)
    }

    /// Total number of cards across all arcana.
    pub fn card_count(&self) -> usize {
        self.major_arcana.len()
            + Suit::ALL
                .iter()
                .map(|s| self.minor(*s).len())
                .sum::<usize>()
    }

    /// Returns `true` if the deck holds no cards at all.
    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// Number of cards per suit, in canonical suit order.
    pub fn suit_counts(&self) -> Vec<(Suit, usize)> {
        Suit::ALL
            .iter()
            .map(|s| (*s, self.minor(*s).len()))
            .collect()
    }

    /// All cards, major first, then each suit in canonical order.
    pub fn cards(&self) -> impl Iterator<Item = CardRef<'_>> {
        let major = self.major_arcana.iter().map(|card| CardRef {
            card,
            arcana: Arcana::Major,
            suit: None,
        });
        let minor = Suit::ALL.into_iter().flat_map(move |suit| {
            self.minor(suit).iter().map(move |card| CardRef {
                card,
                arcana: Arcana::Minor,
                suit: Some(suit),
            })
        });
        major.chain(minor)
    }

    /// Find a card by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<CardRef<'_>> {
        let lower = name.to_lowercase();
        self.cards().find(|c| c.card.name.to_lowercase() == lower)
    }

    /// Serialize to the canonical pretty-printed JSON form (two-space indent,
    /// trailing newline).
    pub fn to_json(&self) -> CoreResult<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Parse a deck document and verify card names are unique.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let deck: DeckDocument = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for card in deck.cards() {
            if !seen.insert(card.card.name.as_str()) {
                return Err(CoreError::DuplicateName(card.card.name.clone()));
            }
        }
        Ok(deck)
    }
}

/// Incrementally assembles a [`DeckDocument`] while enforcing unique names.
#[derive(Debug, Default)]
pub struct DeckBuilder {
    deck: DeckDocument,
    names: HashSet<String>,
}

impl DeckBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a major-arcana card.
    pub fn push_major(&mut self, card: CardDefinition) -> CoreResult<()> {
        self.claim(&card.name)?;
        self.deck.major_arcana.push(card);
        Ok(())
    }

    /// Append a minor-arcana card to the given suit.
    pub fn push_minor(&mut self, suit: Suit, card: CardDefinition) -> CoreResult<()> {
        self.claim(&card.name)?;
        self.deck.minor_arcana.suit_mut(suit).push(card);
        Ok(())
    }

    /// Finish building. The returned document is immutable.
    pub fn build(self) -> DeckDocument {
        self.deck
    }

    fn claim(&mut self, name: &str) -> CoreResult<()> {
        if !self.names.insert(name.to_string()) {
            return Err(CoreError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}
