use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The two card categories of a tarot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The distinctly named symbolic cards.
    Major,
    /// The suited cards (ace through ten plus four face ranks).
    Minor,
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// One of the four fixed minor-arcana suits.
///
/// Variant order is the canonical suit order used in the deck document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    /// The Linux suit.
    #[serde(rename = "Linux")]
    Linux,
    /// The Docker suit.
    #[serde(rename = "Docker")]
    Docker,
    /// The Cloud Developers suit.
    #[serde(rename = "Cloud Developers")]
    CloudDevelopers,
    /// The FreeSWITCH Developers suit.
    #[serde(rename = "FreeSWITCH Developers")]
    FreeswitchDevelopers,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [
        Suit::Linux,
        Suit::Docker,
        Suit::CloudDevelopers,
        Suit::FreeswitchDevelopers,
    ];

    /// The suit's name as used for document keys and payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::Docker => "Docker",
            Self::CloudDevelopers => "Cloud Developers",
            Self::FreeswitchDevelopers => "FreeSWITCH Developers",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CoreError;

    /// Parse a suit name case-insensitively, ignoring spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().replace(' ', "").to_lowercase() == compact)
            .ok_or_else(|| CoreError::UnknownSuit(s.to_string()))
    }
}

/// The three texts attached to every card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescription {
    /// Meaning when the card is drawn upright.
    pub upright: String,
    /// Meaning when the card is drawn reversed.
    pub reversed: String,
    /// Orientation-independent yes/no verdict.
    pub yes_or_no: String,
}

/// A single card as stored in the deck document.
///
/// Arcana and suit are positional in the document (which list the card sits
/// in), see [`crate::CardRef`] for the flattened view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, unique within a deck.
    pub name: String,
    /// Upright, reversed and yes/no texts.
    pub description: CardDescription,
    /// Resolved image asset path, if one was found.
    pub image: Option<String>,
}

impl CardDefinition {
    /// Create a card with the given name and description and no image.
    pub fn new(name: impl Into<String>, description: CardDescription) -> Self {
        Self {
            name: name.into(),
            description,
            image: None,
        }
    }

    /// Set the image path.
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}
