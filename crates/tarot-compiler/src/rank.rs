//! Minor-arcana ranks and the name phrases that identify them.

/// One of the fourteen minor-arcana ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page.
    Page,
    /// Knight.
    Knight,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, ace to king.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// The phrase that names the rank in a card, e.g. `"Ace of "`.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Ace => "Ace of ",
            Self::Two => "Two of ",
            Self::Three => "Three of ",
            Self::Four => "Four of ",
            Self::Five => "Five of ",
            Self::Six => "Six of ",
            Self::Seven => "Seven of ",
            Self::Eight => "Eight of ",
            Self::Nine => "Nine of ",
            Self::Ten => "Ten of ",
            Self::Page => "Page of ",
            Self::Knight => "Knight of ",
            Self::Queen => "Queen of ",
            Self::King => "King of ",
        }
    }

    /// The token image filenames start with, e.g. `"ace"` or `"7"`.
    pub fn image_token(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Page => "page",
            Self::Knight => "knight",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Case-sensitive check used while scanning description text.
    pub fn starts_line(line: &str) -> bool {
        Rank::ALL.iter().any(|r| line.starts_with(r.phrase()))
    }

    /// Split a card name into its rank and the text after the rank phrase,
    /// ignoring case.
    ///
    /// The phrase must start a word: it may open the name or follow
    /// whitespace, so `"The Ace of Linux (I)"` splits but `"The Space of
    /// Linux"` does not. Ranks are tried ace to king; the first hit wins.
    pub fn split_name(name: &str) -> Option<(Rank, &str)> {
        let lower = name.to_ascii_lowercase();
        Rank::ALL.into_iter().find_map(|rank| {
            let phrase = rank.phrase().to_ascii_lowercase();
            lower
                .match_indices(&phrase)
                .map(|(at, _)| at)
                .find(|&at| at == 0 || lower[..at].ends_with(char::is_whitespace))
                .and_then(|at| name.get(at + phrase.len()..))
                .map(|rest| (rank, rest))
        })
    }
}
